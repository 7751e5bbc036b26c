//! Upload of a build's distribution directory to the configured bucket.

pub mod report;

pub use report::{FileOutcome, FileStatus, UploadReport};

use std::fmt;
use std::path::{Path, PathBuf};

use futures::{StreamExt, stream};

use crate::build_conf::{self, BuildConfig, DeployConfig};
use crate::errors::Result;
use crate::interfaces::Uploader;
use crate::sourcemap::is_source_map;
use crate::upload::Credentials;
use crate::utils::upload_logger::UploadLogger;
use crate::utils::url_utils::object_key;
use crate::walk_dirs::get_all_files;

/// Progress of a run. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployPhase {
    Idle,
    ConfigLoading,
    Enumerating,
    Uploading,
    Done,
    Failed,
}

impl fmt::Display for DeployPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeployPhase::Idle => "idle",
            DeployPhase::ConfigLoading => "config-loading",
            DeployPhase::Enumerating => "enumerating",
            DeployPhase::Uploading => "uploading",
            DeployPhase::Done => "done",
            DeployPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Knobs for a run that do not live in the build config
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub build_root: PathBuf,
    /// Defaults to `<build_root>/build-config.json`
    pub build_config: Option<PathBuf>,
    /// Replaces the configured upload hosts when non-empty
    pub upload_hosts: Vec<String>,
    /// Max uploads in flight; `None` dispatches everything at once
    pub concurrency: Option<usize>,
}

impl UploadOptions {
    #[must_use]
    pub fn new(build_root: impl Into<PathBuf>) -> Self {
        Self {
            build_root: build_root.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.build_config
            .clone()
            .unwrap_or_else(|| build_conf::default_config_path(&self.build_root))
    }
}

/// Everything needed to upload one distribution directory
#[derive(Debug)]
pub struct UploadJob {
    pub dist_path: PathBuf,
    pub prefix: String,
    pub bucket: String,
    pub credentials: Credentials,
    pub files: Vec<String>,
}

impl UploadJob {
    /// Resolve paths and credentials from the config, then enumerate the dist directory.
    ///
    /// # Errors
    ///
    /// Returns a filesystem error if the dist directory cannot be walked.
    pub fn prepare(
        build_root: &Path,
        config: &BuildConfig,
        deploy: &DeployConfig,
        logger: &dyn UploadLogger,
    ) -> Result<Self> {
        let dist_path = config.dist_path(build_root);
        let dist_path = std::path::absolute(&dist_path).unwrap_or(dist_path);
        let prefix = config.key_prefix();
        let credentials = Credentials::from(deploy);

        set_phase(logger, DeployPhase::Enumerating);
        logger.info(&format!("Scanning {}", dist_path.display()));
        let files = get_all_files(&dist_path)?;
        logger.info(&format!(
            "Found {} files, key prefix '{}', bucket '{}'",
            files.len(),
            prefix,
            deploy.bucket
        ));

        Ok(Self {
            dist_path,
            prefix,
            bucket: deploy.bucket.clone(),
            credentials,
            files,
        })
    }

    /// Upload every file, skipping source maps. All uploads run to completion;
    /// failures are recorded in the report rather than stopping siblings.
    pub async fn run(
        &self,
        uploader: &dyn Uploader,
        logger: &dyn UploadLogger,
        concurrency: Option<usize>,
    ) -> UploadReport {
        set_phase(logger, DeployPhase::Uploading);

        let limit = concurrency.unwrap_or(self.files.len()).max(1);
        let tasks = self
            .files
            .iter()
            .enumerate()
            .map(|(idx, relative)| async move {
                (idx, self.upload_one(relative, uploader, logger).await)
            });

        let completed: Vec<(usize, FileOutcome)> =
            stream::iter(tasks).buffer_unordered(limit).collect().await;

        UploadReport::from_completed(completed)
    }

    async fn upload_one(
        &self,
        relative: &str,
        uploader: &dyn Uploader,
        logger: &dyn UploadLogger,
    ) -> FileOutcome {
        let local_path = self.dist_path.join(relative);
        let key = object_key(&self.prefix, relative);
        let shown = local_path.display().to_string();

        let status = if is_source_map(&shown) {
            logger.normal(&format!("[IGNORE] {shown}"));
            FileStatus::Ignored
        } else {
            match uploader
                .upload(&local_path, &self.bucket, &key, &self.credentials)
                .await
            {
                Ok(receipt) => {
                    logger.normal(&format!("[UPLOAD] {shown} -> {key}"));
                    FileStatus::Uploaded(receipt)
                }
                Err(e) => {
                    logger.debug(&format!("upload of {shown} -> {key} failed: {e}"));
                    FileStatus::Failed(e)
                }
            }
        };

        FileOutcome {
            relative_path: relative.to_string(),
            local_path,
            key,
            status,
        }
    }
}

fn set_phase(logger: &dyn UploadLogger, phase: DeployPhase) {
    logger.debug(&format!("phase: {phase}"));
}

/// Run the whole pipeline with an uploader built from the validated deploy config.
///
/// Config and enumeration errors abort before any upload. Upload failures do not;
/// they are returned inside the report.
///
/// # Errors
///
/// Returns an error if the config is missing or invalid, the uploader cannot be
/// built, or the dist directory cannot be walked.
pub async fn upload_with<U, F>(
    options: &UploadOptions,
    logger: &dyn UploadLogger,
    make_uploader: F,
) -> Result<UploadReport>
where
    U: Uploader,
    F: FnOnce(&DeployConfig) -> Result<U>,
{
    set_phase(logger, DeployPhase::Idle);
    let outcome = prepare_and_run(options, logger, make_uploader).await;
    match &outcome {
        Ok(report) if report.is_success() => set_phase(logger, DeployPhase::Done),
        _ => set_phase(logger, DeployPhase::Failed),
    }
    outcome
}

async fn prepare_and_run<U, F>(
    options: &UploadOptions,
    logger: &dyn UploadLogger,
    make_uploader: F,
) -> Result<UploadReport>
where
    U: Uploader,
    F: FnOnce(&DeployConfig) -> Result<U>,
{
    set_phase(logger, DeployPhase::ConfigLoading);
    let config_path = options.config_path();
    logger.info(&format!("Using build config {}", config_path.display()));
    let config = build_conf::find(&config_path)?;
    let deploy = config.deploy_config()?;
    let uploader = make_uploader(&deploy)?;

    let job = UploadJob::prepare(&options.build_root, &config, &deploy, logger)?;
    Ok(job.run(&uploader, logger, options.concurrency).await)
}
