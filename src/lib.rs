pub mod args;
pub mod build_conf;
pub mod deploy;
pub mod errors;
pub mod interfaces;
pub mod sourcemap;
pub mod upload;
pub mod utils;
pub mod walk_dirs;

pub use args::Args;
pub use deploy::{UploadOptions, UploadReport};
pub use errors::{ConfigError, DeployError, UploadError};

use crate::upload::{FormUploader, UploaderConfig};
use crate::utils::log_utils::{Logger, log_lifecycle};
use crate::utils::upload_logger::{CliUploadLogger, UploadLogger};

/// Upload the dist directory described by `args` and report what happened.
///
/// # Errors
///
/// Returns an error if the run could not start or any upload failed; in the
/// latter case every other upload has still been attempted and logged.
pub fn run_app(args: &Args) -> Result<UploadReport, DeployError> {
    let logger = Logger::new(args.verbose);
    let upload_logger = CliUploadLogger::new(&logger);
    let options = UploadOptions::from(args);

    log_lifecycle("upload", &logger, || {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| DeployError::Runtime(format!("Failed to create runtime: {e}")))?;

        runtime.block_on(async {
            let report = deploy::upload_with(&options, &upload_logger, |deploy_config| {
                let config =
                    UploaderConfig::from_deploy_config(deploy_config, &options.upload_hosts);
                let uploader = FormUploader::new(&config)?;
                upload_logger.debug(&format!("Upload endpoint: {}", uploader.upload_url()));
                Ok(uploader)
            })
            .await?;
            summarize(&report, &upload_logger);
            report.into_result()
        })
    })
}

fn summarize(report: &UploadReport, logger: &dyn UploadLogger) {
    logger.info(&format!(
        "{} uploaded, {} ignored, {} failed",
        report.uploaded(),
        report.ignored(),
        report.failed()
    ));
    for outcome in report.outcomes() {
        if let deploy::FileStatus::Failed(e) = &outcome.status {
            logger.warn(&format!(
                "[FAILED] {} -> {}: {e}",
                outcome.local_path.display(),
                outcome.key
            ));
        }
    }
}
