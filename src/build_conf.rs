//! Loading of `build-config.json`, the project's build and deploy settings.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::utils::url_utils::get_path_from_url;

pub const BUILD_CONFIG_FILE_NAME: &str = "build-config.json";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_PUBLIC_URL: &str = "/";
pub const DEFAULT_UPLOAD_HOST: &str = "up.qiniup.com";
pub const QINIU_TARGET: &str = "qiniu";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default = "default_public_url")]
    pub public_url: String,
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
    pub deploy: Option<Deploy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deploy {
    #[serde(default = "default_target")]
    pub target: String,
    pub config: Option<RawDeployConfig>,
}

/// Deploy settings as written in the file; every field optional so that
/// missing ones surface as [`ConfigError::MissingField`] rather than a parse error.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeployConfig {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub bucket: Option<String>,
    pub upload_hosts: Option<Vec<String>>,
}

impl fmt::Debug for RawDeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawDeployConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "****"))
            .field("bucket", &self.bucket)
            .field("upload_hosts", &self.upload_hosts)
            .finish()
    }
}

/// Validated destination settings for a deploy run.
#[derive(Clone)]
pub struct DeployConfig {
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub upload_hosts: Vec<String>,
}

impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"****")
            .field("bucket", &self.bucket)
            .field("upload_hosts", &self.upload_hosts)
            .finish()
    }
}

fn default_public_url() -> String {
    DEFAULT_PUBLIC_URL.to_string()
}

fn default_dist_dir() -> String {
    DEFAULT_DIST_DIR.to_string()
}

fn default_target() -> String {
    QINIU_TARGET.to_string()
}

fn required(value: Option<&String>, field: &'static str) -> Result<String, ConfigError> {
    match value.map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::MissingField(field)),
    }
}

impl BuildConfig {
    /// Parse a build config from JSON text. `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for a build config.
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate and extract the deploy destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not qiniu, a required field is missing
    /// or empty, or the host list is explicitly empty.
    pub fn deploy_config(&self) -> Result<DeployConfig, ConfigError> {
        let deploy = self
            .deploy
            .as_ref()
            .ok_or(ConfigError::MissingField("deploy"))?;
        if deploy.target != QINIU_TARGET {
            return Err(ConfigError::UnsupportedTarget(deploy.target.clone()));
        }
        let raw = deploy
            .config
            .as_ref()
            .ok_or(ConfigError::MissingField("deploy.config"))?;

        let upload_hosts = match &raw.upload_hosts {
            Some(hosts) => {
                let hosts: Vec<String> = hosts
                    .iter()
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
                    .collect();
                if hosts.is_empty() {
                    return Err(ConfigError::NoUploadHosts);
                }
                hosts
            }
            None => vec![DEFAULT_UPLOAD_HOST.to_string()],
        };

        Ok(DeployConfig {
            access_key: required(raw.access_key.as_ref(), "deploy.config.accessKey")?,
            secret_key: required(raw.secret_key.as_ref(), "deploy.config.secretKey")?,
            bucket: required(raw.bucket.as_ref(), "deploy.config.bucket")?,
            upload_hosts,
        })
    }

    /// Output directory, resolved against the build root
    #[must_use]
    pub fn dist_path(&self, build_root: &Path) -> PathBuf {
        build_root.join(&self.dist_dir)
    }

    /// Object key prefix derived from the public URL
    #[must_use]
    pub fn key_prefix(&self) -> String {
        get_path_from_url(&self.public_url)
    }
}

/// Default location of the build config inside a build root
#[must_use]
pub fn default_config_path(build_root: &Path) -> PathBuf {
    build_root.join(BUILD_CONFIG_FILE_NAME)
}

/// Read and parse the build config at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist, or an IO/JSON error.
pub fn find(path: &Path) -> Result<BuildConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    BuildConfig::from_json(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> BuildConfig {
        BuildConfig::from_json(text, Path::new("build-config.json")).unwrap()
    }

    #[test]
    fn test_defaults() {
        let conf = parse(r#"{"deploy": {"config": {"accessKey": "ak", "secretKey": "sk", "bucket": "b"}}}"#);
        assert_eq!(conf.dist_dir, "dist");
        assert_eq!(conf.public_url, "/");
        assert_eq!(conf.key_prefix(), "");

        let deploy = conf.deploy_config().unwrap();
        assert_eq!(deploy.bucket, "b");
        assert_eq!(deploy.upload_hosts, vec!["up.qiniup.com".to_string()]);
    }

    #[test]
    fn test_missing_secret_key() {
        let conf = parse(r#"{"deploy": {"target": "qiniu", "config": {"accessKey": "ak", "bucket": "b"}}}"#);
        match conf.deploy_config() {
            Err(ConfigError::MissingField(field)) => assert_eq!(field, "deploy.config.secretKey"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_blank_bucket_is_missing() {
        let conf = parse(r#"{"deploy": {"config": {"accessKey": "ak", "secretKey": "sk", "bucket": "  "}}}"#);
        assert!(matches!(
            conf.deploy_config(),
            Err(ConfigError::MissingField("deploy.config.bucket"))
        ));
    }

    #[test]
    fn test_unsupported_target() {
        let conf = parse(r#"{"deploy": {"target": "ftp", "config": {}}}"#);
        assert!(matches!(
            conf.deploy_config(),
            Err(ConfigError::UnsupportedTarget(t)) if t == "ftp"
        ));
    }

    #[test]
    fn test_empty_upload_hosts_rejected() {
        let conf = parse(
            r#"{"deploy": {"config": {"accessKey": "ak", "secretKey": "sk", "bucket": "b", "uploadHosts": []}}}"#,
        );
        assert!(matches!(conf.deploy_config(), Err(ConfigError::NoUploadHosts)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let conf = parse(
            r#"{"deploy": {"config": {"accessKey": "ak", "secretKey": "top-secret", "bucket": "b"}}}"#,
        );
        let deploy = conf.deploy_config().unwrap();
        assert!(!format!("{deploy:?}").contains("top-secret"));
        assert!(!format!("{conf:?}").contains("top-secret"));
    }

    #[test]
    fn test_paths_and_prefix() {
        let conf = parse(r#"{"publicUrl": "https://cdn.example.com/v1/", "distDir": "build"}"#);
        assert_eq!(conf.dist_path(Path::new("/proj")), PathBuf::from("/proj/build"));
        assert_eq!(conf.key_prefix(), "v1");
        assert!(matches!(conf.deploy_config(), Err(ConfigError::MissingField("deploy"))));
    }
}
