use serde::Deserialize;

use crate::build_conf::DeployConfig;

/// Lifetime of an upload token, matching the storage SDK default
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// What the storage service reports for a stored object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    pub key: String,
    pub hash: String,
}

/// Settings for the form uploader.
///
/// Upload hosts are always explicit; the zone discovery service is never queried.
#[derive(Debug, Clone)]
pub struct UploaderConfig {
    pub upload_hosts: Vec<String>,
    pub token_ttl_secs: i64,
}

impl UploaderConfig {
    #[must_use]
    pub fn new(upload_hosts: Vec<String>) -> Self {
        Self {
            upload_hosts,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    /// Host list from the build config, replaced wholesale by `overrides` when non-empty
    #[must_use]
    pub fn from_deploy_config(config: &DeployConfig, overrides: &[String]) -> Self {
        if overrides.is_empty() {
            Self::new(config.upload_hosts.clone())
        } else {
            Self::new(overrides.to_vec())
        }
    }
}
