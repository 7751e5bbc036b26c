use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

use crate::errors::UploadError;
use crate::upload::{Credentials, UploadReceipt};

/// Interface for object storage uploads to facilitate testing
///
/// Implementations transfer one local file to `bucket` under `key`, authorizing
/// with `credentials`. Failures are returned as-is; callers never retry.
#[automock]
#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(
        &self,
        local_file: &Path,
        bucket: &str,
        key: &str,
        credentials: &Credentials,
    ) -> Result<UploadReceipt, UploadError>;
}
