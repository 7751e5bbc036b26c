use std::path::Path;

use async_trait::async_trait;
use reqwest::Body;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tokio_util::io::ReaderStream;

use crate::errors::{ConfigError, UploadError};
use crate::interfaces::Uploader;
use crate::upload::credentials::Credentials;
use crate::upload::models::{UploadReceipt, UploaderConfig};
use crate::upload::token::PutPolicy;
use crate::utils::url_utils::host_to_url;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Multipart form upload to a fixed upload host.
pub struct FormUploader {
    http: reqwest::Client,
    upload_url: String,
    token_ttl_secs: i64,
}

impl FormUploader {
    /// Create an uploader targeting the first configured host
    ///
    /// # Errors
    ///
    /// Returns an error if no upload host is configured.
    pub fn new(config: &UploaderConfig) -> Result<Self, ConfigError> {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Same as [`FormUploader::new`] with a caller-built HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if no upload host is configured.
    pub fn with_client(config: &UploaderConfig, http: reqwest::Client) -> Result<Self, ConfigError> {
        let host = config
            .upload_hosts
            .iter()
            .map(|h| h.trim())
            .find(|h| !h.is_empty())
            .ok_or(ConfigError::NoUploadHosts)?;

        Ok(Self {
            http,
            upload_url: host_to_url(host),
            token_ttl_secs: config.token_ttl_secs,
        })
    }

    #[must_use]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

#[async_trait]
impl Uploader for FormUploader {
    async fn upload(
        &self,
        local_file: &Path,
        bucket: &str,
        key: &str,
        credentials: &Credentials,
    ) -> Result<UploadReceipt, UploadError> {
        let token = PutPolicy::new(bucket, key, self.token_ttl_secs).upload_token(credentials)?;

        // streamed from disk, only read buffers are held per in-flight upload
        let file = tokio::fs::File::open(local_file).await?;
        let length = file.metadata().await?.len();
        let body = Body::wrap_stream(ReaderStream::new(file));
        let file_name = local_file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(key)
            .to_string();
        let part = Part::stream_with_length(body, length)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;

        let form = Form::new()
            .text("token", token)
            .text("key", key.to_string())
            .part("file", part);

        let response = self.http.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // error bodies are usually {"error": "..."}, fall back to the raw text
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<UploadReceipt>(&text)
            .map_err(|e| UploadError::InvalidResponse(format!("{e}: {text}")))
    }
}
