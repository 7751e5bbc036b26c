use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort or fail a whole deploy run.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Upload of {path} failed ({failed} failed in total): {source}")]
    Upload {
        path: PathBuf,
        failed: usize,
        #[source]
        source: UploadError,
    },

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Problems with the build configuration. Always raised before any upload starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("build config not found at {0}")]
    NotFound(PathBuf),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Field missing in build config: {0}")]
    MissingField(&'static str),

    #[error("Unsupported deploy target: {0}")]
    UnsupportedTarget(String),

    #[error("No upload hosts configured")]
    NoUploadHosts,
}

/// Per-file transport or auth failure reported by an uploader.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upload rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response from upload host: {0}")]
    InvalidResponse(String),

    #[error("failed to build upload token: {0}")]
    Token(String),
}

pub type Result<T> = std::result::Result<T, DeployError>;
