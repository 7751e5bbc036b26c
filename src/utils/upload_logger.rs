use crate::utils::log_utils::Logger;

/// Severity for upload-related messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadLogLevel {
    Normal,
    Info,
    Debug,
    Warn,
}

/// Interface for routing per-file upload feedback.
pub trait UploadLogger: Send + Sync {
    fn log(&self, level: UploadLogLevel, message: &str);

    fn normal(&self, message: &str) {
        self.log(UploadLogLevel::Normal, message);
    }

    fn info(&self, message: &str) {
        self.log(UploadLogLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(UploadLogLevel::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.log(UploadLogLevel::Warn, message);
    }
}

/// CLI implementation that proxies through the shared [`Logger`].
#[derive(Clone)]
pub struct CliUploadLogger {
    logger: Logger,
}

impl CliUploadLogger {
    #[must_use]
    pub fn new(logger: &Logger) -> Self {
        Self { logger: *logger }
    }
}

impl UploadLogger for CliUploadLogger {
    fn log(&self, level: UploadLogLevel, message: &str) {
        match level {
            UploadLogLevel::Normal => self.logger.normal(message),
            UploadLogLevel::Info => self.logger.info(message),
            UploadLogLevel::Debug => self.logger.debug(message),
            UploadLogLevel::Warn => self.logger.warn(message),
        }
    }
}
