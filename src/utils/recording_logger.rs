use crate::utils::upload_logger::{UploadLogLevel, UploadLogger};
use std::sync::{Arc, Mutex};

/// Collects log lines in memory so tests can assert on them.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    messages: Arc<Mutex<Vec<(UploadLogLevel, String)>>>,
}

impl UploadLogger for RecordingLogger {
    fn log(&self, level: UploadLogLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl RecordingLogger {
    pub fn logs(&self) -> Vec<(UploadLogLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages only, in the order they were logged
    pub fn lines(&self) -> Vec<String> {
        self.logs().into_iter().map(|(_, msg)| msg).collect()
    }
}
