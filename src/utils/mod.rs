pub mod log_utils;
pub mod path_utils;
pub mod recording_logger;
pub mod upload_logger;
pub mod url_utils;
