pub mod credentials;
pub mod form_uploader;
pub mod models;
pub mod token;

// Re-export types for convenient access from other modules
pub use credentials::Credentials;
pub use form_uploader::FormUploader;
pub use models::{UploadReceipt, UploaderConfig};
pub use token::PutPolicy;
