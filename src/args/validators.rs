pub use crate::utils::path_utils::{check_readable_dir, check_readable_file};

/// Parse `--concurrency`, which must be at least 1
///
/// # Errors
///
/// Returns an error if the value is not a positive integer.
pub fn parse_concurrency(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid concurrency '{value}': {e}")),
    }
}

/// Parse `--upload-host`: a bare host or an http(s) URL, no whitespace
///
/// # Errors
///
/// Returns an error if the host is empty, contains whitespace or uses another scheme.
pub fn parse_upload_host(value: &str) -> Result<String, String> {
    let host = value.trim();
    if host.is_empty() {
        return Err("upload host must not be empty".to_string());
    }
    if host.chars().any(char::is_whitespace) {
        return Err(format!("upload host '{host}' contains whitespace"));
    }
    if host.contains("://") && !(host.starts_with("http://") || host.starts_with("https://")) {
        return Err(format!("upload host '{host}' must use http or https"));
    }
    Ok(host.to_string())
}
