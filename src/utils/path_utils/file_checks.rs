use super::expansion::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Checks if a file is readable, used as a clap value parser
///
/// # Errors
///
/// Returns an error if the path is not a regular file or its metadata cannot be read.
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let expanded_path = expand_tilde(&PathBuf::from(file))?;

    if expanded_path.is_file() && fs::metadata(&expanded_path).is_ok() {
        Ok(expanded_path)
    } else {
        Err(format!("The file '{file}' is not readable."))
    }
}
