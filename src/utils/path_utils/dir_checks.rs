use super::expansion::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Checks if a directory is readable, used as a clap value parser
///
/// # Errors
///
/// Returns an error if the directory does not exist or cannot be listed.
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = expand_tilde(&PathBuf::from(dir))?;

    if path.is_dir() && fs::read_dir(&path).is_ok() {
        Ok(path)
    } else {
        Err(format!("The directory '{dir}' is not readable."))
    }
}
