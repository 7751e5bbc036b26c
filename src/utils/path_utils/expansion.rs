use home::home_dir;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// # Errors
///
/// Returns an error if the path starts with `~` and no home directory is known.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    match path.strip_prefix("~") {
        Ok(rest) => home_dir()
            .map(|home| home.join(rest))
            .ok_or_else(|| "Home directory could not be determined.".to_string()),
        Err(_) => Ok(path.to_path_buf()),
    }
}
