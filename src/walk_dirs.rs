use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{DeployError, Result};
use crate::utils::path_utils::relative_slash_path;

/// List every regular file under `base_dir`, relative to it and slash-joined.
///
/// Symlinks are not followed and are not returned. Entries come back sorted by
/// file name within each directory.
///
/// # Errors
///
/// The first traversal error aborts the walk: a missing or non-directory
/// `base_dir`, an unreadable subdirectory or a file name that is not valid
/// UTF-8 fails the whole enumeration.
pub fn get_all_files(base_dir: &Path) -> Result<Vec<String>> {
    let metadata = fs::metadata(base_dir).map_err(|source| DeployError::Filesystem {
        path: base_dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DeployError::Filesystem {
            path: base_dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(base_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| DeployError::Filesystem {
            path: e.path().unwrap_or(base_dir).to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative =
            relative_slash_path(base_dir, entry.path()).ok_or_else(|| DeployError::Filesystem {
                path: entry.path().to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
            })?;
        files.push(relative);
    }

    Ok(files)
}
