use std::fs;
use std::path::Path;

use dist_uploader::errors::DeployError;
use dist_uploader::walk_dirs::get_all_files;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, rel.as_bytes()).unwrap();
}

#[test]
fn test_lists_nested_files_relative_to_root() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    touch(dir.path(), "index.html");
    touch(dir.path(), "static/js/app.js");
    touch(dir.path(), "static/js/app.js.map");
    touch(dir.path(), "static/css/main.css");
    fs::create_dir_all(dir.path().join("empty/nested"))?;

    let mut files = get_all_files(dir.path())?;
    files.sort();

    assert_eq!(
        files,
        vec![
            "index.html",
            "static/css/main.css",
            "static/js/app.js",
            "static/js/app.js.map",
        ]
    );
    Ok(())
}

#[test]
fn test_empty_dir_yields_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    assert!(get_all_files(dir.path())?.is_empty());
    Ok(())
}

#[test]
fn test_missing_root_is_filesystem_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("dist");

    match get_all_files(&missing) {
        Err(DeployError::Filesystem { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected filesystem error, got {other:?}"),
    }
}

#[test]
fn test_regular_file_root_is_filesystem_error() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("dist");
    fs::write(&not_a_dir, "oops").unwrap();

    match get_all_files(&not_a_dir) {
        Err(DeployError::Filesystem { path, source }) => {
            assert_eq!(path, not_a_dir);
            assert_eq!(source.kind(), std::io::ErrorKind::NotADirectory);
        }
        other => panic!("expected filesystem error, got {other:?}"),
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_file_name_is_filesystem_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new().unwrap();
    touch(dir.path(), "ok.js");
    let bad = dir.path().join(OsStr::from_bytes(b"bad\xff.js"));
    fs::write(&bad, "x").unwrap();

    match get_all_files(dir.path()) {
        Err(DeployError::Filesystem { path, source }) => {
            assert_eq!(path, bad);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected filesystem error, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_listed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    touch(dir.path(), "real.js");
    std::os::unix::fs::symlink(dir.path().join("real.js"), dir.path().join("link.js"))?;

    assert_eq!(get_all_files(dir.path())?, vec!["real.js"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdir_aborts_walk() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new()?;
    touch(dir.path(), "a.js");
    touch(dir.path(), "locked/secret.js");
    let locked = dir.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // root ignores permission bits; nothing to assert in that case
    let readable_anyway = fs::read_dir(&locked).is_ok();
    let result = get_all_files(dir.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    if !readable_anyway {
        assert!(matches!(result, Err(DeployError::Filesystem { .. })));
    }
    Ok(())
}
