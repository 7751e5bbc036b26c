use std::path::{Component, Path};

/// Path of `path` relative to `base`, joined with `/` whatever the platform separator.
///
/// Returns `None` if `path` is not under `base` or a component is not valid UTF-8.
#[must_use]
pub fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
