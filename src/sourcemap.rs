use regex::Regex;
use std::sync::LazyLock;

/// Naming convention of source maps emitted by the build.
pub const SOURCE_MAP_PATTERN: &str = r"\.map$";

static SOURCE_MAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    // literal pattern, always compiles
    Regex::new(SOURCE_MAP_PATTERN).unwrap()
});

/// Source maps stay out of the production bucket.
#[must_use]
pub fn is_source_map(path: &str) -> bool {
    SOURCE_MAP_RE.is_match(path)
}
