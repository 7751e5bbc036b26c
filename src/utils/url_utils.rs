use reqwest::Url;

/// Extract the path part of a public URL, without leading or trailing slashes.
///
/// Accepts absolute (`https://cdn.example.com/v1/`), protocol-relative (`//cdn/v1`)
/// and bare path (`/v1/`) forms. Returns an empty string for a root URL or an
/// unparseable one.
#[must_use]
pub fn get_path_from_url(url: &str) -> String {
    let Ok(base) = Url::parse("http://localhost/") else {
        return String::new();
    };
    match base.join(url.trim()) {
        Ok(parsed) => parsed.path().trim_matches('/').to_string(),
        Err(_) => String::new(),
    }
}

/// Join a key prefix and a slash-separated relative path into an object key.
#[must_use]
pub fn object_key(prefix: &str, relative_path: &str) -> String {
    if prefix.is_empty() {
        relative_path.to_string()
    } else {
        format!("{prefix}/{relative_path}")
    }
}

/// Make sure an upload host carries a scheme, defaulting to https.
#[must_use]
pub fn host_to_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}
