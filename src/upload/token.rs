//! Upload tokens: a put policy signed with HMAC-SHA1 over its URL-safe base64 form.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;

use crate::errors::UploadError;
use crate::upload::credentials::Credentials;

type HmacSha1 = Hmac<Sha1>;

/// Policy authorizing a single `bucket:key` upload until `deadline` (unix seconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutPolicy {
    pub scope: String,
    pub deadline: i64,
}

impl PutPolicy {
    /// Policy for `bucket:key` valid for `ttl_secs` from now
    #[must_use]
    pub fn new(bucket: &str, key: &str, ttl_secs: i64) -> Self {
        Self::with_deadline(bucket, key, chrono::Utc::now().timestamp() + ttl_secs)
    }

    #[must_use]
    pub fn with_deadline(bucket: &str, key: &str, deadline: i64) -> Self {
        Self {
            scope: format!("{bucket}:{key}"),
            deadline,
        }
    }

    /// `<accessKey>:<urlsafe_b64(hmac_sha1(encodedPolicy))>:<encodedPolicy>`
    ///
    /// # Errors
    ///
    /// Returns an error if the policy cannot be serialized or the key is unusable.
    pub fn upload_token(&self, credentials: &Credentials) -> Result<String, UploadError> {
        let policy = serde_json::to_string(self).map_err(|e| UploadError::Token(e.to_string()))?;
        let encoded_policy = URL_SAFE.encode(policy.as_bytes());
        let sign = sign(credentials.secret_key(), &encoded_policy)?;
        Ok(format!(
            "{}:{}:{}",
            credentials.access_key(),
            sign,
            encoded_policy
        ))
    }
}

fn sign(secret_key: &str, data: &str) -> Result<String, UploadError> {
    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
        .map_err(|e| UploadError::Token(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_and_deadline() {
        let before = chrono::Utc::now().timestamp();
        let policy = PutPolicy::new("web", "v1/index.html", 3600);
        assert_eq!(policy.scope, "web:v1/index.html");
        assert!(policy.deadline >= before + 3600);
        assert!(policy.deadline <= chrono::Utc::now().timestamp() + 3600);
    }

    #[test]
    fn test_token_layout() {
        let credentials = Credentials::new("my-ak", "my-sk");
        let policy = PutPolicy::with_deadline("web", "index.html", 1_700_000_000);
        let token = policy.upload_token(&credentials).unwrap();

        let parts: Vec<&str> = token.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "my-ak");

        let decoded = URL_SAFE.decode(parts[2]).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(json["scope"], "web:index.html");
        assert_eq!(json["deadline"], 1_700_000_000);

        // 20-byte SHA1 MAC, padded base64
        assert_eq!(parts[1].len(), 28);
        assert_eq!(parts[1], sign("my-sk", parts[2]).unwrap());
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let policy = PutPolicy::with_deadline("web", "index.html", 1_700_000_000);
        let a = policy.upload_token(&Credentials::new("ak", "one")).unwrap();
        let b = policy.upload_token(&Credentials::new("ak", "two")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_url_safe_alphabet() {
        let token = PutPolicy::with_deadline("bucket", "a/b/c?.js", 4_102_444_800)
            .upload_token(&Credentials::new("ak", "sk"))
            .unwrap();
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
    }
}
