//! Placeholder URL "shortener".
//!
//! Not a shortening service: the slug is a deterministic derivation of the
//! input (first characters of its base64 encoding), no mapping is stored
//! anywhere, and the produced link does not resolve.

use crate::error::{MediaError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const SHORT_URL_PREFIX: &str = "https://short.ly/";

const SLUG_LEN: usize = 6;

/// Derive the placeholder short URL for `url`.
pub fn shorten_url(url: &str) -> Result<String> {
    if !url.starts_with("http") {
        return Err(MediaError::InvalidInput(
            "URL must start with http/https".to_string(),
        ));
    }
    let encoded = STANDARD.encode(url);
    let slug: String = encoded.chars().take(SLUG_LEN).collect();
    Ok(format!("{SHORT_URL_PREFIX}{slug}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_a_known_slug() {
        // base64("https://example.com") = "aHR0cHM6Ly9leGFtcGxlLmNvbQ=="
        assert_eq!(
            shorten_url("https://example.com").unwrap(),
            "https://short.ly/aHR0cH"
        );
    }

    #[test]
    fn is_deterministic() {
        let first = shorten_url("https://example.com/some/long/path?q=1").unwrap();
        let second = shorten_url("https://example.com/some/long/path?q=1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_http_input() {
        assert!(shorten_url("ftp://example.com").is_err());
        assert!(shorten_url("example.com").is_err());
        assert!(shorten_url("").is_err());
    }
}
