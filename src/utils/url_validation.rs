//! Target URL validation.

use url::Url;

/// Returns true if `raw` parses as an absolute URL with both a scheme and a host.
///
/// Relative references (`invalid_url`, `/path`) and host-less URLs
/// (`mailto:user@example.com`) are rejected.
pub fn is_valid_target(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| url.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_urls() {
        assert!(is_valid_target("https://example.com/"));
        assert!(is_valid_target("http://localhost:8080/path?q=1#frag"));
        assert!(is_valid_target("ftp://files.example.org/pub"));
    }

    #[test]
    fn test_rejects_relative_and_hostless() {
        assert!(!is_valid_target("invalid_url"));
        assert!(!is_valid_target("/relative/path"));
        assert!(!is_valid_target("mailto:user@example.com"));
        assert!(!is_valid_target(""));
        assert!(!is_valid_target("https://"));
    }
}
