//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::utils::alias_generator::is_valid_alias;
use crate::utils::url_validation::is_valid_target;

pub const MSG_URL_REQUIRED: &str = "field URL is a required field";
pub const MSG_URL_INVALID: &str = "field URL is not a valid URL";
pub const MSG_EMPTY_ALIAS: &str = "empty alias";
pub const MSG_ALIAS_INVALID: &str = "field ALIAS is not a valid alias";

/// Request to store a URL, optionally under a chosen alias.
///
/// ```json
/// { "url": "https://example.com/", "alias": "abc123" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Absolute target URL (scheme and host required).
    #[serde(default)]
    #[validate(custom(function = "validate_target"))]
    pub url: String,

    /// Alias to store the URL under; generated when omitted.
    #[validate(custom(function = "validate_alias"))]
    pub alias: Option<String>,
}

/// Alias the URL was stored under.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveResponse {
    pub alias: String,
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_target(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(error("required", MSG_URL_REQUIRED));
    }
    if !is_valid_target(url) {
        return Err(error("url", MSG_URL_INVALID));
    }
    Ok(())
}

/// Validates an alias taken from a request body or path segment.
pub fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    if alias.is_empty() {
        return Err(error("empty", MSG_EMPTY_ALIAS));
    }
    if !is_valid_alias(alias) {
        return Err(error("alias", MSG_ALIAS_INVALID));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn request(url: &str, alias: Option<&str>) -> SaveRequest {
        SaveRequest {
            url: url.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    fn message(req: SaveRequest) -> Option<String> {
        req.validate().err().map(|e| AppError::from(e).to_string())
    }

    #[test]
    fn test_valid_request_with_and_without_alias() {
        assert_eq!(message(request("https://example.com/", Some("abc123"))), None);
        assert_eq!(message(request("https://example.com/", None)), None);
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(
            message(request("invalid_url", None)).as_deref(),
            Some(MSG_URL_INVALID)
        );
    }

    #[test]
    fn test_missing_url() {
        assert_eq!(message(request("", None)).as_deref(), Some(MSG_URL_REQUIRED));
    }

    #[test]
    fn test_empty_alias() {
        assert_eq!(
            message(request("https://example.com/", Some(""))).as_deref(),
            Some(MSG_EMPTY_ALIAS)
        );
    }

    #[test]
    fn test_alias_with_slash() {
        assert_eq!(
            message(request("https://example.com/", Some("a/b"))).as_deref(),
            Some(MSG_ALIAS_INVALID)
        );
    }

    #[test]
    fn test_url_error_reported_before_alias_error() {
        assert_eq!(
            message(request("invalid_url", Some(""))).as_deref(),
            Some(MSG_URL_INVALID)
        );
    }

    #[test]
    fn test_missing_url_field_deserializes_as_empty() {
        let req: SaveRequest = serde_json::from_str(r#"{"alias":"abc"}"#).unwrap();
        assert_eq!(req.url, "");
        assert_eq!(message(req).as_deref(), Some(MSG_URL_REQUIRED));
    }
}
