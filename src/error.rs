//! HTTP-facing error type.
//!
//! Every failure leaves the API as `{"error": "<message>"}`. Validation and
//! not-found failures are reported in-band with `200 OK`; the remaining
//! variants carry their own status.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Realm advertised in `WWW-Authenticate` challenges.
pub const AUTH_REALM: &str = r#"Basic realm="url-alias""#;

pub const MSG_NOT_FOUND: &str = "not found";
pub const MSG_ALIAS_EXISTS: &str = "alias already exists";
pub const MSG_FORBIDDEN: &str = "forbidden";
pub const MSG_UNAUTHORIZED: &str = "unauthorized";
pub const MSG_INTERNAL: &str = "internal error";
pub const MSG_INVALID_REQUEST: &str = "failed to decode request";

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Forbidden { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            message: MSG_UNAUTHORIZED.to_string(),
        }
    }
    pub fn forbidden() -> Self {
        Self::Forbidden {
            message: MSG_FORBIDDEN.to_string(),
        }
    }
    pub fn not_found() -> Self {
        Self::NotFound {
            message: MSG_NOT_FOUND.to_string(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal() -> Self {
        Self::Internal {
            message: MSG_INTERNAL.to_string(),
        }
    }

    /// Status code this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::OK,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::OK,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Field names in the order their errors are reported.
const VALIDATED_FIELDS: [&str; 2] = ["url", "alias"];

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let message = VALIDATED_FIELDS
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        AppError::bad_request(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let unauthorized = matches!(self, AppError::Unauthorized { .. });

        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = (status, Json(body)).into_response();

        if unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(AUTH_REALM),
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_statuses() {
        assert_eq!(AppError::bad_request("x").status(), StatusCode::OK);
        assert_eq!(AppError::unauthorized().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::forbidden().status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::not_found().status(), StatusCode::OK);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_is_user_message() {
        assert_eq!(AppError::not_found().to_string(), "not found");
        assert_eq!(AppError::bad_request("empty alias").to_string(), "empty alias");
    }

    #[test]
    fn test_validation_errors_prefer_url_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "alias",
            ValidationError::new("alias").with_message("empty alias".into()),
        );
        errors.add(
            "url",
            ValidationError::new("url").with_message("field URL is not a valid URL".into()),
        );

        let err = AppError::from(errors);
        assert_eq!(err.to_string(), "field URL is not a valid URL");
    }

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = AppError::unauthorized().into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            AUTH_REALM
        );
    }
}
