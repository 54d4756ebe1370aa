//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};
use url::Url;

use crate::api::dto::save::MSG_EMPTY_ALIAS;
use crate::domain::errors::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored target.
///
/// # Endpoint
///
/// `GET /{alias}` (public)
///
/// # Response
///
/// `302 Found` with `Location` set to the stored target.
///
/// # Errors
///
/// - `200 {"error": "not found"}` if the alias is unknown
/// - `500 Internal Server Error` on storage failures
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if alias.is_empty() {
        return Err(AppError::bad_request(MSG_EMPTY_ALIAS));
    }

    let target = state
        .url_service
        .resolve(&alias)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => {
                info!(%alias, "url not found");
                AppError::not_found()
            }
            other => {
                error!(%alias, error = %other, "failed to resolve url");
                AppError::internal()
            }
        })?;

    let location = location_header(&target).ok_or_else(|| {
        error!(%alias, %target, "stored target is not a valid Location header");
        AppError::internal()
    })?;

    info!(%alias, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `GET /`: a redirect request without an alias.
pub async fn redirect_empty_handler() -> AppError {
    AppError::bad_request(MSG_EMPTY_ALIAS)
}

/// Builds the `Location` value. ASCII targets are sent verbatim; anything else
/// goes through the `url` serialization, which percent-encodes it.
fn location_header(target: &str) -> Option<HeaderValue> {
    if target.is_ascii()
        && let Ok(value) = HeaderValue::from_str(target)
    {
        return Some(value);
    }

    let url = Url::parse(target).ok()?;
    HeaderValue::from_str(url.as_str()).ok()
}
