//! Handler for the save endpoint.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, error, info};
use validator::Validate;

use super::privilege::ensure_privileged;
use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::middleware::basic_auth::Caller;
use crate::domain::errors::StoreError;
use crate::error::{AppError, MSG_ALIAS_EXISTS, MSG_INVALID_REQUEST};
use crate::state::AppState;

/// Stores a URL under a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/", "alias": "abc123" }
/// ```
///
/// `alias` is optional; when omitted a 6-character alphanumeric alias is
/// generated.
///
/// # Response
///
/// ```json
/// { "alias": "abc123" }
/// ```
///
/// # Errors
///
/// - `200 {"error": ...}` if the body is malformed or fails validation
/// - `403 Forbidden` if the caller is not privileged
/// - `409 Conflict` if the supplied alias is taken
/// - `500 Internal Server Error` on authorization or storage failures
pub async fn save_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "failed to decode request body");
        AppError::bad_request(MSG_INVALID_REQUEST)
    })?;

    payload.validate()?;

    ensure_privileged(&state, caller).await?;

    let record = state
        .url_service
        .save(payload.url, payload.alias)
        .await
        .map_err(|err| match err {
            StoreError::AliasAlreadyExists(alias) => {
                info!(%alias, "alias already exists");
                AppError::conflict(MSG_ALIAS_EXISTS)
            }
            other => {
                error!(error = %other, "failed to save url");
                AppError::internal()
            }
        })?;

    info!(
        alias = %record.alias,
        id = record.id,
        subject_id = caller.subject_id,
        "url saved"
    );

    Ok(Json(SaveResponse {
        alias: record.alias,
    }))
}
