//! Handlers for alias deletion.

use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{error, info};

use super::privilege::ensure_privileged;
use crate::api::dto::save::{MSG_EMPTY_ALIAS, validate_alias};
use crate::api::middleware::basic_auth::Caller;
use crate::domain::errors::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping stored under an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// # Response
///
/// `200 OK` with an empty body.
///
/// # Errors
///
/// - `200 {"error": ...}` if the alias is malformed; nothing is called
/// - `403 Forbidden` if the caller is not privileged
/// - `200 {"error": "not found"}` if the alias is unknown
/// - `500 Internal Server Error` on authorization or storage failures
pub async fn delete_url_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> Result<StatusCode, AppError> {
    validate_alias(&alias).map_err(|err| {
        AppError::bad_request(
            err.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| MSG_EMPTY_ALIAS.to_string()),
        )
    })?;

    ensure_privileged(&state, caller).await?;

    state
        .url_service
        .delete(&alias)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => {
                info!(%alias, "url not found");
                AppError::not_found()
            }
            other => {
                error!(%alias, error = %other, "failed to delete url");
                AppError::internal()
            }
        })?;

    info!(%alias, subject_id = caller.subject_id, "url deleted");

    Ok(StatusCode::OK)
}

/// `DELETE /url`: a delete request without an alias.
pub async fn delete_empty_alias_handler() -> AppError {
    AppError::bad_request(MSG_EMPTY_ALIAS)
}
