//! Privilege gate shared by the mutating handlers.

use tracing::{error, info};

use crate::api::middleware::basic_auth::Caller;
use crate::domain::authorization::PrivilegeChecker;
use crate::domain::errors::AuthzError;
use crate::error::AppError;
use crate::state::AppState;

/// Asks the authorization service whether `caller` may mutate mappings.
///
/// # Errors
///
/// - `403 Forbidden` if the caller is not privileged or the service denied the call
/// - `500 Internal Server Error` if the service could not answer
pub async fn ensure_privileged(state: &AppState, caller: Caller) -> Result<(), AppError> {
    let subject_id = caller.subject_id;

    match state.authorizer.check_privilege(subject_id).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            info!(subject_id, "caller is not privileged");
            Err(AppError::forbidden())
        }
        Err(AuthzError::Denied(reason)) => {
            info!(subject_id, %reason, "authorization service denied the call");
            Err(AppError::forbidden())
        }
        Err(err) => {
            error!(subject_id, error = %err, "privilege check failed");
            Err(AppError::internal())
        }
    }
}
