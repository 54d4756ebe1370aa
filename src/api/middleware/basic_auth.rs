//! HTTP basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;
use tracing::info;

use crate::{error::AppError, state::AppState};

/// Identity of an authenticated caller, attached to the request extensions.
///
/// `subject_id` is the id the authorization service knows the caller by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub subject_id: i64,
}

/// The single user/password pair accepted by the protected routes.
#[derive(Clone)]
pub struct BasicCredentials {
    user: String,
    password: String,
    subject_id: i64,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>, subject_id: i64) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            subject_id,
        }
    }

    /// Returns the caller identity if `user`/`password` match.
    pub fn authenticate(&self, user: &str, password: Option<&str>) -> Option<Caller> {
        let password = password.unwrap_or_default();

        // Both digests are always compared; neither length nor the failing field leaks.
        let user_ok = digest_eq(user, &self.user);
        let password_ok = digest_eq(password, &self.password);

        bool::from(user_ok & password_ok).then_some(Caller {
            subject_id: self.subject_id,
        })
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .field("subject_id", &self.subject_id)
            .finish()
    }
}

/// Compares fixed-size SHA-256 digests in constant time.
fn digest_eq(provided: &str, expected: &str) -> subtle::Choice {
    let provided = Sha256::digest(provided.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());

    provided.as_slice().ct_eq(expected.as_slice())
}

/// Authenticates requests using HTTP basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// On success a [`Caller`] is inserted into the request extensions for the
/// handler's privilege check.
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if the
/// header is missing, malformed, or carries the wrong credentials.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized())?;

    let Some(caller) = st.credentials.authenticate(&user, password.as_deref()) else {
        info!(%user, "rejected basic credentials");
        return Err(AppError::unauthorized());
    };

    parts.extensions.insert(caller);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
