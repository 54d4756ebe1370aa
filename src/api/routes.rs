//! API route configuration.
//!
//! Mutating endpoints require HTTP basic authentication via
//! [`crate::api::middleware::basic_auth`]; redirects are public.

use crate::api::handlers::{
    delete_empty_alias_handler, delete_url_handler, redirect_empty_handler, redirect_handler,
    save_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes that mutate mappings.
///
/// # Endpoints
///
/// - `POST   /url`          - Store a URL under a supplied or generated alias
/// - `DELETE /url/{alias}`  - Delete a mapping
/// - `DELETE /url`          - Rejected: empty alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/url",
            post(save_handler).delete(delete_empty_alias_handler),
        )
        .route("/url/{alias}", delete(delete_url_handler))
}

/// Public routes.
///
/// # Endpoints
///
/// - `GET /{alias}` - Redirect to the stored target
/// - `GET /`        - Rejected: empty alias
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(redirect_empty_handler))
        .route("/{alias}", get(redirect_handler))
}
