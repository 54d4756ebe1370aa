//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`          - Save a mapping (basic auth)
//! - `DELETE /url/{alias}`  - Delete a mapping (basic auth)
//! - `GET    /{alias}`      - Redirect (public)
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Path normalization** - Trailing slash trimmed before routing
//! - **Request id** - `x-request-id` assigned when absent and echoed on the response
//! - **Tracing** - Structured request/response logging tagged with the request id
//! - **Panic guard** - Handler panics become `500`
//! - **Timeout** - Whole-request deadline; dropping the handler cancels in-flight calls
//! - **Authentication** - Basic auth on the mutating routes only

use crate::api;
use crate::api::middleware::{basic_auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::{Router, middleware};
use std::time::Duration;
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline for a whole request; on expiry the handler
///   future is dropped and the client gets `408 Request Timeout`
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        basic_auth::layer,
    ));

    let router = Router::new()
        .merge(protected)
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(tracing::layer())
                .layer(CatchPanicLayer::new())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
