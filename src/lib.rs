//! # url-alias
//!
//! An alias-keyed URL shortener built with Axum and SQLite. Creating and
//! deleting mappings requires HTTP basic auth plus an administrator check
//! against a remote gRPC authorization service; redirects are public.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, typed errors and capability traits
//! - **Application Layer** ([`application`]) - Save/resolve/delete orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage and the gRPC authorization client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /url` - Store a URL under a supplied or generated alias
//! - `DELETE /url/{alias}` - Delete a mapping
//! - `GET /{alias}` - Redirect to the stored URL
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_PATH="storage/urls.db"
//! export HTTP_USER="user" HTTP_PASSWORD="secret"
//! export AUTH_CLIENT_ADDRESS="http://localhost:44044"
//!
//! cargo run -- --env local
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::errors::{AuthzError, StoreError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
