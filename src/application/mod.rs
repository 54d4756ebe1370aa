//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias assignment, resolution and deletion

pub mod services;
