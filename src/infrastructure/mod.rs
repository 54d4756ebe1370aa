//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`auth`] - gRPC authorization client with retries
//! - [`persistence`] - SQLite repository implementations

pub mod auth;
pub mod persistence;
