//! HTTP middleware for request processing and protection.
//!
//! Provides basic authentication and request tracing.

pub mod basic_auth;
pub mod tracing;
