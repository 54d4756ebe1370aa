//! Client for the remote authorization service.
//!
//! - [`proto`] - `auth.Auth` wire types and tonic stub
//! - [`transport`] - Single-attempt [`AdminTransport`] and its gRPC implementation
//! - [`retry`] - [`RetryingAuthClient`], the bounded-retry decorator used by the API

pub mod proto;
pub mod retry;
pub mod transport;

pub use retry::{DEFAULT_RETRYABLE_CODES, RetryPolicy, RetryingAuthClient};
pub use transport::{AdminTransport, GrpcAdminTransport};
