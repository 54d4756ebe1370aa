//! Bare, single-attempt transport for the `IsAdmin` call.

use async_trait::async_trait;
use std::time::Duration;
use tonic::Status;
use tonic::transport::Endpoint;

use super::proto::{AuthClient, IsAdminRequest};

/// One unretried `IsAdmin` round trip.
///
/// Implemented by [`GrpcAdminTransport`] in production and by fakes in tests,
/// so the retry policy in [`super::RetryingAuthClient`] can be exercised
/// without a network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminTransport: Send + Sync {
    async fn is_admin(&self, user_id: i64) -> Result<bool, Status>;
}

/// tonic-backed transport.
///
/// The channel is plaintext (`http://`) and unauthenticated. It connects lazily
/// on the first call, so the service starts even while the authorization
/// service is down.
#[derive(Debug, Clone)]
pub struct GrpcAdminTransport {
    client: AuthClient,
}

impl GrpcAdminTransport {
    /// Builds a lazily-connecting transport to `address`.
    ///
    /// # Errors
    ///
    /// Returns an error if `address` is not a valid URI.
    pub fn connect_lazy(
        address: &str,
        connect_timeout: Duration,
    ) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(address.to_string())?
            .connect_timeout(connect_timeout)
            .connect_lazy();

        Ok(Self {
            client: AuthClient::new(channel),
        })
    }
}

#[async_trait]
impl AdminTransport for GrpcAdminTransport {
    async fn is_admin(&self, user_id: i64) -> Result<bool, Status> {
        let mut client = self.client.clone();
        let response = client.is_admin(IsAdminRequest { user_id }).await?;
        Ok(response.into_inner().is_admin)
    }
}
