//! Wire types and client stub for the `auth.Auth` gRPC service.
//!
//! Mirrors the service's protobuf contract:
//!
//! ```protobuf
//! package auth;
//!
//! service Auth {
//!   rpc IsAdmin (IsAdminRequest) returns (IsAdminResponse);
//! }
//!
//! message IsAdminRequest { int64 user_id = 1; }
//! message IsAdminResponse { bool is_admin = 1; }
//! ```
//!
//! Only the single unary call this service consumes is declared, so the stub is
//! written against `tonic::client::Grpc` directly instead of a protoc build step.

use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct IsAdminRequest {
    #[prost(int64, tag = "1")]
    pub user_id: i64,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct IsAdminResponse {
    #[prost(bool, tag = "1")]
    pub is_admin: bool,
}

/// Fully-qualified method path of `Auth.IsAdmin`.
pub const IS_ADMIN_PATH: &str = "/auth.Auth/IsAdmin";

/// Client for the `auth.Auth` service over a tonic [`Channel`].
#[derive(Debug, Clone)]
pub struct AuthClient {
    inner: tonic::client::Grpc<Channel>,
}

impl AuthClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    pub async fn is_admin(
        &mut self,
        request: impl tonic::IntoRequest<IsAdminRequest>,
    ) -> Result<tonic::Response<IsAdminResponse>, tonic::Status> {
        self.inner.ready().await.map_err(|e| {
            tonic::Status::unavailable(format!("auth service was not ready: {e}"))
        })?;

        let codec = tonic_prost::ProstCodec::default();
        let path = PathAndQuery::from_static(IS_ADMIN_PATH);

        self.inner.unary(request.into_request(), path, codec).await
    }
}
