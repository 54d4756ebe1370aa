//! Retrying decorator around [`AdminTransport`].
//!
//! Each attempt runs under its own timeout and is traced as a request event
//! and a response event. Only codes in [`RetryPolicy::retryable`] are retried;
//! everything else ends the call on the first failure.
//!
//! No task is spawned: the whole retry loop lives inside the caller's future,
//! so dropping that future (client disconnect, request timeout) cancels the
//! in-flight attempt and any pending backoff.

use async_trait::async_trait;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::jitter;
use tonic::{Code, Status};
use tracing::{debug, warn};

use super::transport::AdminTransport;
use crate::domain::authorization::PrivilegeChecker;
use crate::domain::errors::AuthzError;

/// Codes treated as transient by default.
pub const DEFAULT_RETRYABLE_CODES: [Code; 4] = [
    Code::NotFound,
    Code::Aborted,
    Code::DeadlineExceeded,
    Code::Unavailable,
];

/// Upper bound on the backoff doubling exponent.
const MAX_BACKOFF_SHIFT: u32 = 10;

/// Retry budget for a single privilege check.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Zero behaves as one.
    pub max_attempts: u32,
    /// Timeout applied to every attempt independently.
    pub per_attempt_timeout: Duration,
    /// Base delay before the first retry; doubled for each further retry and jittered.
    pub backoff: Duration,
    /// Status codes that may be retried.
    pub retryable: Vec<Code>,
}

impl RetryPolicy {
    /// Creates a policy retrying [`DEFAULT_RETRYABLE_CODES`].
    pub fn new(max_attempts: u32, per_attempt_timeout: Duration, backoff: Duration) -> Self {
        Self {
            max_attempts,
            per_attempt_timeout,
            backoff,
            retryable: DEFAULT_RETRYABLE_CODES.to_vec(),
        }
    }

    /// Returns true if a failure with `code` may be retried.
    pub fn is_retryable(&self, code: Code) -> bool {
        self.retryable.contains(&code)
    }

    /// Longest a privilege check can take: every attempt timing out plus every
    /// backoff at its un-jittered ceiling.
    pub fn worst_case_duration(&self) -> Duration {
        let attempts = self.max_attempts.max(1);
        let backoff: Duration = self.base_delays().sum();

        self.per_attempt_timeout
            .saturating_mul(attempts)
            .saturating_add(backoff)
    }

    /// Delays between attempts; yields `max_attempts - 1` items.
    fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        self.base_delays().map(jitter)
    }

    /// Doubling delays before jitter, which only ever shortens them.
    fn base_delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let base = self.backoff;
        (0..self.max_attempts.saturating_sub(1))
            .map(move |n| base.saturating_mul(1 << n.min(MAX_BACKOFF_SHIFT)))
    }
}

/// [`PrivilegeChecker`] backed by a retried `IsAdmin` call.
pub struct RetryingAuthClient<T: AdminTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: AdminTransport> RetryingAuthClient<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Asks the authorization service whether `user_id` is an administrator.
    ///
    /// # Errors
    ///
    /// - [`AuthzError::Denied`] if the service answers `PERMISSION_DENIED`
    /// - [`AuthzError::Unavailable`] if every attempt failed with a retryable code
    /// - [`AuthzError::Failed`] on any other terminal status
    pub async fn is_admin(&self, user_id: i64) -> Result<bool, AuthzError> {
        let timeout = self.policy.per_attempt_timeout;
        let mut attempts: u32 = 0;

        let result = RetryIf::spawn(
            self.policy.delays(),
            || {
                attempts += 1;
                let attempt = attempts;
                async move { self.attempt(attempt, user_id, timeout).await }
            },
            |status: &Status| {
                let retry = self.policy.is_retryable(status.code());
                if retry {
                    warn!(
                        user_id,
                        code = ?status.code(),
                        message = status.message(),
                        "transient IsAdmin failure"
                    );
                }
                retry
            },
        )
        .await;

        result.map_err(|status| self.classify(status, attempts))
    }

    async fn attempt(&self, attempt: u32, user_id: i64, timeout: Duration) -> Result<bool, Status> {
        debug!(attempt, user_id, "IsAdmin request sent");

        match tokio::time::timeout(timeout, self.transport.is_admin(user_id)).await {
            Ok(Ok(is_admin)) => {
                debug!(attempt, user_id, is_admin, "IsAdmin response received");
                Ok(is_admin)
            }
            Ok(Err(status)) => {
                debug!(
                    attempt,
                    user_id,
                    code = ?status.code(),
                    message = status.message(),
                    "IsAdmin error received"
                );
                Err(status)
            }
            Err(_) => Err(Status::deadline_exceeded(format!(
                "IsAdmin attempt {attempt} timed out after {}ms",
                timeout.as_millis()
            ))),
        }
    }

    fn classify(&self, status: Status, attempts: u32) -> AuthzError {
        let code = status.code();
        let message = status.message().to_string();

        if code == Code::PermissionDenied {
            AuthzError::Denied(message)
        } else if self.policy.is_retryable(code) {
            AuthzError::Unavailable { attempts, message }
        } else {
            AuthzError::Failed {
                code: format!("{code:?}"),
                message,
            }
        }
    }
}

#[async_trait]
impl<T: AdminTransport> PrivilegeChecker for RetryingAuthClient<T> {
    async fn check_privilege(&self, subject_id: i64) -> Result<bool, AuthzError> {
        self.is_admin(subject_id).await
    }
}
