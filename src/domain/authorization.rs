//! Privilege check contract consumed by the request pipeline.

use crate::domain::errors::AuthzError;
use async_trait::async_trait;

/// Decides whether a subject may create or delete mappings.
///
/// Returns `Ok(true)` for a privileged subject and `Ok(false)` for one that is
/// not. Errors mean the question could not be answered.
#[async_trait]
pub trait PrivilegeChecker: Send + Sync {
    async fn check_privilege(&self, subject_id: i64) -> Result<bool, AuthzError>;
}
