//! Repository trait for alias-keyed URL storage.

use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Storage contract for alias → target mappings.
///
/// The store is the authority on alias uniqueness: two concurrent saves of the
/// same alias must produce exactly one success and one
/// [`StoreError::AliasAlreadyExists`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Atomically stores a new mapping and returns its id.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AliasAlreadyExists`] if the alias is taken
    /// - [`StoreError::InvalidInput`] if the alias or target is empty
    /// - [`StoreError::Unavailable`] on storage failures
    async fn save(&self, alias: &str, target: &str) -> Result<i64, StoreError>;

    /// Looks up the target for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping exists and
    /// [`StoreError::Unavailable`] on storage failures.
    async fn resolve(&self, alias: &str) -> Result<String, StoreError>;

    /// Removes the mapping for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping exists (including one that
    /// was already deleted) and [`StoreError::Unavailable`] on storage failures.
    async fn delete(&self, alias: &str) -> Result<(), StoreError>;
}
