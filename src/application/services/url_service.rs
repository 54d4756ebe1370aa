//! URL save, resolve and delete service.

use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::UrlRecord;
use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRepository;
use crate::utils::alias_generator::AliasGenerator;

/// Default number of generate-and-save attempts for saves without an alias.
pub const DEFAULT_GENERATION_ATTEMPTS: u32 = 5;

/// Service for storing and resolving alias mappings.
///
/// Owns collision handling for generated aliases: a generated candidate that
/// is already taken is replaced with a fresh one, while a caller-supplied alias
/// that is taken is reported back as [`StoreError::AliasAlreadyExists`].
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn AliasGenerator>,
    generation_attempts: u32,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `generation_attempts` bounds how many generated candidates are tried
    /// before giving up; values below 1 are treated as 1.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn AliasGenerator>,
        generation_attempts: u32,
    ) -> Self {
        Self {
            repository,
            generator,
            generation_attempts: generation_attempts.max(1),
        }
    }

    /// Stores `target` under `alias`, or under a generated alias if `alias` is `None`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AliasAlreadyExists`] if a caller-supplied alias is taken
    /// - [`StoreError::Unavailable`] on storage failures, or when every generated
    ///   candidate collided
    pub async fn save(&self, target: String, alias: Option<String>) -> Result<UrlRecord, StoreError> {
        match alias {
            Some(alias) => {
                let id = self.repository.save(&alias, &target).await?;
                Ok(UrlRecord::new(id, alias, target))
            }
            None => self.save_with_generated_alias(target).await,
        }
    }

    /// Returns the target stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias is unknown.
    pub async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        self.repository.resolve(alias).await
    }

    /// Deletes the mapping stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the alias is unknown.
    pub async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        self.repository.delete(alias).await
    }

    async fn save_with_generated_alias(&self, target: String) -> Result<UrlRecord, StoreError> {
        for attempt in 1..=self.generation_attempts {
            let alias = self.generator.generate();

            match self.repository.save(&alias, &target).await {
                Ok(id) => return Ok(UrlRecord::new(id, alias, target)),
                Err(StoreError::AliasAlreadyExists(_)) => {
                    debug!(attempt, alias, "generated alias already taken");
                }
                Err(e) => return Err(e),
            }
        }

        Err(StoreError::Unavailable(format!(
            "no free alias after {} generated candidates",
            self.generation_attempts
        )))
    }
}
