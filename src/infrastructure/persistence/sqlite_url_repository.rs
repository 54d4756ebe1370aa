//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::errors::StoreError;
use crate::domain::repositories::UrlRepository;

/// SQLite repository for alias → target mappings.
///
/// Uniqueness is enforced by the `urls_alias_key` constraint, so a save is a
/// single `INSERT` and concurrent saves of one alias are arbitrated by the
/// database rather than by an in-process lock.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, alias: &str, target: &str) -> Result<i64, StoreError> {
        if alias.is_empty() || target.is_empty() {
            return Err(StoreError::InvalidInput(
                "alias and target must be non-empty".to_string(),
            ));
        }

        let result = sqlx::query("INSERT INTO urls (alias, target) VALUES (?, ?)")
            .bind(alias)
            .bind(target)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => {
                Err(StoreError::AliasAlreadyExists(alias.to_string()))
            }
            Err(e) => Err(map_sqlx_error(e)),
        }
    }

    async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        let target: Option<String> =
            sqlx::query_scalar("SELECT target FROM urls WHERE alias = ?")
                .bind(alias)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(map_sqlx_error)?;

        target.ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let done = sqlx::query("DELETE FROM urls WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound(alias.to_string()));
        }

        Ok(())
    }
}
