//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteUrlRepository`] - Alias → target storage and lookup

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;

use sqlx::migrate::Migrator;

/// Schema migrations embedded from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
