//! Core domain entities.
//!
//! The service has a single entity, [`UrlRecord`], mapping an alias to the
//! URL it redirects to.

pub mod url_record;

pub use url_record::UrlRecord;
