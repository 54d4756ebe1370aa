//! URL record entity representing a stored alias mapping.

/// A persisted alias → target mapping.
///
/// Records are immutable once stored: they are created by a save and destroyed
/// by a delete, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub target: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            target: target.into(),
        }
    }
}
