//! Random alias generation and validation of caller-supplied aliases.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Upper bound on caller-supplied alias length.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases shadowed by API routes.
const RESERVED_ALIASES: &[&str] = &["url"];

/// Source of candidate aliases for saves that omit one.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates fixed-length alphanumeric aliases (`[A-Za-z0-9]`, both cases).
///
/// Draws from the thread-local CSPRNG seeded from the OS, so every task in the
/// process shares the same entropy source without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ALIAS_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// Returns true if `alias` can be stored and later addressed as a single path
/// segment: 1 to [`MAX_ALIAS_LENGTH`] characters from `[A-Za-z0-9_-]`, and not
/// a route name.
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty()
        && alias.len() <= MAX_ALIAS_LENGTH
        && !RESERVED_ALIASES.contains(&alias)
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
