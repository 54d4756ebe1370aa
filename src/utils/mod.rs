//! Utility helpers shared across layers.
//!
//! - [`alias_generator`] - Random alias generation and alias syntax checks
//! - [`url_validation`] - Target URL validation

pub mod alias_generator;
pub mod url_validation;
