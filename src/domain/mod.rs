//! Domain layer: entities, error taxonomy and the capability traits the
//! pipeline depends on.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage contract ([`repositories::UrlRepository`])
//! - [`authorization`] - Privilege check contract ([`authorization::PrivilegeChecker`])
//! - [`errors`] - Typed store and authorization failures
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod authorization;
pub mod entities;
pub mod errors;
pub mod repositories;
