//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod privilege;
pub mod redirect;
pub mod remove;
pub mod save;

pub use redirect::{redirect_empty_handler, redirect_handler};
pub use remove::{delete_empty_alias_handler, delete_url_handler};
pub use save::save_handler;
