//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod expenses;
pub mod reports;

// Re-export all handlers for use in router
pub use expenses::*;
pub use reports::*;
