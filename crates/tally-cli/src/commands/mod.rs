//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `schedule` - Upcoming report run times
//! - `serve` - Web server command

pub mod schedule;
pub mod serve;

// Re-export command functions for main.rs
pub use schedule::*;
pub use serve::*;
