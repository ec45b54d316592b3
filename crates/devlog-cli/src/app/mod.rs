//! Application-level utilities for the devlog CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and devlog files

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
