//! UI primitives for the devlog CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Tables, badges, hints, key-value lines
//! - **Format**: String utilities (truncate)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, blank_line, kv, print, print_error, simple_table, Column};
