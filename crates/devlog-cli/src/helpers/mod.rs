//! Helper functions for the devlog CLI.
//!
//! This module provides:
//! - Collecting entry fields from flags and interactive prompts

mod input;

pub use input::{collect_entry, FieldPrompter, TerminalPrompter};
