//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries
//! in various formats (JSON documents, field lines).

mod json;
mod text;

pub use json::{append_json, entries_json, summary_json};
pub use text::{entry_fields, entry_row};
