//! # Devlog Core
//!
//! Core library for devlog - an append-only Markdown ledger of development
//! activity with a self-maintaining summary table.
//!
//! This crate provides the ledger engine and file persistence independent of
//! the CLI interface.
//!
//! ## Architecture
//!
//! - **entry**: Entry types, impact levels, candidate validation
//! - **document**: Line grammar (anchor, entry blocks, summary rows)
//! - **parser**: Next entry number, summary counters, parsed entries
//! - **writer**: Rendering and splicing a new entry, counter updates
//! - **summary**: Recomputing counters and reporting drift
//! - **storage**: File-backed store with writer lock and atomic replace
//!
//! ## Concurrency
//!
//! The engine functions are pure text transformations and assume a single
//! writer. A document is shared mutable state: two processes that read it,
//! append, and write back without coordination can assign the same entry
//! number. [`storage::FileLedger`] serializes appends with an exclusive lock
//! held across the whole read-compute-write sequence; anything else writing
//! the file must do the same.

pub mod document;
pub mod entry;
pub mod error;
pub mod fs;
pub mod parser;
pub mod storage;
pub mod summary;
pub mod writer;

pub use entry::{EntryType, Impact, LedgerEntry, NewEntry};
pub use error::{DevlogError, Result};
pub use parser::{next_entry_number, read_entries, read_summary, ParsedEntry};
pub use storage::{FileLedger, LedgerStore};
pub use summary::{verify, Discrepancy, LedgerSummary};
pub use writer::{append, render_entry, AppendOutcome, AppendWarning};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
