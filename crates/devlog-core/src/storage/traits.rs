//! Ledger store trait definition.
//!
//! The `LedgerStore` trait is the seam between the pure ledger engine and
//! whatever holds the document. Reads derive everything from [`LedgerStore::read`];
//! appends must serialize the full read-compute-write sequence.

use chrono::{DateTime, Utc};

use crate::entry::NewEntry;
use crate::error::Result;
use crate::parser::{self, ParsedEntry};
use crate::summary::{self, Discrepancy, LedgerSummary};
use crate::writer::AppendOutcome;

/// Store holding one devlog document.
///
/// Implementations must ensure:
/// - The document is never created by the store; it must already exist
/// - An append is applied completely or not at all
/// - Concurrent appends through the store are serialized, so two entries
///   never receive the same number
pub trait LedgerStore {
    /// Read the full document text.
    ///
    /// # Errors
    ///
    /// Returns `DevlogError::NotFound` if the document is missing, or
    /// `DevlogError::Storage` if it cannot be read.
    fn read(&self) -> Result<String>;

    /// Append a candidate entry stamped with `now`.
    ///
    /// # Errors
    ///
    /// Propagates validation, parse and structure errors from the writer
    /// (the document is left untouched) and storage errors from persistence.
    fn append(&self, candidate: &NewEntry, now: DateTime<Utc>) -> Result<AppendOutcome>;

    /// Number the next appended entry would receive.
    fn next_entry_number(&self) -> Result<u32> {
        parser::next_entry_number(&self.read()?)
    }

    /// Current summary counters.
    fn read_summary(&self) -> Result<LedgerSummary> {
        parser::read_summary(&self.read()?)
    }

    /// All entries in document order.
    fn read_entries(&self) -> Result<Vec<ParsedEntry>> {
        parser::read_entries(&self.read()?)
    }

    /// Entry with the given number, if present.
    fn get_entry(&self, number: u32) -> Result<Option<ParsedEntry>> {
        Ok(self
            .read_entries()?
            .into_iter()
            .find(|entry| entry.number == number))
    }

    /// Summary consistency report.
    fn verify(&self) -> Result<Vec<Discrepancy>> {
        summary::verify(&self.read()?)
    }
}
