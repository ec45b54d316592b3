//! File-backed ledger store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::lock::DocumentLock;
use super::traits::LedgerStore;
use crate::entry::NewEntry;
use crate::error::{DevlogError, Result};
use crate::fs::write_atomic;
use crate::writer::{self, AppendOutcome};

/// A devlog document on the local filesystem.
///
/// Appends hold [`DocumentLock`] across read, compute, and write, and replace
/// the file atomically, so concurrent `devlog add` processes are serialized.
/// Writers that bypass this type (editors, other tools) are not excluded.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    /// Open an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::NotFound`] if nothing exists at `path`; the
    /// store never creates the document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(DevlogError::NotFound(format!(
                "devlog document {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the writer lock without appending, e.g. to edit the file by hand.
    pub fn lock(&self) -> Result<DocumentLock> {
        DocumentLock::acquire(&self.path)
    }

    /// Render the entry `append` would write, without touching the file.
    pub fn preview(&self, candidate: &NewEntry, now: DateTime<Utc>) -> Result<AppendOutcome> {
        writer::append(&self.read()?, candidate, now)
    }
}

impl LedgerStore for FileLedger {
    fn read(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                DevlogError::NotFound(format!("devlog document {}", self.path.display()))
            }
            _ => DevlogError::Storage(format!("Failed to read {}: {}", self.path.display(), e)),
        })
    }

    fn append(&self, candidate: &NewEntry, now: DateTime<Utc>) -> Result<AppendOutcome> {
        // Reject bad input before waiting on other writers.
        candidate.validate()?;

        let _lock = self.lock()?;
        let original = self.read()?;
        let outcome = writer::append(&original, candidate, now)?;

        write_atomic(&self.path, &outcome.document).map_err(|e| {
            DevlogError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            number = outcome.entry.number,
            "appended entry"
        );
        Ok(outcome)
    }
}
