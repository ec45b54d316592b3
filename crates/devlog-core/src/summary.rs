//! Summary counters and consistency checks against the entry set.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::document::{Document, TOTAL_ENTRIES_LABEL};
use crate::entry::EntryType;
use crate::error::Result;
use crate::parser::{self, ParsedEntry};

/// Aggregate counters embedded in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Value of the `Total Entries` row, if the row exists
    pub total_entries: Option<u64>,
    /// Counters for types that have a visible row
    pub counts: BTreeMap<EntryType, u64>,
}

impl LedgerSummary {
    /// Counter for `entry_type`; a type without a row counts as zero.
    pub fn count(&self, entry_type: EntryType) -> u64 {
        self.counts.get(&entry_type).copied().unwrap_or(0)
    }

    /// Whether the summary has a row for `entry_type`.
    pub fn tracks(&self, entry_type: EntryType) -> bool {
        self.counts.contains_key(&entry_type)
    }
}

/// One inconsistency found by [`verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    MissingAnchor,
    MissingTotalRow,
    TotalMismatch { recorded: u64, actual: u64 },
    TypeMismatch { entry_type: EntryType, recorded: u64, actual: u64 },
    DuplicateNumber { number: u32, line: usize },
    OutOfOrder { number: u32, line: usize },
    BadTimestamp { number: u32, timestamp: String },
    UnknownType { number: u32, value: Option<String> },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::MissingAnchor => write!(f, "entries section heading not found"),
            Discrepancy::MissingTotalRow => write!(f, "\"{}\" row not found", TOTAL_ENTRIES_LABEL),
            Discrepancy::TotalMismatch { recorded, actual } => write!(
                f,
                "\"{}\" is {} but {} entries are present",
                TOTAL_ENTRIES_LABEL, recorded, actual
            ),
            Discrepancy::TypeMismatch {
                entry_type,
                recorded,
                actual,
            } => write!(
                f,
                "\"{}\" is {} but {} {} entries are present",
                entry_type.summary_label(),
                recorded,
                actual,
                entry_type
            ),
            Discrepancy::DuplicateNumber { number, line } => {
                write!(f, "entry #{:03} on line {} reuses an existing number", number, line)
            }
            Discrepancy::OutOfOrder { number, line } => write!(
                f,
                "entry #{:03} on line {} is not below the entry above it",
                number, line
            ),
            Discrepancy::BadTimestamp { number, timestamp } => {
                write!(f, "entry #{:03} has malformed timestamp \"{}\"", number, timestamp)
            }
            Discrepancy::UnknownType { number, value } => match value {
                Some(value) => write!(f, "entry #{:03} has unknown type \"{}\"", number, value),
                None => write!(f, "entry #{:03} has no type", number),
            },
        }
    }
}

/// Recompute the summary from the entries and report every inconsistency.
///
/// An empty result means the summary is exactly the tally of the entries,
/// numbers are unique, and entries are in descending order.
pub fn verify(text: &str) -> Result<Vec<Discrepancy>> {
    let doc = Document::parse(text)?;
    let entries: Vec<ParsedEntry> = doc.blocks().iter().map(ParsedEntry::from_block).collect();
    let summary = parser::summary_of(&doc);
    let mut issues = Vec::new();

    if !doc.has_anchor() {
        issues.push(Discrepancy::MissingAnchor);
    }

    let actual_total = entries.len() as u64;
    match summary.total_entries {
        None => issues.push(Discrepancy::MissingTotalRow),
        Some(recorded) if recorded != actual_total => issues.push(Discrepancy::TotalMismatch {
            recorded,
            actual: actual_total,
        }),
        Some(_) => {}
    }

    let actual = parser::tally(&entries);
    for (&entry_type, &recorded) in &summary.counts {
        let actual = actual.get(&entry_type).copied().unwrap_or(0);
        if recorded != actual {
            issues.push(Discrepancy::TypeMismatch {
                entry_type,
                recorded,
                actual,
            });
        }
    }

    let mut seen = HashSet::new();
    let mut previous: Option<u32> = None;
    for entry in &entries {
        if !seen.insert(entry.number) {
            issues.push(Discrepancy::DuplicateNumber {
                number: entry.number,
                line: entry.line,
            });
        } else if previous.is_some_and(|above| entry.number > above) {
            issues.push(Discrepancy::OutOfOrder {
                number: entry.number,
                line: entry.line,
            });
        }
        previous = Some(entry.number);

        if entry.timestamp_utc().is_none() {
            issues.push(Discrepancy::BadTimestamp {
                number: entry.number,
                timestamp: entry.timestamp.clone(),
            });
        }
        if entry.kind().is_none() {
            issues.push(Discrepancy::UnknownType {
                number: entry.number,
                value: entry.entry_type.clone(),
            });
        }
    }

    Ok(issues)
}
