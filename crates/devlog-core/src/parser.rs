//! Read-only views over a devlog document.
//!
//! Every function here is a pure read of the text; none of them mutate or
//! allocate a new document.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::document::{Document, EntryBlock, TOTAL_ENTRIES_LABEL};
use crate::entry::{EntryType, Impact, TIMESTAMP_FORMAT};
use crate::error::{DevlogError, Result};
use crate::summary::LedgerSummary;

/// Number the next appended entry receives: highest number present plus one,
/// or `1` for a document without entries.
///
/// Headers may appear in any order.
///
/// # Errors
///
/// Returns [`DevlogError::Parse`] naming the header line when the highest
/// number has no successor.
pub fn next_entry_number(text: &str) -> Result<u32> {
    let doc = Document::parse(text)?;
    next_number(&doc)
}

pub(crate) fn next_number(doc: &Document<'_>) -> Result<u32> {
    match doc.highest_entry() {
        None => Ok(1),
        Some(header) => header.number.checked_add(1).ok_or_else(|| {
            DevlogError::parse(
                header.line,
                format!("entry #{} leaves no number for the next entry", header.number),
            )
        }),
    }
}

/// Current summary counters.
///
/// Types without a row are absent from [`LedgerSummary::counts`]; a missing
/// `Total Entries` row leaves [`LedgerSummary::total_entries`] unset.
pub fn read_summary(text: &str) -> Result<LedgerSummary> {
    let doc = Document::parse(text)?;
    Ok(summary_of(&doc))
}

pub(crate) fn summary_of(doc: &Document<'_>) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for row in doc.rows() {
        if row.label == TOTAL_ENTRIES_LABEL {
            summary.total_entries.get_or_insert(row.count);
        } else if let Some(entry_type) = row.entry_type() {
            summary.counts.entry(entry_type).or_insert(row.count);
        }
    }
    summary
}

/// All entry blocks in document order (newest first for a well-kept ledger).
pub fn read_entries(text: &str) -> Result<Vec<ParsedEntry>> {
    let doc = Document::parse(text)?;
    Ok(doc.blocks().iter().map(ParsedEntry::from_block).collect())
}

/// An entry as found in the document.
///
/// Field values are kept verbatim (trailing Markdown line breaks removed), so
/// an entry written by hand with an unknown type or a malformed timestamp can
/// still be listed and reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedEntry {
    pub number: u32,
    pub timestamp: String,
    pub line: usize,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub component: Option<String>,
    pub description: Option<String>,
    pub impact: Option<String>,
    pub files: Option<String>,
    pub developer: Option<String>,
    pub duration: Option<String>,
    pub additional_context: Option<String>,
}

impl ParsedEntry {
    pub(crate) fn from_block(block: &EntryBlock<'_>) -> Self {
        let mut entry = ParsedEntry {
            number: block.header.number,
            timestamp: block.header.timestamp.to_string(),
            line: block.header.line,
            ..Self::default()
        };
        let mut context = Vec::new();

        for raw in &block.lines {
            let line = raw.trim_end();
            let field = split_field(line).and_then(|(label, value)| {
                let slot = match label {
                    "Type" => &mut entry.entry_type,
                    "Component" => &mut entry.component,
                    "Description" => &mut entry.description,
                    "Impact" => &mut entry.impact,
                    "Files Changed" => &mut entry.files,
                    "Developer" => &mut entry.developer,
                    "Duration" => &mut entry.duration,
                    _ => return None,
                };
                // first occurrence wins; repeats fall through to context
                if slot.is_some() {
                    return None;
                }
                *slot = Some(value.to_string());
                Some(())
            });
            if field.is_none() {
                context.push(line);
            }
        }

        if !context.is_empty() {
            entry.additional_context = Some(context.join("\n"));
        }
        entry
    }

    /// Parsed type, if the `Type` field holds a known value.
    pub fn kind(&self) -> Option<EntryType> {
        self.entry_type.as_deref()?.parse().ok()
    }

    /// Impact level from the `Impact` field (`LEVEL - elaboration`).
    pub fn impact_level(&self) -> Option<Impact> {
        let raw = self.impact.as_deref()?;
        let level = raw.split(" - ").next().unwrap_or(raw).trim();
        level.parse().ok()
    }

    /// Header timestamp as a UTC instant.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

fn split_field(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("**")?;
    let (label, value) = rest.split_once("**:")?;
    Some((label, value.trim()))
}

/// Count of entries per type, used to recompute the summary.
pub fn tally(entries: &[ParsedEntry]) -> BTreeMap<EntryType, u64> {
    let mut counts = BTreeMap::new();
    for entry_type in entries.iter().filter_map(ParsedEntry::kind) {
        *counts.entry(entry_type).or_insert(0) += 1;
    }
    counts
}
