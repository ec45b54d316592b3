//! Appending entries to a devlog document.
//!
//! [`append`] is a pure function from the old text and a candidate entry to
//! the new text. The entry block and the counter updates are applied to one
//! buffer, so callers only ever see the original text or the complete update.

use std::fmt;
use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::{Document, SummaryRow, TOTAL_ENTRIES_LABEL};
use crate::entry::{EntryType, LedgerEntry, NewEntry};
use crate::error::{DevlogError, Result};
use crate::parser;

/// Non-fatal conditions raised while updating the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppendWarning {
    /// The document has no `Total Entries` row
    TotalRowMissing,
    /// The document has no row counting this type
    TypeRowMissing { entry_type: EntryType },
}

impl fmt::Display for AppendWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppendWarning::TotalRowMissing => write!(
                f,
                "summary row \"{}\" not found; total not updated",
                TOTAL_ENTRIES_LABEL
            ),
            AppendWarning::TypeRowMissing { entry_type } => write!(
                f,
                "summary row \"{}\" not found; {} count not updated",
                entry_type.summary_label(),
                entry_type
            ),
        }
    }
}

/// Result of a successful append.
#[derive(Debug, Clone)]
pub struct AppendOutcome {
    /// Full updated document text
    pub document: String,
    /// The entry as written, with its assigned number and timestamp
    pub entry: LedgerEntry,
    /// Summary rows that could not be updated
    pub warnings: Vec<AppendWarning>,
}

impl AppendOutcome {
    /// Whether every summary counter was updated.
    pub fn summary_updated(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Render the canonical block for `entry`, including its trailing blank line.
pub fn render_entry(entry: &LedgerEntry) -> String {
    let mut block = format!(
        "### Entry #{} - {}\n",
        entry.padded_number(),
        entry.formatted_timestamp()
    );
    let fields = [
        ("Type", entry.entry_type.as_str().to_string()),
        ("Component", entry.component.clone()),
        ("Description", entry.description.clone()),
        (
            "Impact",
            format!("{} - {}", entry.impact, entry.impact_description),
        ),
        ("Files Changed", entry.files.clone()),
        ("Developer", entry.developer.clone()),
        ("Duration", entry.duration.clone()),
    ];
    for (label, value) in fields {
        block.push_str(&format!("**{}**: {}  \n", label, value));
    }
    if let Some(context) = &entry.additional_context {
        block.push_str(context);
        block.push('\n');
    }
    block.push('\n');
    block
}

/// Append `candidate` to `text`.
///
/// The candidate is validated before the document is inspected. The entry
/// gets the next free number and `now` as its timestamp, is inserted directly
/// below the entries heading, and the `Total Entries` row and the row for its
/// type are incremented. Missing rows are reported as warnings and never
/// created.
///
/// # Errors
///
/// - [`DevlogError::Validation`](crate::DevlogError::Validation) for a bad candidate
/// - [`DevlogError::Parse`](crate::DevlogError::Parse) for a malformed header or count
/// - [`DevlogError::Structure`](crate::DevlogError::Structure) when the anchor is missing
pub fn append(text: &str, candidate: &NewEntry, now: DateTime<Utc>) -> Result<AppendOutcome> {
    let validated = candidate.validate()?;

    let doc = Document::parse(text)?;
    let insertion = doc.insertion_offset()?;

    let number = parser::next_number(&doc)?;
    let entry = validated.into_entry(number, now);
    tracing::debug!(number, entry_type = %entry.entry_type, "assigned entry number");

    let block = with_line_ending(render_entry(&entry), doc.line_ending());
    let mut edits: Vec<(Range<usize>, String)> = vec![(insertion..insertion, block)];
    let mut warnings = Vec::new();

    match doc.row(TOTAL_ENTRIES_LABEL) {
        Some(row) => edits.push(increment(row)?),
        None => warnings.push(AppendWarning::TotalRowMissing),
    }
    match doc.row(entry.entry_type.summary_label()) {
        Some(row) => edits.push(increment(row)?),
        None => warnings.push(AppendWarning::TypeRowMissing {
            entry_type: entry.entry_type,
        }),
    }

    for warning in &warnings {
        tracing::debug!(number, "{}", warning);
    }

    Ok(AppendOutcome {
        document: apply_edits(text, edits),
        entry,
        warnings,
    })
}

/// Edit replacing the counter of `row` with its successor.
fn increment(row: &SummaryRow) -> Result<(Range<usize>, String)> {
    let next = row.count.checked_add(1).ok_or_else(|| {
        DevlogError::parse(
            row.line,
            format!("count {} for \"{}\" is out of range", row.count, row.label),
        )
    })?;
    Ok((row.count_span.clone(), next.to_string()))
}

/// Re-terminate every line of a rendered block with `line_ending`.
fn with_line_ending(block: String, line_ending: &str) -> String {
    if line_ending == "\n" {
        return block;
    }
    block
        .lines()
        .map(|line| format!("{}{}", line, line_ending))
        .collect()
}

/// Apply non-overlapping edits, last first, so earlier offsets stay valid.
fn apply_edits(text: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    edits.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    let mut out = text.to_string();
    for (range, replacement) in edits {
        out.replace_range(range, &replacement);
    }
    out
}
