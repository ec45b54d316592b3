//! Line grammar of a devlog document.
//!
//! A document is scanned once into three kinds of landmarks, each carrying
//! byte offsets into the original text so that the writer can splice without
//! touching anything else:
//!
//! - the **insertion anchor**: the first `## Development Entries` heading that
//!   is immediately followed by a blank line
//! - **entry blocks**: a `### Entry #NNN - TIMESTAMP` header line plus the
//!   lines up to the next blank line or heading
//! - **summary rows**: Markdown table rows `| **Label** | N |` outside entry
//!   blocks whose label is `Total Entries` or a type label
//!
//! Lines may end in `\n` or `\r\n`; offsets always refer to the raw text.

use std::ops::Range;

use crate::entry::EntryType;
use crate::error::{DevlogError, Result};

/// Heading that opens the entries section.
pub const ENTRIES_HEADING: &str = "## Development Entries";

/// Prefix of every entry header line.
pub const ENTRY_HEADER_PREFIX: &str = "### Entry #";

/// Label of the summary row holding the overall count.
pub const TOTAL_ENTRIES_LABEL: &str = "Total Entries";

/// A single line of the document.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// 1-based line number
    number: usize,
    /// Byte offset of the first character
    start: usize,
    /// Byte offset just past the line terminator
    next: usize,
    /// Line content without `\n` / `\r\n`
    content: &'a str,
}

impl Line<'_> {
    fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn is_heading(&self) -> bool {
        self.content.starts_with('#')
    }
}

fn lines(text: &str) -> Vec<Line<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (index, raw) in text.split_inclusive('\n').enumerate() {
        let content = raw
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(raw);
        out.push(Line {
            number: index + 1,
            start,
            next: start + raw.len(),
            content,
        });
        start += raw.len();
    }
    out
}

/// Header line of an entry block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader<'a> {
    pub number: u32,
    /// Raw timestamp text after the ` - ` separator (may be empty)
    pub timestamp: &'a str,
    /// 1-based line number of the header
    pub line: usize,
    /// Byte offset of the header line
    pub offset: usize,
}

/// An entry header and the lines that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBlock<'a> {
    pub header: EntryHeader<'a>,
    pub lines: Vec<&'a str>,
}

/// A recognised summary table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub count: u64,
    /// 1-based line number of the row
    pub line: usize,
    /// Byte range of the count digits
    pub count_span: Range<usize>,
}

impl SummaryRow {
    /// Entry type counted by this row, `None` for the total row.
    pub fn entry_type(&self) -> Option<EntryType> {
        EntryType::from_summary_label(&self.label)
    }
}

/// Parsed landmarks of a document.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    anchor: Option<usize>,
    line_ending: &'static str,
    heading_without_blank: Option<usize>,
    blocks: Vec<EntryBlock<'a>>,
    rows: Vec<SummaryRow>,
}

impl<'a> Document<'a> {
    /// Scan `text` into its landmarks.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Parse`] when an entry header carries a
    /// non-numeric id or a summary row carries a non-numeric count.
    /// A missing anchor is not an error here; see [`Document::insertion_offset`].
    pub fn parse(text: &'a str) -> Result<Self> {
        let lines = lines(text);
        let mut anchor = None;
        let mut line_ending = "\n";
        let mut heading_without_blank = None;
        let mut blocks: Vec<EntryBlock<'a>> = Vec::new();
        let mut rows = Vec::new();
        let mut in_block = false;

        for (index, line) in lines.iter().enumerate() {
            if line.content.starts_with(ENTRY_HEADER_PREFIX) {
                blocks.push(EntryBlock {
                    header: parse_entry_header(line)?,
                    lines: Vec::new(),
                });
                in_block = true;
                continue;
            }

            if in_block {
                if line.is_blank() || line.is_heading() {
                    in_block = false;
                } else if let Some(block) = blocks.last_mut() {
                    block.lines.push(line.content);
                    continue;
                }
            }

            if line.content == ENTRIES_HEADING && anchor.is_none() {
                match lines.get(index + 1) {
                    Some(following) if following.is_blank() => {
                        anchor = Some(following.next);
                        if text[line.start..line.next].ends_with("\r\n") {
                            line_ending = "\r\n";
                        }
                    }
                    _ => {
                        heading_without_blank.get_or_insert(line.number);
                    }
                }
                continue;
            }

            if let Some(row) = parse_summary_row(line)? {
                rows.push(row);
            }
        }

        Ok(Self {
            anchor,
            line_ending,
            heading_without_blank,
            blocks,
            rows,
        })
    }

    /// Terminator of the anchor heading line, `"\r\n"` or `"\n"`.
    ///
    /// New blocks are written with it so a CRLF document stays CRLF.
    pub fn line_ending(&self) -> &'static str {
        self.line_ending
    }

    /// Byte offset where a new entry block is spliced in.
    ///
    /// # Errors
    ///
    /// Returns [`DevlogError::Structure`] when the document has no anchor.
    pub fn insertion_offset(&self) -> Result<usize> {
        match (self.anchor, self.heading_without_blank) {
            (Some(offset), _) => Ok(offset),
            (None, Some(line)) => Err(DevlogError::Structure(format!(
                "\"{}\" on line {} must be followed by a blank line",
                ENTRIES_HEADING, line
            ))),
            (None, None) => Err(DevlogError::Structure(format!(
                "insertion anchor \"{}\" not found",
                ENTRIES_HEADING
            ))),
        }
    }

    /// Whether the document has an insertion anchor.
    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    /// Entry blocks in document order.
    pub fn blocks(&self) -> &[EntryBlock<'a>] {
        &self.blocks
    }

    /// Recognised summary rows in document order.
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// First summary row carrying `label`.
    pub fn row(&self, label: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    /// Header carrying the highest entry number, if any.
    pub fn highest_entry(&self) -> Option<&EntryHeader<'a>> {
        self.blocks
            .iter()
            .map(|block| &block.header)
            .max_by_key(|header| header.number)
    }
}

fn parse_entry_header<'a>(line: &Line<'a>) -> Result<EntryHeader<'a>> {
    let rest = &line.content[ENTRY_HEADER_PREFIX.len()..];
    let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let token = &rest[..token_end];

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DevlogError::parse(
            line.number,
            format!("entry id \"{}\" is not numeric", token),
        ));
    }
    let number: u32 = token.parse().map_err(|_| {
        DevlogError::parse(line.number, format!("entry id \"{}\" is out of range", token))
    })?;

    let timestamp = rest[token_end..]
        .trim_start()
        .strip_prefix('-')
        .map(str::trim)
        .unwrap_or("");

    Ok(EntryHeader {
        number,
        timestamp,
        line: line.number,
        offset: line.start,
    })
}

fn is_summary_label(label: &str) -> bool {
    label == TOTAL_ENTRIES_LABEL || EntryType::from_summary_label(label).is_some()
}

fn parse_summary_row(line: &Line<'_>) -> Result<Option<SummaryRow>> {
    let content = line.content;
    if !content.trim_start().starts_with('|') {
        return Ok(None);
    }

    let bars: Vec<usize> = content.match_indices('|').map(|(i, _)| i).collect();
    if bars.len() < 2 {
        return Ok(None);
    }

    let label_cell = content[bars[0] + 1..bars[1]].trim();
    let label = match label_cell
        .strip_prefix("**")
        .and_then(|s| s.strip_suffix("**"))
    {
        Some(label) if is_summary_label(label) => label,
        _ => return Ok(None),
    };

    let count_start = bars[1] + 1;
    let count_end = bars.get(2).copied().unwrap_or(content.len());
    let cell = &content[count_start..count_end];
    let digits = cell.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DevlogError::parse(
            line.number,
            format!("count \"{}\" for \"{}\" is not numeric", digits, label),
        ));
    }
    let count: u64 = digits.parse().map_err(|_| {
        DevlogError::parse(
            line.number,
            format!("count \"{}\" for \"{}\" is out of range", digits, label),
        )
    })?;

    let leading = cell.len() - cell.trim_start().len();
    let span_start = line.start + count_start + leading;

    Ok(Some(SummaryRow {
        label: label.to_string(),
        count,
        line: line.number,
        count_span: span_start..span_start + digits.len(),
    }))
}
