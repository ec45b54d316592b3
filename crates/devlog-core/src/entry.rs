//! Entry model: activity types, impact levels, and candidate validation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DevlogError, Result};

/// Developer recorded when none is supplied.
pub const DEFAULT_DEVELOPER: &str = "AI Assistant";

/// Impact elaboration recorded when none is supplied.
pub const DEFAULT_IMPACT_DESCRIPTION: &str = "Development activity";

/// Timestamp layout used in entry headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Kind of development activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Feature,
    BugFix,
    UiChange,
    Performance,
    Documentation,
    Refactor,
}

impl EntryType {
    pub const ALL: [EntryType; 6] = [
        EntryType::Feature,
        EntryType::BugFix,
        EntryType::UiChange,
        EntryType::Performance,
        EntryType::Documentation,
        EntryType::Refactor,
    ];

    /// Canonical uppercase name as written in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Feature => "FEATURE",
            EntryType::BugFix => "BUG_FIX",
            EntryType::UiChange => "UI_CHANGE",
            EntryType::Performance => "PERFORMANCE",
            EntryType::Documentation => "DOCUMENTATION",
            EntryType::Refactor => "REFACTOR",
        }
    }

    /// Label of the summary table row that counts this type.
    pub fn summary_label(&self) -> &'static str {
        match self {
            EntryType::Feature => "Features Added",
            EntryType::BugFix => "Bug Fixes",
            EntryType::UiChange => "UI Changes",
            EntryType::Performance => "Performance Optimizations",
            EntryType::Documentation => "Documentation Updates",
            EntryType::Refactor => "Refactors",
        }
    }

    /// Reverse lookup from a summary row label.
    pub fn from_summary_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|entry_type| entry_type.summary_label() == label)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = DevlogError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|entry_type| entry_type.as_str() == value)
            .ok_or_else(|| {
                DevlogError::validation(
                    "type",
                    format!(
                        "\"{}\" is not one of {}",
                        value,
                        join_names(Self::ALL.iter().map(|t| t.as_str()))
                    ),
                )
            })
    }
}

/// Impact level of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Impact {
    Critical,
    High,
    Medium,
    Low,
}

impl Impact {
    pub const ALL: [Impact; 4] = [Impact::Critical, Impact::High, Impact::Medium, Impact::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Critical => "CRITICAL",
            Impact::High => "HIGH",
            Impact::Medium => "MEDIUM",
            Impact::Low => "LOW",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Impact {
    type Err = DevlogError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|impact| impact.as_str() == value)
            .ok_or_else(|| {
                DevlogError::validation(
                    "impact",
                    format!(
                        "\"{}\" is not one of {}",
                        value,
                        join_names(Self::ALL.iter().map(|i| i.as_str()))
                    ),
                )
            })
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Builder for a candidate entry, before number and timestamp are assigned.
///
/// Enumerated fields are kept as raw text; [`NewEntry::validate`] checks
/// membership so the offending field can be named in the error.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub entry_type: String,
    pub component: String,
    pub description: String,
    pub impact: String,
    pub impact_description: Option<String>,
    pub files: String,
    pub developer: Option<String>,
    pub duration: String,
    pub additional_context: Option<String>,
}

impl NewEntry {
    pub fn new(
        entry_type: impl Into<String>,
        component: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
        files: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            entry_type: entry_type.into(),
            component: component.into(),
            description: description.into(),
            impact: impact.into(),
            files: files.into(),
            duration: duration.into(),
            ..Self::default()
        }
    }

    pub fn with_impact_description(mut self, value: impl Into<String>) -> Self {
        self.impact_description = Some(value.into());
        self
    }

    pub fn with_developer(mut self, value: impl Into<String>) -> Self {
        self.developer = Some(value.into());
        self
    }

    pub fn with_additional_context(mut self, value: impl Into<String>) -> Self {
        self.additional_context = Some(value.into());
        self
    }

    /// Check every field and resolve defaults.
    ///
    /// Returns the validated fields; number and timestamp are assigned by the
    /// writer.
    pub fn validate(&self) -> Result<ValidatedEntry> {
        let entry_type: EntryType = self.entry_type.trim().parse()?;
        let impact: Impact = self.impact.trim().parse()?;

        let component = required_line("component", &self.component)?;
        let description = required_line("description", &self.description)?;
        let files = required_line("files", &self.files)?;
        let duration = required_line("duration", &self.duration)?;

        let impact_description = match optional_line("impact_description", &self.impact_description)? {
            Some(value) => value,
            None => DEFAULT_IMPACT_DESCRIPTION.to_string(),
        };
        let developer = match optional_line("developer", &self.developer)? {
            Some(value) => value,
            None => DEFAULT_DEVELOPER.to_string(),
        };

        let additional_context = match self.additional_context.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                if value.lines().any(|line| line.trim().is_empty()) {
                    return Err(DevlogError::validation(
                        "additional_context",
                        "must not contain blank lines",
                    ));
                }
                if value.lines().any(|line| line.starts_with('#')) {
                    return Err(DevlogError::validation(
                        "additional_context",
                        "lines must not start with a Markdown heading marker",
                    ));
                }
                Some(value.lines().map(str::trim_end).collect::<Vec<_>>().join("\n"))
            }
        };

        Ok(ValidatedEntry {
            entry_type,
            component,
            description,
            impact,
            impact_description,
            files,
            developer,
            duration,
            additional_context,
        })
    }
}

fn required_line(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DevlogError::validation(field, "must not be empty"));
    }
    single_line(field, trimmed)
}

fn optional_line(field: &'static str, value: &Option<String>) -> Result<Option<String>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => single_line(field, trimmed).map(Some),
    }
}

fn single_line(field: &'static str, value: &str) -> Result<String> {
    if value.contains(|c| c == '\n' || c == '\r') {
        return Err(DevlogError::validation(field, "must be a single line"));
    }
    Ok(value.to_string())
}

/// Candidate fields after validation and default resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub entry_type: EntryType,
    pub component: String,
    pub description: String,
    pub impact: Impact,
    pub impact_description: String,
    pub files: String,
    pub developer: String,
    pub duration: String,
    pub additional_context: Option<String>,
}

impl ValidatedEntry {
    /// Attach the identity assigned by the writer.
    pub fn into_entry(self, number: u32, timestamp: DateTime<Utc>) -> LedgerEntry {
        LedgerEntry {
            number,
            timestamp,
            entry_type: self.entry_type,
            component: self.component,
            description: self.description,
            impact: self.impact,
            impact_description: self.impact_description,
            files: self.files,
            developer: self.developer,
            duration: self.duration,
            additional_context: self.additional_context,
        }
    }
}

/// One logged activity with its assigned number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub number: u32,
    pub timestamp: DateTime<Utc>,
    pub entry_type: EntryType,
    pub component: String,
    pub description: String,
    pub impact: Impact,
    pub impact_description: String,
    pub files: String,
    pub developer: String,
    pub duration: String,
    pub additional_context: Option<String>,
}

impl LedgerEntry {
    /// Entry number padded to three digits, e.g. `007`.
    pub fn padded_number(&self) -> String {
        format!("{:03}", self.number)
    }

    /// Timestamp in header layout.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> NewEntry {
        NewEntry::new(
            "FEATURE",
            "Dashboard UI",
            "Added theme toggle",
            "HIGH",
            "apps/web/src/components/ui/",
            "30 minutes",
        )
    }

    #[test]
    fn test_entry_type_parse_and_display() {
        for entry_type in EntryType::ALL {
            let parsed: EntryType = entry_type.as_str().parse().unwrap();
            assert_eq!(parsed, entry_type);
            assert_eq!(parsed.to_string(), entry_type.as_str());
        }
    }

    #[test]
    fn test_entry_type_rejects_unknown() {
        let err = "feature".parse::<EntryType>().unwrap_err();
        match err {
            DevlogError::Validation { field, message } => {
                assert_eq!(field, "type");
                assert!(message.contains("FEATURE"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_summary_label_lookup() {
        assert_eq!(
            EntryType::from_summary_label("Bug Fixes"),
            Some(EntryType::BugFix)
        );
        assert_eq!(EntryType::from_summary_label("Total Entries"), None);
    }

    #[test]
    fn test_validate_applies_defaults() {
        let validated = candidate().validate().unwrap();
        assert_eq!(validated.entry_type, EntryType::Feature);
        assert_eq!(validated.impact, Impact::High);
        assert_eq!(validated.developer, DEFAULT_DEVELOPER);
        assert_eq!(validated.impact_description, DEFAULT_IMPACT_DESCRIPTION);
        assert_eq!(validated.additional_context, None);
    }

    #[test]
    fn test_validate_blank_developer_uses_default() {
        let validated = candidate().with_developer("   ").validate().unwrap();
        assert_eq!(validated.developer, DEFAULT_DEVELOPER);
    }

    #[test]
    fn test_validate_rejects_empty_required_field() {
        let mut entry = candidate();
        entry.duration = "  ".to_string();
        let err = entry.validate().unwrap_err();
        assert!(matches!(
            err,
            DevlogError::Validation {
                field: "duration",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_impact() {
        let mut entry = candidate();
        entry.impact = "SEVERE".to_string();
        let err = entry.validate().unwrap_err();
        assert!(matches!(err, DevlogError::Validation { field: "impact", .. }));
    }

    #[test]
    fn test_validate_rejects_multiline_field() {
        let mut entry = candidate();
        entry.description = "first\nsecond".to_string();
        let err = entry.validate().unwrap_err();
        assert!(matches!(
            err,
            DevlogError::Validation {
                field: "description",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_context_rejects_blank_lines() {
        let err = candidate()
            .with_additional_context("line one\n\nline three")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            DevlogError::Validation {
                field: "additional_context",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_context_keeps_multiple_lines() {
        let validated = candidate()
            .with_additional_context("**Testing**: manual  \n**Notes**: none")
            .validate()
            .unwrap();
        assert_eq!(
            validated.additional_context.as_deref(),
            Some("**Testing**: manual\n**Notes**: none")
        );
    }

    #[test]
    fn test_padded_number() {
        let entry = candidate().validate().unwrap().into_entry(7, Utc::now());
        assert_eq!(entry.padded_number(), "007");
        let entry = candidate().validate().unwrap().into_entry(1234, Utc::now());
        assert_eq!(entry.padded_number(), "1234");
    }
}
