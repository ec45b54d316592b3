use devlog_core::ParsedEntry;

use crate::ui::format::{entry_ref, truncate};

const DESCRIPTION_WIDTH: usize = 48;

/// Labelled fields of an entry, in document order, skipping absent ones.
pub fn entry_fields(entry: &ParsedEntry) -> Vec<(&'static str, &str)> {
    [
        ("Type", entry.entry_type.as_deref()),
        ("Component", entry.component.as_deref()),
        ("Description", entry.description.as_deref()),
        ("Impact", entry.impact.as_deref()),
        ("Files Changed", entry.files.as_deref()),
        ("Developer", entry.developer.as_deref()),
        ("Duration", entry.duration.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

/// One table row for `list`: number, timestamp, type, component, description.
pub fn entry_row(entry: &ParsedEntry) -> Vec<String> {
    vec![
        entry_ref(entry.number),
        entry.timestamp.clone(),
        entry.entry_type.clone().unwrap_or_else(|| "-".to_string()),
        entry.component.clone().unwrap_or_else(|| "-".to_string()),
        truncate(
            entry.description.as_deref().unwrap_or("-"),
            DESCRIPTION_WIDTH,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_fields_skip_missing() {
        let entry = ParsedEntry {
            number: 1,
            entry_type: Some("FEATURE".to_string()),
            duration: Some("1 hour".to_string()),
            ..ParsedEntry::default()
        };
        assert_eq!(
            entry_fields(&entry),
            vec![("Type", "FEATURE"), ("Duration", "1 hour")]
        );
    }

    #[test]
    fn test_entry_row_placeholders() {
        let entry = ParsedEntry {
            number: 7,
            timestamp: "2025-07-19 10:00 UTC".to_string(),
            ..ParsedEntry::default()
        };
        assert_eq!(
            entry_row(&entry),
            vec!["#007", "2025-07-19 10:00 UTC", "-", "-", "-"]
        );
    }
}
