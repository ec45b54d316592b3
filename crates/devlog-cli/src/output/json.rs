use std::path::Path;

use devlog_core::{AppendOutcome, EntryType, LedgerSummary, ParsedEntry};

/// JSON report for an append or a dry run.
pub fn append_json(outcome: &AppendOutcome, path: &Path, dry_run: bool) -> serde_json::Value {
    let entry = &outcome.entry;
    serde_json::json!({
        "status": "ok",
        "dry_run": dry_run,
        "document": path.display().to_string(),
        "entry_number": entry.padded_number(),
        "timestamp": entry.formatted_timestamp(),
        "entry": entry,
        "summary_updated": outcome.summary_updated(),
        "warnings": outcome
            .warnings
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>(),
    })
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[&ParsedEntry]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entries)?)
}

/// Summary counters keyed by label, with missing rows as `null`.
pub fn summary_json(summary: &LedgerSummary) -> serde_json::Value {
    let mut counts = serde_json::Map::new();
    for entry_type in EntryType::ALL {
        let value = summary
            .counts
            .get(&entry_type)
            .map(|count| serde_json::Value::from(*count))
            .unwrap_or(serde_json::Value::Null);
        counts.insert(entry_type.as_str().to_string(), value);
    }
    serde_json::json!({
        "total_entries": summary.total_entries,
        "counts": counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_marks_missing_rows_null() {
        let mut summary = LedgerSummary {
            total_entries: Some(4),
            ..LedgerSummary::default()
        };
        summary.counts.insert(EntryType::Feature, 3);
        let value = summary_json(&summary);
        assert_eq!(value["total_entries"], 4);
        assert_eq!(value["counts"]["FEATURE"], 3);
        assert!(value["counts"]["REFACTOR"].is_null());
    }

    #[test]
    fn test_entries_json_uses_type_key() {
        let entry = ParsedEntry {
            number: 2,
            timestamp: "2025-07-19 10:00 UTC".to_string(),
            entry_type: Some("BUG_FIX".to_string()),
            ..ParsedEntry::default()
        };
        let value = entries_json(&[&entry]).unwrap();
        assert_eq!(value[0]["number"], 2);
        assert_eq!(value[0]["type"], "BUG_FIX");
    }
}
