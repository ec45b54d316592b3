use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use devlog_core::{
    AppendWarning, DevlogError, EntryType, FileLedger, LedgerStore, NewEntry,
};

const TEMPLATE: &str = "# TraceLens Development Log\n\nSystematic record of changes.\n\n## Development Entries\n\n## Ledger Summary\n\n| Metric | Count |\n|--------|-------|\n| **Total Entries** | 0 |\n| **Features Added** | 0 |\n| **Bug Fixes** | 0 |\n| **UI Changes** | 0 |\n\n## Notes\n\nKeep this file in version control.\n";

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str, contents: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.md", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        fs::write(&path, contents).expect("write should succeed");
        Self { path }
    }

    fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("read should succeed")
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        let _ = fs::remove_file(devlog_core::storage::lock::lock_path_for(&self.path));
    }
}

fn candidate(entry_type: &str, component: &str) -> NewEntry {
    NewEntry::new(
        entry_type,
        component,
        "Logged from integration test",
        "HIGH",
        "crates/devlog-core/",
        "10 minutes",
    )
}

fn header_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| line.starts_with("### Entry #"))
        .collect()
}

#[test]
fn test_first_entry_in_empty_ledger() {
    let temp = TempFile::new("devlog_first_entry", TEMPLATE);
    let ledger = FileLedger::open(&temp.path).expect("open should succeed");

    let outcome = ledger
        .append(&candidate("FEATURE", "Dashboard UI"), Utc::now())
        .expect("append should succeed");

    assert_eq!(outcome.entry.number, 1);
    assert!(outcome.warnings.is_empty());

    let summary = ledger.read_summary().expect("summary should parse");
    assert_eq!(summary.total_entries, Some(1));
    assert_eq!(summary.count(EntryType::Feature), 1);
    assert!(header_lines(&temp.contents())[0].starts_with("### Entry #001 - "));
}

#[test]
fn test_append_above_existing_entries() {
    let temp = TempFile::new("devlog_third_entry", TEMPLATE);
    let ledger = FileLedger::open(&temp.path).expect("open should succeed");
    ledger
        .append(&candidate("FEATURE", "API"), Utc::now())
        .expect("first append should succeed");
    ledger
        .append(&candidate("UI_CHANGE", "Theme"), Utc::now())
        .expect("second append should succeed");

    let before = ledger.read_summary().expect("summary should parse");
    let outcome = ledger
        .append(&candidate("BUG_FIX", "Parser"), Utc::now())
        .expect("third append should succeed");
    let after = ledger.read_summary().expect("summary should parse");

    assert_eq!(outcome.entry.number, 3);
    assert_eq!(after.total_entries, before.total_entries.map(|n| n + 1));

    let contents = temp.contents();
    let headers = header_lines(&contents);
    assert_eq!(headers.len(), 3);
    assert!(headers[0].starts_with("### Entry #003"));
    assert!(headers[1].starts_with("### Entry #002"));
    assert!(contents.ends_with("## Notes\n\nKeep this file in version control.\n"));
    assert!(ledger.verify().expect("verify should run").is_empty());
}

#[test]
fn test_missing_type_row_is_partial_update() {
    let temp = TempFile::new("devlog_missing_row", TEMPLATE);
    let ledger = FileLedger::open(&temp.path).expect("open should succeed");

    let outcome = ledger
        .append(&candidate("REFACTOR", "Storage"), Utc::now())
        .expect("append should succeed despite missing row");

    assert_eq!(
        outcome.warnings,
        vec![AppendWarning::TypeRowMissing {
            entry_type: EntryType::Refactor
        }]
    );
    let summary = ledger.read_summary().expect("summary should parse");
    assert_eq!(summary.total_entries, Some(1));
    assert!(!summary.tracks(EntryType::Refactor));
}

#[test]
fn test_missing_anchor_leaves_file_unchanged() {
    let text = "# Broken log\n\n| **Total Entries** | 4 |\n";
    let temp = TempFile::new("devlog_no_anchor", text);
    let ledger = FileLedger::open(&temp.path).expect("open should succeed");

    let err = ledger
        .append(&candidate("FEATURE", "API"), Utc::now())
        .expect_err("append should fail");

    assert!(matches!(err, DevlogError::Structure(_)));
    assert_eq!(temp.contents(), text);
}

#[test]
fn test_get_entry_by_number() {
    let temp = TempFile::new("devlog_get_entry", TEMPLATE);
    let ledger = FileLedger::open(&temp.path).expect("open should succeed");
    ledger
        .append(&candidate("FEATURE", "API"), Utc::now())
        .expect("append should succeed");
    ledger
        .append(
            &candidate("DOCUMENTATION", "README").with_developer("Jake"),
            Utc::now(),
        )
        .expect("append should succeed");

    let entry = ledger
        .get_entry(2)
        .expect("read should succeed")
        .expect("entry 2 should exist");
    assert_eq!(entry.kind(), Some(EntryType::Documentation));
    assert_eq!(entry.developer.as_deref(), Some("Jake"));
    assert!(ledger.get_entry(9).expect("read should succeed").is_none());
}

#[cfg(unix)]
#[test]
fn test_concurrent_appends_get_unique_numbers() {
    let temp = TempFile::new("devlog_concurrent", TEMPLATE);
    let path = Arc::new(temp.path.clone());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let path = Arc::clone(&path);
            std::thread::spawn(move || {
                let ledger = FileLedger::open(path.as_path()).expect("open should succeed");
                ledger
                    .append(&candidate("FEATURE", &format!("worker {}", i)), Utc::now())
                    .expect("append should succeed")
                    .entry
                    .number
            })
        })
        .collect();

    let mut numbers: Vec<u32> = handles
        .into_iter()
        .map(|h| h.join().expect("thread should finish"))
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=8).collect::<Vec<u32>>());

    let ledger = FileLedger::open(temp.path.as_path()).expect("open should succeed");
    let summary = ledger.read_summary().expect("summary should parse");
    assert_eq!(summary.total_entries, Some(8));
    assert_eq!(summary.count(EntryType::Feature), 8);
    assert!(ledger.verify().expect("verify should run").is_empty());
}
