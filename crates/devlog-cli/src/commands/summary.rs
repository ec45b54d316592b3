use devlog_core::document::TOTAL_ENTRIES_LABEL;
use devlog_core::{EntryType, LedgerStore};

use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::output::summary_json;
use crate::ui::{print, simple_table, Column, OutputMode};

const MISSING: &str = "-";

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let summary = ledger.read_summary()?;

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    match ui_ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&summary_json(&summary))?);
        }
        OutputMode::Pretty => {
            let mut rows = vec![vec![
                TOTAL_ENTRIES_LABEL.to_string(),
                summary
                    .total_entries
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| MISSING.to_string()),
            ]];
            for entry_type in EntryType::ALL {
                rows.push(vec![
                    entry_type.summary_label().to_string(),
                    summary
                        .counts
                        .get(&entry_type)
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| MISSING.to_string()),
                ]);
            }
            let columns = [Column::new("Label"), Column::new("Count")];
            print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
        }
        OutputMode::Plain => {
            if let Some(total) = summary.total_entries {
                println!("total_entries={}", total);
            }
            for (entry_type, count) in &summary.counts {
                println!("{}={}", entry_type.as_str().to_lowercase(), count);
            }
        }
    }

    Ok(())
}
