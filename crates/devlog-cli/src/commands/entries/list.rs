use devlog_core::{EntryType, LedgerStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{entries_json, entry_row};
use crate::ui::{print, simple_table, Column};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let filter = args
        .entry_type
        .as_deref()
        .map(|value| value.parse::<EntryType>())
        .transpose()?;

    let ledger = ctx.open_ledger()?;
    let entries = ledger.read_entries()?;

    // Document order is newest first.
    let mut selected: Vec<_> = entries
        .iter()
        .filter(|entry| match filter {
            Some(wanted) => entry.kind() == Some(wanted),
            None => true,
        })
        .collect();
    if let Some(limit) = args.limit {
        selected.truncate(limit);
    }

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(&selected)?)?);
        return Ok(());
    }

    if selected.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No entries found.");
        }
        return Ok(());
    }

    let columns = [
        Column::new("Entry"),
        Column::new("Timestamp"),
        Column::new("Type"),
        Column::new("Component"),
        Column::new("Description"),
    ];
    let rows: Vec<Vec<String>> = selected.iter().map(|entry| entry_row(entry)).collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));

    Ok(())
}
