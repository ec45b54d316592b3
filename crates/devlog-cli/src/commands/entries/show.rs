use devlog_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::entry_fields;
use crate::ui::format::entry_ref;
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, kv, print, OutputMode};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;

    let entry = ledger.get_entry(args.number)?.ok_or_else(|| {
        CliError::not_found(
            format!("Entry {} not found", entry_ref(args.number)),
            "Hint: Run `devlog list` to see entry numbers.",
        )
    })?;

    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            let title = format!("Entry {} - {}", entry_ref(entry.number), entry.timestamp);
            print(&ui_ctx, &styled(&title, styles::bold(), ui_ctx.color));
            blank_line(&ui_ctx);
            for (label, value) in entry_fields(&entry) {
                print(&ui_ctx, &kv(&ui_ctx, label, value));
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("entry_number={:03}", entry.number);
            println!("timestamp={}", entry.timestamp);
            for (label, value) in entry_fields(&entry) {
                println!("{}", kv(&ui_ctx, label, value));
            }
        }
    }

    if let Some(context) = &entry.additional_context {
        blank_line(&ui_ctx);
        println!("{}", context);
    }

    Ok(())
}
