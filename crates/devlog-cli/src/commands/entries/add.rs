use chrono::Utc;

use devlog_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{collect_entry, FieldPrompter, TerminalPrompter};
use crate::output::append_json;
use crate::ui::{badge, kv, print, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);

    let mut terminal = TerminalPrompter;
    let prompter: Option<&mut dyn FieldPrompter> =
        if !args.no_input && !ui_ctx.mode.is_json() && ui_ctx.is_interactive() {
            Some(&mut terminal)
        } else {
            None
        };
    let candidate = collect_entry(args, ctx.default_developer()?, prompter)?;

    // Bad input is reported before the document is looked at.
    candidate.validate()?;
    let ledger = ctx.open_ledger()?;

    let now = Utc::now();
    let outcome = if args.dry_run {
        ledger.preview(&candidate, now)?
    } else {
        ledger.append(&candidate, now)?
    };
    let entry = &outcome.entry;

    if ui_ctx.mode.is_json() {
        let output = append_json(&outcome, ledger.path(), args.dry_run);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for warning in &outcome.warnings {
        eprintln!("{}", badge(&ui_ctx, Badge::Warn, &warning.to_string()));
    }

    if ctx.quiet() {
        println!("{}", entry.padded_number());
        return Ok(());
    }

    if args.dry_run {
        print!("{}", devlog_core::render_entry(entry));
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!(
                        "Added entry #{} to {}",
                        entry.padded_number(),
                        ledger.path().display()
                    ),
                ),
            );
            print(&ui_ctx, &kv(&ui_ctx, "Timestamp", &entry.formatted_timestamp()));
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("entry_number={}", entry.padded_number());
            println!("timestamp={}", entry.formatted_timestamp());
            println!("document={}", ledger.path().display());
        }
    }

    Ok(())
}
