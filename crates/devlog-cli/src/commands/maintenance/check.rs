use devlog_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let issues = ledger.verify()?;

    let ui_ctx = ctx.ui_context(args.json, None);

    match ui_ctx.mode {
        OutputMode::Json => {
            let output = serde_json::json!({
                "status": if issues.is_empty() { "ok" } else { "failed" },
                "issues": issues,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputMode::Pretty => {
            if issues.is_empty() {
                if !ctx.quiet() {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Summary matches entries"));
                }
            } else {
                for issue in &issues {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Err, &issue.to_string()));
                }
            }
        }
        OutputMode::Plain => {
            for issue in &issues {
                println!("issue={}", issue);
            }
            if !ctx.quiet() || !issues.is_empty() {
                println!(
                    "status={}",
                    if issues.is_empty() { "ok" } else { "failed" }
                );
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CliError::IntegrityFailed {
            issues: issues.len(),
        }
        .into())
    }
}
