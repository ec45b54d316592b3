//! Devlog CLI - append-only Markdown ledger of development activity
//!
//! This is the command-line interface for Devlog. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use devlog_core::VERSION;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, maintenance, misc, summary};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Split a trailing "Hint:" paragraph off an error message, or supply a
/// contextual hint for common errors.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        let hint = error[idx + "\nHint:".len()..].trim().to_string();
        return (&error[..idx], Some(hint));
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("insertion anchor") {
        return (
            error,
            Some(format!(
                "Add a \"{}\" heading followed by a blank line.",
                devlog_core::document::ENTRIES_HEADING
            )),
        );
    }

    if error_lower.contains("integrity") && error_lower.contains("failed") {
        return (
            error,
            Some("Fix the counters in the summary table by hand, then run `devlog check` again.".to_string()),
        );
    }

    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => {
            entries::handle_add(ctx, args)?;
        }
        Some(Commands::Next) => {
            entries::handle_next(ctx)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Summary(args)) => {
            summary::handle_summary(ctx, args)?;
        }
        Some(Commands::Check(args)) => {
            maintenance::handle_check(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Devlog v{}", VERSION);
            println!("\nQuickstart:");
            println!("  devlog next");
            println!(
                "  devlog add --type FEATURE --component \"Dashboard UI\" --description \"Added theme toggle\" \\"
            );
            println!("             --impact HIGH --files apps/web/ --duration \"30 minutes\"");
            println!("  devlog list --limit 5");
            println!("  devlog check");
            println!("\nRun `devlog --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_hint_is_split_off() {
        let (message, hint) =
            split_error_hint("No devlog found at DEVLOG.md\nHint: Create the document.");
        assert_eq!(message, "No devlog found at DEVLOG.md");
        assert_eq!(hint.as_deref(), Some("Create the document."));
    }

    #[test]
    fn test_contextual_hint_for_missing_anchor() {
        let error = "Structure error: insertion anchor \"## Development Entries\" not found";
        let (message, hint) = split_error_hint(error);
        assert_eq!(message, error);
        assert!(hint.unwrap().contains("## Development Entries"));
    }

    #[test]
    fn test_no_hint() {
        let (_, hint) = split_error_hint("disk full");
        assert!(hint.is_none());
    }
}
