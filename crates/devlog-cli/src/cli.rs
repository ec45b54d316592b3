use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use devlog_core::VERSION;

/// Devlog - an append-only Markdown ledger of development activity
#[derive(Parser)]
#[command(name = "devlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the devlog document
    #[arg(short, long, global = true, env = "DEVLOG_PATH")]
    pub devlog: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII-only symbols
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `add` command
#[derive(Args, Default)]
pub struct AddArgs {
    /// Type of development activity (FEATURE, BUG_FIX, UI_CHANGE, PERFORMANCE, DOCUMENTATION, REFACTOR)
    #[arg(long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,

    /// Component affected
    #[arg(long)]
    pub component: Option<String>,

    /// Description of the change
    #[arg(long)]
    pub description: Option<String>,

    /// Impact level of the change (CRITICAL, HIGH, MEDIUM, LOW)
    #[arg(long)]
    pub impact: Option<String>,

    /// Files or directories changed
    #[arg(long)]
    pub files: Option<String>,

    /// Time spent (e.g., "30 minutes", "2 hours")
    #[arg(long)]
    pub duration: Option<String>,

    /// Brief description of the impact
    #[arg(long)]
    pub impact_description: Option<String>,

    /// Developer name (defaults to config, then a placeholder)
    #[arg(long)]
    pub developer: Option<String>,

    /// Additional context (testing, performance notes, ...)
    #[arg(long)]
    pub additional_context: Option<String>,

    /// Print the entry that would be written without changing the document
    #[arg(long)]
    pub dry_run: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by entry type
    #[arg(long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry number (e.g., 3 or 003)
    #[arg(value_name = "NUMBER")]
    pub number: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a new entry to the devlog
    Add(AddArgs),

    /// Print the number the next entry will receive
    Next,

    /// List entries, newest first
    List(ListArgs),

    /// Show a specific entry by number
    Show(ShowArgs),

    /// Show the summary counters
    Summary(SummaryArgs),

    /// Verify the summary against the entries
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
