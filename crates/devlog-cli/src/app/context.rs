//! Application context for the devlog CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use devlog_core::{DevlogError, FileLedger};

use crate::cli::Cli;
use crate::config::DevlogConfig;
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{load_config, missing_devlog_hint, missing_devlog_message, resolve_devlog_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<DevlogConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&DevlogConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Resolved path of the devlog document.
    pub fn devlog_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_devlog_path(self.cli, self.config()?))
    }

    /// Developer recorded when `--developer` is not given.
    pub fn default_developer(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.defaults.developer.as_deref())
    }

    /// Open the devlog document, mapping a missing file to a hinted error.
    pub fn open_ledger(&self) -> anyhow::Result<FileLedger> {
        let path = self.devlog_path()?;
        match FileLedger::open(&path) {
            Ok(ledger) => Ok(ledger),
            Err(DevlogError::NotFound(_)) => Err(CliError::not_found(
                missing_devlog_message(&path),
                missing_devlog_hint(),
            )
            .into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Build a UI context for output formatting.
    pub fn ui_context(&self, json_flag: bool, format_flag: Option<&str>) -> UiContext {
        UiContext::from_env(json_flag, format_flag, self.cli.no_color, self.cli.ascii)
    }
}
