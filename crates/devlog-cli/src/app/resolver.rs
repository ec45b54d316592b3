//! Path resolution for config and devlog files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, DevlogConfig, DEFAULT_DOCUMENT_NAME};

/// Resolve the config file path, checking DEVLOG_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("DEVLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file; a missing file yields the defaults.
pub fn load_config() -> anyhow::Result<DevlogConfig> {
    let config_path = match resolve_config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!("no config path: {}", err);
            return Ok(DevlogConfig::default());
        }
    };
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "config file not present");
        return Ok(DevlogConfig::default());
    }
    read_config(&config_path)
}

/// Resolve the devlog document path.
///
/// Order: `--devlog` / `DEVLOG_PATH`, then `devlog.path` from config, then
/// `DEVLOG.md` in the working directory.
pub fn resolve_devlog_path(cli: &Cli, config: &DevlogConfig) -> PathBuf {
    if let Some(path) = cli.devlog.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = config.devlog.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_DOCUMENT_NAME)
}

/// Error message when the devlog document is missing.
pub fn missing_devlog_message(path: &Path) -> String {
    format!("No devlog found at {}", path.display())
}

/// Hint shown with [`missing_devlog_message`].
pub fn missing_devlog_hint() -> &'static str {
    "Hint: Create the document with a \"## Development Entries\" heading followed by a blank line,\n      or point to an existing one with --devlog or DEVLOG_PATH."
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_config() {
        let cli = Cli::parse_from(["devlog", "--devlog", "flag.md", "next"]);
        let mut config = DevlogConfig::default();
        config.devlog.path = Some("config.md".to_string());
        assert_eq!(resolve_devlog_path(&cli, &config), PathBuf::from("flag.md"));
    }

    #[test]
    fn test_config_wins_over_default() {
        let cli = Cli::parse_from(["devlog", "next"]);
        let mut config = DevlogConfig::default();
        config.devlog.path = Some("docs/DEVLOG.md".to_string());
        // DEVLOG_PATH in the environment takes the flag's place
        if cli.devlog.is_none() {
            assert_eq!(
                resolve_devlog_path(&cli, &config),
                PathBuf::from("docs/DEVLOG.md")
            );
        }
    }

    #[test]
    fn test_default_document_name() {
        let cli = Cli::parse_from(["devlog", "--devlog", "", "next"]);
        assert_eq!(
            resolve_devlog_path(&cli, &DevlogConfig::default()),
            PathBuf::from(DEFAULT_DOCUMENT_NAME)
        );
    }
}
