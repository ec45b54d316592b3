use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Document name used when neither flag, env, nor config names one.
pub const DEFAULT_DOCUMENT_NAME: &str = "DEVLOG.md";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DevlogConfig {
    #[serde(default)]
    pub devlog: DevlogSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DevlogSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    pub developer: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DevlogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("devlog"));
        }
    }
    Ok(home_dir()?.join(".config").join("devlog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: DevlogConfig =
            toml::from_str("[devlog]\npath = \"docs/DEVLOG.md\"\n\n[defaults]\ndeveloper = \"Jake\"\n")
                .unwrap();
        assert_eq!(config.devlog.path.as_deref(), Some("docs/DEVLOG.md"));
        assert_eq!(config.defaults.developer.as_deref(), Some("Jake"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config: DevlogConfig = toml::from_str("").unwrap();
        assert!(config.devlog.path.is_none());
        assert!(config.defaults.developer.is_none());
    }

    #[test]
    fn test_read_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[devlog\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
