use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapbookError};

const CONFIG_FILE: &str = "config.yaml";

/// Settings read from `.scrapbook/config.yaml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapbookConfig {
    /// Page heading
    pub title: String,
    /// Text revealed by clicking the heart
    pub heart_message: String,
    /// Default export target, relative to the project root
    pub export_file: String,
    /// Background music source; the player is omitted when unset
    pub music_src: Option<String>,
    /// tracing filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ScrapbookConfig {
    fn default() -> Self {
        Self {
            title: "💖 Our Love Scrapbook 💖".to_string(),
            heart_message: "My heart belongs to you. You are my everything ❤️".to_string(),
            export_file: "love-scrapbook.json".to_string(),
            music_src: None,
            log_level: "warn".to_string(),
        }
    }
}

impl ScrapbookConfig {
    /// Load the config from a scrapbook directory, defaulting when the file is absent.
    pub fn load(scrapbook_dir: &Path) -> Result<Self> {
        let path = scrapbook_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Self::from_yaml(&raw)
            .map_err(|e| ScrapbookError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_yaml(raw: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ScrapbookConfig::default();
        assert_eq!(config.export_file, "love-scrapbook.json");
        assert_eq!(config.log_level, "warn");
        assert!(config.music_src.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ScrapbookConfig::from_yaml("music_src: song.mp3\nlog_level: debug\n").unwrap();
        assert_eq!(config.music_src.as_deref(), Some("song.mp3"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.export_file, ScrapbookConfig::default().export_file);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ScrapbookConfig::from_yaml("").unwrap(), ScrapbookConfig::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(ScrapbookConfig::load(tmp.path()).unwrap(), ScrapbookConfig::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "title: [unclosed").unwrap();
        let err = ScrapbookConfig::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ScrapbookError::Config(_)));
    }
}
