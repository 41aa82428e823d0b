//! Configuration handling for the TUI

use crate::api::DEFAULT_BASE_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "CLINIC_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend base URL, e.g. `http://localhost:5000/api`
    pub api_base_url: Option<String>,
    /// Per-request timeout
    pub request_timeout_secs: Option<u64>,
    /// Show retired equipment by default
    pub show_retired_equipment: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "clinic", "clinic-ops-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Env var, then config file, then the built-in default
    pub fn resolve_base_url(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn base_url(&self) -> String {
        self.resolve_base_url(std::env::var(API_URL_ENV).ok())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|s| *s > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.show_retired_equipment.is_none());
        assert_eq!(config.request_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_env_overrides_file() {
        let config = TuiConfig {
            api_base_url: Some("http://file.local/api".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_base_url(Some("http://env.local/api".to_string())),
            "http://env.local/api"
        );
        assert_eq!(config.resolve_base_url(None), "http://file.local/api");
        assert_eq!(config.resolve_base_url(Some("  ".to_string())), "http://file.local/api");
    }

    #[test]
    fn test_falls_back_to_default_url() {
        assert_eq!(TuiConfig::default().resolve_base_url(None), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TuiConfig {
            api_base_url: Some("http://clinic.local/api".to_string()),
            request_timeout_secs: Some(30),
            show_retired_equipment: Some(true),
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api_base_url.as_deref(), Some("http://clinic.local/api"));
        assert_eq!(loaded.request_timeout(), Duration::from_secs(30));
        assert_eq!(loaded.show_retired_equipment, Some(true));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let loaded = TuiConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"show_retired_equipment": true, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.show_retired_equipment, Some(true));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = TuiConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
