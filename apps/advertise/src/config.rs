//! CLI configuration.
//!
//! Stored as TOML:
//! - Linux: `~/.config/advertise/advertise.toml`
//! - Windows: `%APPDATA%/advertise/advertise.toml`
//!
//! `ADVERTISE_CONFIG` overrides the path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name reported in build info (hostname by default).
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_service_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "advertise".into())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
        }
    }
}

impl Config {
    /// Loads configuration from disk, or defaults if the file is absent.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration read");
        Ok(config)
    }
}

/// Returns the configuration file path.
fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("ADVERTISE_CONFIG") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home)
            .join(".config")
            .join("advertise")
            .join("advertise.toml")
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata).join("advertise").join("advertise.toml")
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        PathBuf::from("/tmp/advertise/advertise.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.service_name.is_empty());
    }

    #[test]
    fn config_partial_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.service_name.is_empty());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = Config {
            service_name: "billing".into(),
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.service_name, "billing");
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
        assert!(!config.service_name.is_empty());
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("advertise.toml");
        std::fs::write(&path, r#"service_name = "gateway""#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.service_name, "gateway");
    }

    #[test]
    fn load_rejects_bad_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("advertise.toml");
        std::fs::write(&path, "service_name = [").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn config_path_not_empty() {
        assert!(config_path().to_string_lossy().contains("advertise"));
    }
}
