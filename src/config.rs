//! Configuration system using TOML files with environment overrides.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\album-scout\config.toml
//! - macOS: ~/Library/Application Support/album-scout/config.toml
//! - Linux: ~/.config/album-scout/config.toml
//!
//! Every value has a hard-coded fallback default, so the application always
//! starts with a usable config. Environment variables (`API_URL`, `APP_NAME`,
//! `BUNDLE_ID`, `PRIMARY_COLOR`, `SECONDARY_COLOR`) override both the file
//! and the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identity settings (display name, bundle id)
    pub app: AppConfig,

    /// Theme colors for the presentation layer
    pub theme: ThemeConfig,

    /// Catalog API settings
    pub api: ApiConfig,
}

/// App identity settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name shown in the header
    pub name: String,

    /// Reverse-DNS bundle identifier
    pub bundle_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "Album Scout".to_string(),
            bundle_id: "com.albumscout".to_string(),
        }
    }
}

/// Theme colors, as hex strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#6200EE".to_string(),
            secondary_color: "#3700B3".to_string(),
        }
    }
}

/// Catalog API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the catalog search service
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://itunes.apple.com".to_string(),
        }
    }
}

/// Get the config directory for this app
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("album-scout"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration: file (if any), then environment overrides.
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let mut config = load_file();
    apply_env_overrides(&mut config);
    config
}

fn load_file() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Environment variables take precedence over the file and the defaults.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(v) = std::env::var("API_URL") {
        config.api.base_url = v;
    }
    if let Ok(v) = std::env::var("APP_NAME") {
        config.app.name = v;
    }
    if let Ok(v) = std::env::var("BUNDLE_ID") {
        config.app.bundle_id = v;
    }
    if let Ok(v) = std::env::var("PRIMARY_COLOR") {
        config.theme.primary_color = v;
    }
    if let Ok(v) = std::env::var("SECONDARY_COLOR") {
        config.theme.secondary_color = v;
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[app]"));
        assert!(toml.contains("[theme]"));
        assert!(toml.contains("[api]"));
    }

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://itunes.apple.com");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.api.base_url = "http://localhost:9999".to_string();
        config.app.name = "Test App".to_string();

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.api.base_url, "http://localhost:9999");
        assert_eq!(parsed.app.name, "Test App");
        assert_eq!(parsed.theme.primary_color, "#6200EE");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // Config with only some fields
        let toml = r#"
[app]
name = "Partial"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.app.name, "Partial");
        assert_eq!(config.app.bundle_id, "com.albumscout");
        assert_eq!(config.api.base_url, "https://itunes.apple.com");
    }
}
