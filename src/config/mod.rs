//! Configuration module for gardenplan
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. `config.toml` in the user's config directory (or `--config PATH`)
//! 3. `GARDENPLAN_*` environment variables (e.g. `GARDENPLAN_FOCUS_DELAY_MS=0`)
//!
//! Command-line flags are applied on top with [`GardenConfig::apply_overrides`].

use crate::garden::SelectorTimings;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix for environment overrides
const ENV_PREFIX: &str = "GARDENPLAN";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GardenConfig {
    /// Plant catalog file to load instead of the builtin table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Delay before the selector's search field takes focus, in milliseconds
    pub focus_delay_ms: u64,

    /// How long a picked plant's name replaces the selector placeholder, in
    /// milliseconds
    pub confirmation_ms: u64,

    /// How long status messages stay visible, in seconds
    pub status_ttl_secs: u64,

    /// Terminal width from which selected cards are laid out in a grid
    pub wide_layout_min_width: u16,

    /// Log file; without one the TUI does not log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Default log filter when `GARDENPLAN_LOG` is unset
    pub log_level: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            focus_delay_ms: 100,
            confirmation_ms: 500,
            status_ttl_secs: 3,
            wide_layout_min_width: 100,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl GardenConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("gardenplan").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file or environment cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`
    ///
    /// A missing file yields the defaults, still overridden by the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        fs::write(path, self.to_toml()?)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, catalog: Option<PathBuf>, log_file: Option<PathBuf>) {
        if catalog.is_some() {
            self.catalog_path = catalog;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
    }

    /// Selector delays
    #[must_use]
    pub const fn selector_timings(&self) -> SelectorTimings {
        SelectorTimings {
            focus_delay: Duration::from_millis(self.focus_delay_ms),
            confirmation: Duration::from_millis(self.confirmation_ms),
        }
    }

    /// Status message lifetime
    #[must_use]
    pub const fn status_ttl(&self) -> Duration {
        Duration::from_secs(self.status_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GardenConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.selector_timings(), SelectorTimings::default());
        assert_eq!(config.status_ttl(), Duration::from_secs(3));
        assert_eq!(config.wide_layout_min_width, 100);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GardenConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.focus_delay_ms, 100);
        assert_eq!(config.confirmation_ms, 500);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "confirmation_ms = 1200\ncatalog_path = \"/srv/plants.toml\"\n",
        )
        .unwrap();

        let config = GardenConfig::load_from(&path).unwrap();
        assert_eq!(config.confirmation_ms, 1200);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/plants.toml")));
        assert_eq!(config.focus_delay_ms, 100);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = GardenConfig {
            wide_layout_min_width: 140,
            log_file: Some(PathBuf::from("/tmp/gardenplan.log")),
            ..GardenConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(GardenConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "focus_delay_ms = \"soon\"\n").unwrap();
        assert!(GardenConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = GardenConfig {
            catalog_path: Some(PathBuf::from("a.json")),
            ..GardenConfig::default()
        };
        config.apply_overrides(None, Some(PathBuf::from("run.log")));
        assert_eq!(config.catalog_path, Some(PathBuf::from("a.json")));
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));

        config.apply_overrides(Some(PathBuf::from("b.toml")), None);
        assert_eq!(config.catalog_path, Some(PathBuf::from("b.toml")));
    }
}
