//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::composer::RenderOptions;
use crate::navigation::{NavState, Section};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial view state and presentation switches
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_section: Section,

    #[serde(default)]
    pub sidebar_collapsed: bool,

    #[serde(default = "default_animations")]
    pub animations: bool,
}

fn default_animations() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_section: Section::default(),
            sidebar_collapsed: false,
            animations: default_animations(),
        }
    }
}

impl DashboardConfig {
    /// Navigation state a new session starts with
    pub fn initial_nav(&self) -> NavState {
        NavState::new(self.default_section, self.sidebar_collapsed)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            animations: self.animations,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("trendwave").join("config.toml")),
            Some(PathBuf::from("/etc/trendwave/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `TRENDWAVE_*` overrides read through `lookup`
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(id) = lookup("TRENDWAVE_DEFAULT_SECTION") {
            match Section::from_id(&id) {
                Ok(section) => self.dashboard.default_section = section,
                Err(e) => tracing::warn!(error = %e, "Ignoring TRENDWAVE_DEFAULT_SECTION"),
            }
        }
        if let Some(value) = lookup("TRENDWAVE_SIDEBAR_COLLAPSED") {
            match parse_bool(&value) {
                Some(collapsed) => self.dashboard.sidebar_collapsed = collapsed,
                None => tracing::warn!(value = %value, "Ignoring TRENDWAVE_SIDEBAR_COLLAPSED"),
            }
        }
        if let Some(value) = lookup("TRENDWAVE_ANIMATIONS") {
            match parse_bool(&value) {
                Some(animations) => self.dashboard.animations = animations,
                None => tracing::warn!(value = %value, "Ignoring TRENDWAVE_ANIMATIONS"),
            }
        }
        if let Some(level) = lookup("TRENDWAVE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TRENDWAVE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Trendwave Configuration
#
# Environment variables override these settings:
# - TRENDWAVE_DEFAULT_SECTION
# - TRENDWAVE_SIDEBAR_COLLAPSED
# - TRENDWAVE_ANIMATIONS
# - TRENDWAVE_LOG_LEVEL
# - TRENDWAVE_LOG_FORMAT

[dashboard]
# Section shown on startup:
# overview, regional, genres, streaming, artists, predictions
default_section = "overview"

# Start with the sidebar collapsed to icons
sidebar_collapsed = false

# Decorative entrance effects
animations = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dashboard.default_section, Section::Overview);
        assert!(!config.dashboard.sidebar_collapsed);
        assert!(config.dashboard.animations);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[dashboard]\ndefault_section = \"genres\"\n").unwrap();
        assert_eq!(config.dashboard.default_section, Section::Genres);
        assert!(config.dashboard.animations);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_unknown_section_is_parse_error() {
        let err = Config::parse("[dashboard]\ndefault_section = \"charts\"\n").unwrap_err();
        assert!(err.contains("charts"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard]\nsidebar_collapsed = true\nanimations = false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.dashboard.sidebar_collapsed);
        assert_eq!(config.dashboard.render_options(), RenderOptions::static_only());
        assert_eq!(
            config.dashboard.initial_nav(),
            NavState::new(Section::Overview, true)
        );
    }

    #[test]
    fn test_load_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[dashboard\n").unwrap();
        let err = Config::load(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TRENDWAVE_DEFAULT_SECTION", "artists"),
            ("TRENDWAVE_SIDEBAR_COLLAPSED", "yes"),
            ("TRENDWAVE_ANIMATIONS", "off"),
            ("TRENDWAVE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.dashboard.default_section, Section::Artists);
        assert!(config.dashboard.sidebar_collapsed);
        assert!(!config.dashboard.animations);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "TRENDWAVE_DEFAULT_SECTION" => Some("charts".to_string()),
            "TRENDWAVE_SIDEBAR_COLLAPSED" => Some("maybe".to_string()),
            _ => None,
        });
        assert_eq!(config.dashboard, DashboardConfig::default());
    }
}
