//! # Demo Configuration
//!
//! Controls how the demos log. Nothing here affects any computed figure.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     BILLING_LOG_FILTER=debug                                           │
//! │     BILLING_LOG_TARGET=true                                            │
//! │     BILLING_LOG_ANSI=false                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, else $BILLING_DEMOS_CONFIG, else                    │
//! │     ~/.config/billing-patterns/demos.toml (Linux)                      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     filter = "info", with_target = false, ansi = true                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RUST_LOG`, when set, still wins over the configured filter; see
//! [`crate::telemetry`].
//!
//! Loading happens before any subscriber exists, so nothing in here logs.
//! A malformed value is an error rather than a warning, and the file that
//! was read is kept in [`DemoConfig::source`] for the caller to report.
//!
//! ## Configuration File Format
//! ```toml
//! # demos.toml
//! [log]
//! filter = "info,billing_core=debug"
//! with_target = true
//! ansi = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Names the config file path explicitly.
pub const CONFIG_PATH_ENV: &str = "BILLING_DEMOS_CONFIG";
pub const LOG_FILTER_ENV: &str = "BILLING_LOG_FILTER";
pub const LOG_TARGET_ENV: &str = "BILLING_LOG_TARGET";
pub const LOG_ANSI_ENV: &str = "BILLING_LOG_ANSI";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Log Settings
// =============================================================================

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directives, e.g. `"info,billing_core=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Print the event target (module path) on each line.
    #[serde(default)]
    pub with_target: bool,

    /// Colour the output.
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_filter(),
            with_target: false,
            ansi: true,
        }
    }
}

// =============================================================================
// Demo Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub log: LogSettings,

    /// The file this config was read from, if one existed.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl DemoConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (a missing file is not an error)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`DemoConfig::load`] with environment variables read through `lookup`.
    ///
    /// The file is `config_path`, else `$BILLING_DEMOS_CONFIG`, else the
    /// per-user default.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path.filter(|path| path.exists()) {
            let contents = std::fs::read_to_string(&path)?;
            config = Self::from_toml(&contents)?;
            config.source = Some(path);
        }

        config.apply_env_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a `demos.toml` document. Missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter must not be empty".into()));
        }

        Ok(())
    }

    /// Applies overrides, reading variables through `lookup`.
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(LOG_FILTER_ENV) {
            self.log.filter = filter;
        }

        if let Some(value) = lookup(LOG_TARGET_ENV) {
            self.log.with_target = parse_flag(LOG_TARGET_ENV, &value)?;
        }

        if let Some(value) = lookup(LOG_ANSI_ENV) {
            self.log.ansi = parse_flag(LOG_ANSI_ENV, &value)?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "billing-patterns", "billing-patterns")
            .map(|dirs| dirs.config_dir().join("demos.toml"))
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "{name} must be a boolean, got {value:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.with_target);
        assert!(config.log.ansi);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = DemoConfig::from_toml(
            r#"
            [log]
            filter = "debug"
            with_target = true
            ansi = false
            "#,
        )
        .unwrap();
        assert_eq!(config.log.filter, "debug");
        assert!(config.log.with_target);
        assert!(!config.log.ansi);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DemoConfig::from_toml("[log]\nwith_target = true\n").unwrap();
        assert_eq!(config.log.filter, "info");
        assert!(config.log.ansi);

        assert_eq!(DemoConfig::from_toml("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = DemoConfig::from_toml("[log\nfilter = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DemoConfig::default();
        config
            .apply_env_overrides(env(&[
                (LOG_FILTER_ENV, "billing_core=trace"),
                (LOG_TARGET_ENV, "yes"),
                (LOG_ANSI_ENV, "0"),
            ]))
            .unwrap();
        assert_eq!(config.log.filter, "billing_core=trace");
        assert!(config.log.with_target);
        assert!(!config.log.ansi);
    }

    #[test]
    fn test_bad_env_flag_is_rejected() {
        let mut config = DemoConfig::default();
        let err = config
            .apply_env_overrides(env(&[(LOG_ANSI_ENV, "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains(LOG_ANSI_ENV));

        let err = DemoConfig::load_with(None, env(&[(LOG_TARGET_ENV, "maybe")])).unwrap_err();
        assert!(err.to_string().contains("\"maybe\""));
    }

    #[test]
    fn test_empty_filter_is_invalid() {
        let mut config = DemoConfig::default();
        config.log.filter = "   ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = config_file("[log]\nwith_target = true\n");
        let path = file.path().to_path_buf();

        let config = DemoConfig::load_with(Some(path.clone()), env(&[])).unwrap();
        assert!(config.log.with_target);
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            DemoConfig::load_with(Some(dir.path().join("absent.toml")), env(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_load_path_from_env() {
        let file = config_file("[log]\nfilter = \"warn\"\n");
        let path = file.path().to_str().unwrap();

        let config = DemoConfig::load_with(None, env(&[(CONFIG_PATH_ENV, path)])).unwrap();
        assert_eq!(config.log.filter, "warn");
        assert_eq!(config.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_explicit_path_beats_env_path() {
        let explicit = config_file("[log]\nfilter = \"debug\"\n");
        let from_env = config_file("[log]\nfilter = \"warn\"\n");
        let lookup = env(&[(CONFIG_PATH_ENV, from_env.path().to_str().unwrap())]);

        let config = DemoConfig::load_with(Some(explicit.path().to_path_buf()), lookup).unwrap();
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_env_beats_file() {
        let file = config_file("[log]\nfilter = \"debug\"\nansi = true\n");
        let lookup = env(&[(LOG_FILTER_ENV, "error"), (LOG_ANSI_ENV, "off")]);

        let config = DemoConfig::load_with(Some(file.path().to_path_buf()), lookup).unwrap();
        assert_eq!(config.log.filter, "error");
        assert!(!config.log.ansi);
    }

    #[test]
    fn test_empty_filter_from_env_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let lookup = env(&[(LOG_FILTER_ENV, "")]);
        let err = DemoConfig::load_with(Some(dir.path().join("absent.toml")), lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&DemoConfig::default()).unwrap();
        assert!(toml_str.contains("[log]"));
        assert!(toml_str.contains("filter = \"info\""));
    }
}
