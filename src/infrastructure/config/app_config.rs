//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "picrelay";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration, merged from config file, environment, and CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Bot API access token. Not serialized back out.
    #[serde(default)]
    pub token: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Accept URLs with image-like substrings, not only extension suffixes.
    #[serde(default)]
    pub lenient_urls: bool,

    /// Override for the Bot API base URL (local Bot API servers).
    #[serde(default)]
    pub api_base: Option<String>,
}

impl AppConfig {
    /// Loads the config file at `path`, or the default location, falling
    /// back to defaults when no file exists.
    ///
    /// # Errors
    /// Returns error if a file exists but cannot be read or parsed.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let effective = path.clone().or_else(Self::default_config_path);
        let Some(effective) = effective else {
            return Ok(Self::default());
        };
        if !effective.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&effective)?;
        let mut config: Self = toml::from_str(&contents)?;
        config.config = path;
        Ok(config)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: super::CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(token) = args.token {
            self.token = Some(token);
        }
        if let Some(lenient_urls) = args.lenient_urls {
            self.lenient_urls = lenient_urls;
        }
        if let Some(api_base) = args.api_base {
            self.api_base = Some(api_base);
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("picrelay.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            token: None,
            log_level: LogLevel::Info,
            lenient_urls: false,
            api_base: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_file_fields() {
        let toml_content = r#"
            token = "123:ABC"
            log_level = "debug"
            lenient_urls = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("parse config");

        assert_eq!(config.token.as_deref(), Some("123:ABC"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.lenient_urls);
        assert_eq!(config.api_base, None);
    }

    #[test]
    fn default_config_is_strict_without_token() {
        let config = AppConfig::default();

        assert_eq!(config.token, None);
        assert!(!config.lenient_urls);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn cli_args_override_file_values() {
        let mut config = AppConfig {
            token: Some("file-token".into()),
            ..AppConfig::default()
        };

        config.merge_with_args(super::super::CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Warn),
            token: Some("cli-token".into()),
            lenient_urls: Some(true),
            api_base: None,
        });

        assert_eq!(config.token.as_deref(), Some("cli-token"));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.lenient_urls);
    }
}
