//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Report rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Width of the banner lines framing each section
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,

    /// Character the banner lines are drawn with
    #[serde(default = "default_banner_char")]
    pub banner_char: char,
}

fn default_banner_width() -> usize {
    80
}

fn default_banner_char() -> char {
    '*'
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            banner_width: default_banner_width(),
            banner_char: default_banner_char(),
        }
    }
}

impl ReportConfig {
    /// A full banner line.
    pub fn banner(&self) -> String {
        self.banner_char.to_string().repeat(self.banner_width)
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub report: ReportConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.banner_width == 0 {
            return Err(ConfigError::ValidationError(
                "Banner width must be greater than 0".to_string(),
            ));
        }

        if self.report.banner_char.is_whitespace() || self.report.banner_char.is_control() {
            return Err(ConfigError::ValidationError(
                "Banner character must be visible".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.report.banner_width, 80);
        assert_eq!(config.report.banner_char, '*');
    }

    #[test]
    fn test_banner() {
        let report = ReportConfig {
            banner_width: 5,
            banner_char: '=',
        };
        assert_eq!(report.banner(), "=====");
        assert_eq!(ReportConfig::default().banner().len(), 80);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_width() {
        let mut config = AppConfig::default();
        config.report.banner_width = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_blank_char() {
        let mut config = AppConfig::default();
        config.report.banner_char = ' ';

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be parseable
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.report.banner_width, parsed.report.banner_width);
        assert_eq!(config.log_level, parsed.log_level);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("[report]\nbanner_char = \"#\"\n").unwrap();
        assert_eq!(config.report.banner_char, '#');
        assert_eq!(config.report.banner_width, 80);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[report]\nbanner_width = 40").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.report.banner_width, 40);
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\nbanner_width = 0").unwrap();

        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.report.banner_width, 80);
    }
}
