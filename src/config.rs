//! TOML configuration
//!
//! ```toml
//! [markdown]
//! datetime_format = "%-m/%-d/%Y, %-I:%M:%S %p"
//!
//! [ticker]
//! hourly_rate = 200.0
//! default_attendees = 5
//!
//! [logging]
//! level = "warn"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::datetime::{DEFAULT_DATETIME_FORMAT, DateStyle};
use crate::minutes::{CostTicker, DEFAULT_ATTENDEES, DEFAULT_HOURLY_RATE};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub markdown: MarkdownConfig,
    pub ticker: TickerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// chrono strftime pattern for the `Date/Time` line
    pub datetime_format: String,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerConfig {
    pub hourly_rate: f64,
    /// Used when the attendees field is empty
    pub default_attendees: u32,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            default_attendees: DEFAULT_ATTENDEES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`
    ///
    /// A missing file yields the defaults. The date format is checked here so
    /// a bad pattern is reported at startup rather than while rendering.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.date_style()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise the defaults
    pub fn load_or_default(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn date_style(&self) -> Result<DateStyle> {
        DateStyle::new(&self.markdown.datetime_format)
            .context("Invalid [markdown] datetime_format")
    }

    /// A ticker preloaded with the configured rate and attendee fallback
    pub fn ticker(&self) -> CostTicker {
        CostTicker::new(self.ticker.default_attendees, self.ticker.hourly_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load("/nonexistent/minutes.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ticker.hourly_rate, 200.0);
        assert_eq!(config.ticker.default_attendees, 5);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ticker]\nhourly_rate = 95.5").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ticker.hourly_rate, 95.5);
        assert_eq!(config.ticker.default_attendees, DEFAULT_ATTENDEES);
        assert_eq!(config.markdown.datetime_format, DEFAULT_DATETIME_FORMAT);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[ticker\nhourly_rate = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_datetime_format_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[markdown]\ndatetime_format = \"%Q\"").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_ticker_uses_configured_values() {
        let config = Config {
            ticker: TickerConfig {
                hourly_rate: 80.0,
                default_attendees: 3,
            },
            ..Config::default()
        };
        let ticker = config.ticker();
        assert_eq!(ticker.hourly_rate(), 80.0);
        assert_eq!(ticker.attendees(), 3);
    }
}
