use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AlphaError;

/// Top-level configuration loaded from `.alpha.toml`.
///
/// Resolution order: CLI flags > local config > defaults.
///
/// # Examples
///
/// ```
/// use alpha_core::AlphaConfig;
///
/// let config = AlphaConfig::default();
/// assert_eq!(config.diff.max_lines, 400);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlphaConfig {
    /// Local data storage settings.
    #[serde(default)]
    pub data: DataConfig,
    /// Diff rendering settings.
    #[serde(default)]
    pub diff: DiffConfig,
    /// Backtest defaults.
    #[serde(default)]
    pub backtest: BacktestDefaults,
}

impl AlphaConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaError::Io`] if the file cannot be read, or
    /// [`AlphaError::Toml`] if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use alpha_core::AlphaConfig;
    /// use std::path::Path;
    ///
    /// let config = AlphaConfig::from_file(Path::new(".alpha.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, AlphaError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`AlphaError::Toml`] if parsing fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_core::AlphaConfig;
    ///
    /// let toml = r#"
    /// [diff]
    /// max_lines = 200
    /// "#;
    /// let config = AlphaConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.diff.max_lines, 200);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, AlphaError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Where settings and tracked tickers are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory for the local key-value store (default: `.alpha`).
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".alpha")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Diff rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Maximum diff lines to print before truncating (default: 400).
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

fn default_max_lines() -> usize {
    400
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
        }
    }
}

/// Defaults applied to `alpha backtest` when flags are omitted.
///
/// # Examples
///
/// ```
/// use alpha_core::BacktestDefaults;
///
/// let defaults = BacktestDefaults::default();
/// assert_eq!(defaults.transaction_cost_bps, 10.0);
/// assert_eq!(defaults.delay_ms, 2000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestDefaults {
    /// Tickers used when none are given.
    #[serde(default = "default_backtest_tickers")]
    pub tickers: Vec<String>,
    /// Round-trip transaction cost in basis points (default: 10).
    #[serde(default = "default_cost_bps")]
    pub transaction_cost_bps: f64,
    /// Simulated compute time in milliseconds (default: 2000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_backtest_tickers() -> Vec<String> {
    vec!["NVDA".into(), "TSM".into(), "META".into(), "GOOG".into()]
}

fn default_cost_bps() -> f64 {
    10.0
}

fn default_delay_ms() -> u64 {
    2000
}

impl Default for BacktestDefaults {
    fn default() -> Self {
        Self {
            tickers: default_backtest_tickers(),
            transaction_cost_bps: default_cost_bps(),
            delay_ms: default_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = AlphaConfig::default();
        assert_eq!(config.data.dir, PathBuf::from(".alpha"));
        assert_eq!(config.diff.max_lines, 400);
        assert_eq!(config.backtest.tickers, vec!["NVDA", "TSM", "META", "GOOG"]);
        assert_eq!(config.backtest.transaction_cost_bps, 10.0);
        assert_eq!(config.backtest.delay_ms, 2000);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml = r#"
[data]
dir = "/tmp/alpha"
"#;
        let config = AlphaConfig::from_toml(toml).unwrap();
        assert_eq!(config.data.dir, PathBuf::from("/tmp/alpha"));
        assert_eq!(config.diff.max_lines, 400);
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
[data]
dir = ".alpha"

[diff]
max_lines = 100

[backtest]
tickers = ["AAPL", "MSFT"]
transaction_cost_bps = 5.0
delay_ms = 0
"#;
        let config = AlphaConfig::from_toml(toml).unwrap();
        assert_eq!(config.diff.max_lines, 100);
        assert_eq!(config.backtest.tickers, vec!["AAPL", "MSFT"]);
        assert_eq!(config.backtest.transaction_cost_bps, 5.0);
        assert_eq!(config.backtest.delay_ms, 0);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = AlphaConfig::from_toml("").unwrap();
        assert_eq!(config.diff.max_lines, 400);
    }

    #[test]
    fn invalid_toml_returns_error() {
        let result = AlphaConfig::from_toml("{{invalid}}");
        assert!(result.is_err());
    }
}
