use std::str::FromStr;

use alpha_core::{AlphaError, AppSettings, Language, ViewMode};

use crate::kv::KeyValue;

const SETTINGS_KEY: &str = "settings";
const TICKERS_KEY: &str = "tickers";

/// FAANG tickers for quick start.
pub const FAANG_TICKERS: &[&str] = &["AAPL", "AMZN", "GOOGL", "META", "MSFT"];

/// Stan's demo portfolio.
pub const STAN_PORTFOLIO: &[&str] = &["NVDA", "TSM", "META", "GOOG", "FTNT", "SOFI", "KO"];

/// A named ticker preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// The FAANG quick-start list.
    Faang,
    /// Stan's demo portfolio.
    Stan,
}

impl Preset {
    /// Tickers in this preset.
    pub fn tickers(self) -> &'static [&'static str] {
        match self {
            Preset::Faang => FAANG_TICKERS,
            Preset::Stan => STAN_PORTFOLIO,
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "faang" => Ok(Preset::Faang),
            "stan" => Ok(Preset::Stan),
            other => Err(format!("unknown preset: {other}")),
        }
    }
}

/// Application settings and tracked tickers, persisted through an injected
/// [`KeyValue`] store.
///
/// Loads once at startup and writes back on every change. Missing or corrupt
/// stored values fall back to defaults rather than failing, so a damaged
/// data directory never blocks the client from starting.
///
/// # Examples
///
/// ```
/// use alpha_core::ViewMode;
/// use alpha_store::{MemoryStore, SettingsStore};
///
/// let mut store = SettingsStore::load(MemoryStore::new());
/// assert!(store.tickers().is_empty());
///
/// store.add_ticker("nvda").unwrap();
/// assert_eq!(store.tickers(), &["NVDA"]);
///
/// store.set_view_mode(ViewMode::Advanced).unwrap();
/// assert_eq!(store.settings().view_mode, ViewMode::Advanced);
/// ```
pub struct SettingsStore<S: KeyValue> {
    store: S,
    settings: AppSettings,
    tickers: Vec<String>,
}

impl<S: KeyValue> SettingsStore<S> {
    /// Load settings and tickers from the store.
    ///
    /// The default ticker list is empty; there is no starter portfolio
    /// until the user picks one.
    pub fn load(store: S) -> Self {
        let settings = store
            .get(SETTINGS_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let tickers = store
            .get(TICKERS_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            store,
            settings,
            tickers,
        }
    }

    /// Current settings.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Tracked tickers in insertion order.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Consume the store and return the underlying key-value backend.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Set the presentation depth and persist.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<(), AlphaError> {
        self.settings.view_mode = mode;
        self.save_settings()
    }

    /// Set the display language and persist.
    pub fn set_language(&mut self, language: Language) -> Result<(), AlphaError> {
        self.settings.language = language;
        self.save_settings()
    }

    /// Toggle filing notifications and persist.
    pub fn set_notifications_enabled(&mut self, enabled: bool) -> Result<(), AlphaError> {
        self.settings.notifications_enabled = enabled;
        self.save_settings()
    }

    /// Track a ticker. Returns `false` if the normalized ticker is empty or
    /// already tracked.
    ///
    /// Tickers are normalized to trimmed uppercase before comparison.
    pub fn add_ticker(&mut self, ticker: &str) -> Result<bool, AlphaError> {
        let normalized = normalize(ticker);
        if normalized.is_empty() || self.tickers.contains(&normalized) {
            return Ok(false);
        }
        self.tickers.push(normalized);
        self.save_tickers()?;
        Ok(true)
    }

    /// Stop tracking a ticker. Returns `false` if it was not tracked.
    pub fn remove_ticker(&mut self, ticker: &str) -> Result<bool, AlphaError> {
        let normalized = normalize(ticker);
        let before = self.tickers.len();
        self.tickers.retain(|t| *t != normalized);
        if self.tickers.len() == before {
            return Ok(false);
        }
        self.save_tickers()?;
        Ok(true)
    }

    /// Replace the tracked list with a preset portfolio.
    pub fn load_preset(&mut self, preset: Preset) -> Result<(), AlphaError> {
        self.tickers = preset.tickers().iter().map(|t| t.to_string()).collect();
        self.save_tickers()
    }

    /// Clear all tracked tickers.
    pub fn clear_tickers(&mut self) -> Result<(), AlphaError> {
        self.tickers.clear();
        self.save_tickers()
    }

    fn save_settings(&mut self) -> Result<(), AlphaError> {
        let raw = serde_json::to_string(&self.settings)?;
        self.store.set(SETTINGS_KEY, &raw)
    }

    fn save_tickers(&mut self) -> Result<(), AlphaError> {
        let raw = serde_json::to_string(&self.tickers)?;
        self.store.set(TICKERS_KEY, &raw)
    }
}

fn normalize(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}
