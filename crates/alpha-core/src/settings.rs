use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Presentation depth selected by the user.
///
/// Beginner mode shows simplified summaries instead of raw diffs and metrics.
///
/// # Examples
///
/// ```
/// use alpha_core::ViewMode;
///
/// let mode: ViewMode = "beginner".parse().unwrap();
/// assert!(mode.is_beginner());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Simplified explanations and tips.
    #[default]
    Beginner,
    /// Summaries plus key metrics.
    Intermediate,
    /// Raw data, diffs, and detailed metrics.
    Advanced,
}

impl ViewMode {
    /// Returns `true` for the beginner presentation.
    pub fn is_beginner(self) -> bool {
        self == ViewMode::Beginner
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Beginner => write!(f, "beginner"),
            ViewMode::Intermediate => write!(f, "intermediate"),
            ViewMode::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ViewMode::Beginner),
            "intermediate" => Ok(ViewMode::Intermediate),
            "advanced" => Ok(ViewMode::Advanced),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Traditional Chinese.
    Zh,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Zh => write!(f, "zh"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// User preferences persisted across sessions.
///
/// Stored as camelCase JSON to stay compatible with the mobile client's
/// settings payload.
///
/// # Examples
///
/// ```
/// use alpha_core::{AppSettings, Language, ViewMode};
///
/// let settings = AppSettings::default();
/// assert_eq!(settings.view_mode, ViewMode::Beginner);
/// assert_eq!(settings.language, Language::En);
/// assert!(settings.notifications_enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Presentation depth.
    #[serde(default)]
    pub view_mode: ViewMode,
    /// Display language.
    #[serde(default)]
    pub language: Language,
    /// Whether filing notifications are enabled.
    #[serde(default = "default_notifications")]
    pub notifications_enabled: bool,
}

fn default_notifications() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            language: Language::default(),
            notifications_enabled: default_notifications(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_from_str() {
        assert_eq!("beginner".parse::<ViewMode>().unwrap(), ViewMode::Beginner);
        assert_eq!("ADVANCED".parse::<ViewMode>().unwrap(), ViewMode::Advanced);
        assert!("analyst".parse::<ViewMode>().is_err());
    }

    #[test]
    fn language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn settings_serialize_camel_case() {
        let settings = AppSettings::default();
        let json = serde_json::to_value(&settings).unwrap();
        assert!(json.get("viewMode").is_some());
        assert!(json.get("notificationsEnabled").is_some());
        assert!(json.get("view_mode").is_none());
    }

    #[test]
    fn partial_settings_fill_defaults() {
        // The mobile client merged stored settings over defaults; missing
        // fields must deserialize to the default value.
        let settings: AppSettings = serde_json::from_str(r#"{"language":"zh"}"#).unwrap();
        assert_eq!(settings.language, Language::Zh);
        assert_eq!(settings.view_mode, ViewMode::Beginner);
        assert!(settings.notifications_enabled);
    }
}
