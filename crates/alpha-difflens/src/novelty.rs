use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tier derived from a novelty score.
///
/// The novelty score is the fraction of a filing section that changed
/// between two reporting periods, conventionally in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use alpha_difflens::novelty::NoveltyTier;
///
/// assert_eq!(NoveltyTier::from_score(0.30), NoveltyTier::High);
/// assert_eq!(NoveltyTier::from_score(0.25), NoveltyTier::Medium);
/// assert_eq!(NoveltyTier::from_score(0.10), NoveltyTier::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoveltyTier {
    /// More than a quarter of the section changed.
    High,
    /// Between 15% and 25% changed.
    Medium,
    /// 15% or less changed.
    Low,
}

impl NoveltyTier {
    /// Map a novelty score to a tier.
    ///
    /// Thresholds are strict inequalities, matching the backend classifier:
    /// a score of exactly `0.25` or `0.15` falls into the lower tier. The
    /// rule is applied without range checks; `NaN` and negative scores fall
    /// through to [`NoveltyTier::Low`] because `NaN > x` is false.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_difflens::novelty::NoveltyTier;
    ///
    /// assert_eq!(NoveltyTier::from_score(1.0), NoveltyTier::High);
    /// assert_eq!(NoveltyTier::from_score(0.0), NoveltyTier::Low);
    /// assert_eq!(NoveltyTier::from_score(f64::NAN), NoveltyTier::Low);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score > 0.25 {
            NoveltyTier::High
        } else if score > 0.15 {
            NoveltyTier::Medium
        } else {
            NoveltyTier::Low
        }
    }

    /// Translation key for the tier's badge label.
    pub fn label_key(self) -> &'static str {
        match self {
            NoveltyTier::High => "diff.high_change",
            NoveltyTier::Medium => "diff.medium_change",
            NoveltyTier::Low => "diff.low_change",
        }
    }

    /// Translation key for the tier's beginner-mode summary paragraph.
    pub fn summary_key(self) -> &'static str {
        match self {
            NoveltyTier::High => "diff.summary_high",
            NoveltyTier::Medium => "diff.summary_medium",
            NoveltyTier::Low => "diff.summary_low",
        }
    }

    /// Emoji shown next to the beginner-mode summary title.
    pub fn emoji(self) -> &'static str {
        match self {
            NoveltyTier::High => "\u{26a0}\u{fe0f}",
            NoveltyTier::Medium => "\u{1f4dd}",
            NoveltyTier::Low => "\u{2705}",
        }
    }

    /// ANSI color code for the tier badge.
    pub fn ansi_color(self) -> &'static str {
        match self {
            NoveltyTier::High => "\x1b[31m",
            NoveltyTier::Medium => "\x1b[33m",
            NoveltyTier::Low => "\x1b[32m",
        }
    }
}

impl fmt::Display for NoveltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoveltyTier::High => write!(f, "high"),
            NoveltyTier::Medium => write!(f, "medium"),
            NoveltyTier::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_exclusive() {
        assert_eq!(NoveltyTier::from_score(0.30), NoveltyTier::High);
        assert_eq!(NoveltyTier::from_score(0.25), NoveltyTier::Medium);
        assert_eq!(NoveltyTier::from_score(0.16), NoveltyTier::Medium);
        assert_eq!(NoveltyTier::from_score(0.15), NoveltyTier::Low);
        assert_eq!(NoveltyTier::from_score(0.10), NoveltyTier::Low);
    }

    #[test]
    fn extremes() {
        assert_eq!(NoveltyTier::from_score(1.0), NoveltyTier::High);
        assert_eq!(NoveltyTier::from_score(0.0), NoveltyTier::Low);
    }

    #[test]
    fn out_of_range_scores_do_not_fail() {
        assert_eq!(NoveltyTier::from_score(17.5), NoveltyTier::High);
        assert_eq!(NoveltyTier::from_score(-0.3), NoveltyTier::Low);
    }

    #[test]
    fn nan_falls_through_to_low() {
        assert_eq!(NoveltyTier::from_score(f64::NAN), NoveltyTier::Low);
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&NoveltyTier::High).unwrap(), "\"high\"");
        let parsed: NoveltyTier = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, NoveltyTier::Medium);
    }

    #[test]
    fn display_matches_serde() {
        assert_eq!(NoveltyTier::High.to_string(), "high");
        assert_eq!(NoveltyTier::Medium.to_string(), "medium");
        assert_eq!(NoveltyTier::Low.to_string(), "low");
    }
}
