use std::fmt;

use alpha_core::{FilingDiff, Language};
use alpha_i18n::{translate, translate_with};
use serde::Serialize;

use crate::novelty::NoveltyTier;
use crate::parser::{parse_diff_lines, DiffLine, DiffLineKind};

const RESET: &str = "\x1b[0m";
const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

/// A filing diff prepared for display: classified lines plus change stats.
///
/// # Examples
///
/// ```
/// use alpha_core::FilingDiff;
/// use alpha_difflens::novelty::NoveltyTier;
/// use alpha_difflens::report::DiffReport;
///
/// let diff = FilingDiff {
///     id: 1,
///     section_key: "item_1a".into(),
///     prev_filing_id: 2,
///     curr_filing_id: 1,
///     diff_text: "-old\n+new".into(),
///     novelty_score: 0.194,
///     added_ratio: Some(0.08),
///     removed_ratio: Some(0.02),
///     prev_filing_date: None,
///     curr_filing_date: None,
/// };
/// let report = DiffReport::from_diff(&diff);
/// assert_eq!(report.tier, NoveltyTier::Medium);
/// assert_eq!(report.lines.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    /// Section the diff covers.
    pub section_key: String,
    /// Fraction of the section that changed.
    pub novelty_score: f64,
    /// Severity tier derived from the score.
    pub tier: NoveltyTier,
    /// Fraction of lines added, if reported.
    pub added_ratio: Option<f64>,
    /// Fraction of lines removed, if reported.
    pub removed_ratio: Option<f64>,
    /// Classified diff lines in input order.
    pub lines: Vec<DiffLine>,
}

impl DiffReport {
    /// Build a report from a backend filing diff.
    pub fn from_diff(diff: &FilingDiff) -> Self {
        Self {
            section_key: diff.section_key.clone(),
            novelty_score: diff.novelty_score,
            tier: NoveltyTier::from_score(diff.novelty_score),
            added_ratio: diff.added_ratio,
            removed_ratio: diff.removed_ratio,
            lines: parse_diff_lines(&diff.diff_text),
        }
    }

    /// One-line stats bar: added/removed percentages and the novelty badge.
    ///
    /// Missing ratios render as the localized `N/A`.
    pub fn stats_line(&self, language: Language) -> String {
        let added = pct1(self.added_ratio, language);
        let removed = pct1(self.removed_ratio, language);
        let novelty = format!("{:.1}", self.novelty_score * 100.0);
        format!(
            "+{added}% {}  -{removed}% {}  |  {novelty}% {} ({})",
            translate("diff.added", language),
            translate("diff.removed", language),
            translate("diff.novelty", language),
            translate(self.tier.label_key(), language),
        )
    }

    /// Beginner-mode summary: a plain-language paragraph instead of the diff.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_core::{FilingDiff, Language};
    /// use alpha_difflens::report::DiffReport;
    ///
    /// let diff = FilingDiff {
    ///     id: 1,
    ///     section_key: "item_1a".into(),
    ///     prev_filing_id: 2,
    ///     curr_filing_id: 1,
    ///     diff_text: String::new(),
    ///     novelty_score: 0.08,
    ///     added_ratio: None,
    ///     removed_ratio: None,
    ///     prev_filing_date: None,
    ///     curr_filing_date: None,
    /// };
    /// let summary = DiffReport::from_diff(&diff).beginner_summary(Language::En);
    /// assert!(summary.contains("Only 8% change"));
    /// ```
    pub fn beginner_summary(&self, language: Language) -> String {
        let pct = format!("{:.0}", self.novelty_score * 100.0);
        let title = translate(self.tier.label_key(), language);
        let description = translate_with(self.tier.summary_key(), language, &[("pct", pct)]);
        format!(
            "{} {title}\n{description}\n\nSection: {}\n",
            self.tier.emoji(),
            self.section_key
        )
    }

    /// Render the full analyst view: stats bar plus classified lines.
    ///
    /// At most `max_lines` diff lines are printed; the rest are summarized
    /// in a trailing count.
    pub fn render_text(&self, language: Language, use_color: bool, max_lines: usize) -> String {
        let mut out = String::new();
        out.push_str(&self.stats_line(language));
        out.push('\n');
        out.push_str(&"-".repeat(60));
        out.push('\n');

        if self.lines.is_empty() {
            out.push_str(&translate("diff.select_diff", language));
            out.push('\n');
            return out;
        }

        for line in self.lines.iter().take(max_lines) {
            let (marker, color) = match line.kind {
                DiffLineKind::Added => ("+", GREEN),
                DiffLineKind::Removed => ("-", RED),
                DiffLineKind::Header => (" ", BLUE),
                DiffLineKind::Context => (" ", ""),
            };
            if use_color && !color.is_empty() {
                out.push_str(&format!("{color}{marker} {}{RESET}\n", line.text));
            } else {
                out.push_str(&format!("{marker} {}\n", line.text));
            }
        }

        if self.lines.len() > max_lines {
            out.push_str(&format!("... ({} more lines)\n", self.lines.len() - max_lines));
        }
        out
    }

    /// Render the report as a markdown string with a `diff` code fence.
    ///
    /// # Examples
    ///
    /// ```
    /// use alpha_core::{FilingDiff, Language};
    /// use alpha_difflens::report::DiffReport;
    ///
    /// let diff = FilingDiff {
    ///     id: 1,
    ///     section_key: "item_7".into(),
    ///     prev_filing_id: 2,
    ///     curr_filing_id: 1,
    ///     diff_text: "+growth".into(),
    ///     novelty_score: 0.156,
    ///     added_ratio: Some(0.05),
    ///     removed_ratio: Some(0.01),
    ///     prev_filing_date: None,
    ///     curr_filing_date: None,
    /// };
    /// let md = DiffReport::from_diff(&diff).to_markdown(Language::En);
    /// assert!(md.contains("## item_7"));
    /// assert!(md.contains("```diff"));
    /// ```
    pub fn to_markdown(&self, language: Language) -> String {
        let mut out = String::new();
        out.push_str(&format!("## {}\n\n", self.section_key));
        out.push_str(&format!("**{}**\n\n", self.stats_line(language)));

        if !self.lines.is_empty() {
            out.push_str("```diff\n");
            for line in &self.lines {
                match line.kind {
                    DiffLineKind::Added => out.push_str(&format!("+{}\n", line.text)),
                    DiffLineKind::Removed => out.push_str(&format!("-{}\n", line.text)),
                    DiffLineKind::Context => out.push_str(&format!(" {}\n", line.text)),
                    DiffLineKind::Header => out.push_str(&format!("{}\n", line.text)),
                }
            }
            out.push_str("```\n");
        }
        out
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_text(Language::En, false, usize::MAX))
    }
}

fn pct1(ratio: Option<f64>, language: Language) -> String {
    match ratio {
        Some(r) => format!("{:.1}", r * 100.0),
        None => translate("common.na", language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_diff() -> FilingDiff {
        FilingDiff {
            id: 1,
            section_key: "item_1a".into(),
            prev_filing_id: 2,
            curr_filing_id: 1,
            diff_text: "--- Previous Filing\n+++ Current Filing\n@@ -1,3 +1,4 @@\n RISK FACTORS\n-Our business faces competition.\n+Our business faces intense competition.\n+New export restrictions may impact revenue.".into(),
            novelty_score: 0.194,
            added_ratio: Some(0.08),
            removed_ratio: Some(0.02),
            prev_filing_date: None,
            curr_filing_date: None,
        }
    }

    #[test]
    fn report_classifies_tier_and_lines() {
        let report = DiffReport::from_diff(&sample_diff());
        assert_eq!(report.tier, NoveltyTier::Medium);
        assert_eq!(report.lines.len(), 7);
        assert_eq!(report.lines[0].kind, DiffLineKind::Header);
        assert_eq!(report.lines[4].kind, DiffLineKind::Removed);
    }

    #[test]
    fn stats_line_formats_percentages() {
        let report = DiffReport::from_diff(&sample_diff());
        let stats = report.stats_line(Language::En);
        assert!(stats.contains("+8.0% Added"));
        assert!(stats.contains("-2.0% Removed"));
        assert!(stats.contains("19.4% Novel"));
        assert!(stats.contains("Medium Change"));
    }

    #[test]
    fn missing_ratios_render_as_na() {
        let mut diff = sample_diff();
        diff.added_ratio = None;
        diff.removed_ratio = None;
        let stats = DiffReport::from_diff(&diff).stats_line(Language::En);
        assert!(stats.contains("+N/A%"));
        assert!(stats.contains("-N/A%"));
    }

    #[test]
    fn beginner_summary_localizes() {
        let report = DiffReport::from_diff(&sample_diff());

        let en = report.beginner_summary(Language::En);
        assert!(en.contains("Medium Change"));
        assert!(en.contains("19% change detected"));
        assert!(en.contains("Section: item_1a"));

        let zh = report.beginner_summary(Language::Zh);
        assert!(zh.contains("中等變化"));
        assert!(zh.contains("19%"));
    }

    #[test]
    fn text_output_truncates_long_diffs() {
        let report = DiffReport::from_diff(&sample_diff());
        let text = report.render_text(Language::En, false, 3);
        assert!(text.contains("... (4 more lines)"));
    }

    #[test]
    fn text_output_without_color_has_no_escapes() {
        let report = DiffReport::from_diff(&sample_diff());
        let text = report.render_text(Language::En, false, usize::MAX);
        assert!(!text.contains("\x1b["));
        assert!(text.contains("+ Our business faces intense competition."));
    }

    #[test]
    fn colored_output_marks_added_lines_green() {
        let report = DiffReport::from_diff(&sample_diff());
        let text = report.render_text(Language::En, true, usize::MAX);
        assert!(text.contains("\x1b[32m+"));
    }

    #[test]
    fn empty_diff_shows_placeholder() {
        let mut diff = sample_diff();
        diff.diff_text = String::new();
        let report = DiffReport::from_diff(&diff);
        let text = report.render_text(Language::En, false, usize::MAX);
        assert!(text.contains("Select a diff to view"));
    }

    #[test]
    fn markdown_reconstructs_diff_fence() {
        let report = DiffReport::from_diff(&sample_diff());
        let md = report.to_markdown(Language::En);
        assert!(md.contains("## item_1a"));
        assert!(md.contains("```diff"));
        assert!(md.contains("+Our business faces intense competition."));
        assert!(md.contains("-Our business faces competition."));
        assert!(md.contains("@@ -1,3 +1,4 @@"));
    }

    #[test]
    fn report_serializes_tier_lowercase() {
        let report = DiffReport::from_diff(&sample_diff());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tier"], "medium");
        assert_eq!(json["section_key"], "item_1a");
        assert!(json["lines"].as_array().unwrap().len() > 0);
    }
}
