//! Static English/Chinese translation table.
//!
//! [`translate`] is a pure lookup from key and language to display string.
//! Every table row carries both languages, and unknown keys return the key
//! itself, so the function is total and callers never handle a missing
//! translation.

use alpha_core::Language;

/// `(key, english, chinese)` rows.
///
/// Chinese entries use Traditional characters, matching the mobile client.
const TABLE: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.companies", "Companies", "公司"),
    ("nav.backtest", "Backtest", "回測"),
    ("nav.settings", "Settings", "設定"),
    ("nav.dashboard", "Dashboard", "儀表板"),
    // Tabs
    ("tab.filings", "Filings", "文件"),
    ("tab.diffs", "Diffs", "差異"),
    ("tab.fundamentals", "Fundamentals", "基本面"),
    ("tab.tips", "Tips", "提示"),
    // Company screen
    ("company.filings_count", "{count} filings", "{count} 份文件"),
    ("company.diffs_count", "{count} diffs", "{count} 個差異"),
    ("company.quarters_count", "{count} quarters", "{count} 季度"),
    ("company.no_filings", "No filings found", "無文件"),
    ("company.no_diffs", "No diffs computed", "無差異分析"),
    ("company.no_features", "No features available", "無可用特徵"),
    ("company.view_on_sec", "View on SEC", "在SEC查看"),
    // Filing types
    ("filing.10k", "Annual Report", "年度報告"),
    ("filing.10q", "Quarterly Report", "季度報告"),
    ("filing.filed", "Filed", "提交日期"),
    ("filing.report_date", "Report", "報告日期"),
    ("filing.sections", "sections", "區塊"),
    ("filing.chars", "chars", "字符"),
    // Diff viewer
    ("diff.novelty", "Novel", "新穎度"),
    ("diff.added", "Added", "新增"),
    ("diff.removed", "Removed", "刪除"),
    ("diff.select_diff", "Select a diff to view", "選擇差異以查看"),
    ("diff.high_change", "High Change", "高變化"),
    ("diff.medium_change", "Medium Change", "中等變化"),
    ("diff.low_change", "Low Change", "低變化"),
    (
        "diff.summary_high",
        "{pct}% of this section has changed significantly. Worth a careful review.",
        "此部分有 {pct}% 的內容已變更，建議仔細閱讀。",
    ),
    (
        "diff.summary_medium",
        "{pct}% change detected. Normal quarterly/annual updates.",
        "此部分有 {pct}% 的變更，屬於正常更新範圍。",
    ),
    (
        "diff.summary_low",
        "Only {pct}% change. Content largely unchanged.",
        "僅 {pct}% 變更，內容基本保持不變。",
    ),
    // Fundamentals
    ("fundamental.revenue", "Revenue", "營收"),
    ("fundamental.net_income", "Net Income", "淨利潤"),
    ("fundamental.assets", "Assets", "資產"),
    ("fundamental.liabilities", "Liabilities", "負債"),
    ("fundamental.leverage", "Leverage", "槓桿率"),
    ("fundamental.profitability", "Profitability", "獲利能力"),
    ("fundamental.signal", "Composite Signal", "綜合信號"),
    ("fundamental.yoy_growth", "YoY Growth", "年增率"),
    // Investment tips
    ("tips.title", "Investment Insights", "投資見解"),
    ("tips.risk", "Risk Alert", "風險警示"),
    ("tips.opportunity", "Opportunity", "機會"),
    ("tips.neutral", "Neutral", "中性"),
    ("tips.confidence", "Confidence", "信心度"),
    ("tips.complexity", "Complexity", "複雜度"),
    (
        "tips.no_tips",
        "No insights available for this company",
        "此公司暫無投資見解",
    ),
    ("tips.beginner", "Beginner", "初學者"),
    ("tips.intermediate", "Intermediate", "中級"),
    ("tips.advanced", "Advanced", "進階"),
    // Settings
    ("settings.title", "Settings", "設定"),
    ("settings.view_mode", "View Mode", "顯示模式"),
    ("settings.language", "Language", "語言"),
    ("settings.english", "English", "English"),
    ("settings.chinese", "中文", "中文"),
    ("settings.notifications", "Notifications", "通知"),
    ("settings.about", "About", "關於"),
    // Dashboard
    ("dashboard.title", "Alpha Factory", "Alpha Factory"),
    ("dashboard.subtitle", "SEC Filing Analysis", "SEC文件分析"),
    ("dashboard.companies", "Companies", "公司"),
    ("dashboard.filings", "Total Filings", "總文件數"),
    ("dashboard.recent_backtests", "Recent Backtests", "最近回測"),
    ("dashboard.quick_start", "Quick Start", "快速開始"),
    // Backtest
    ("backtest.title", "Backtest", "回測"),
    ("backtest.run", "Run Backtest", "執行回測"),
    ("backtest.running", "Running...", "執行中..."),
    ("backtest.cagr", "CAGR", "年化報酬率"),
    ("backtest.sharpe", "Sharpe Ratio", "夏普比率"),
    ("backtest.max_dd", "Max Drawdown", "最大回撤"),
    ("backtest.hit_rate", "Hit Rate", "勝率"),
    // Common
    ("common.loading", "Loading...", "載入中..."),
    ("common.error", "Error", "錯誤"),
    ("common.retry", "Retry", "重試"),
    ("common.cancel", "Cancel", "取消"),
    ("common.save", "Save", "儲存"),
    ("common.na", "N/A", "無"),
    ("common.billion", "B", "十億"),
    ("common.million", "M", "百萬"),
];

/// Look up a translation.
///
/// Unknown keys return the key itself rather than failing.
///
/// # Examples
///
/// ```
/// use alpha_core::Language;
/// use alpha_i18n::translate;
///
/// assert_eq!(translate("diff.added", Language::En), "Added");
/// assert_eq!(translate("diff.added", Language::Zh), "新增");
/// assert_eq!(translate("no.such.key", Language::En), "no.such.key");
/// ```
pub fn translate(key: &str, language: Language) -> String {
    for (k, en, zh) in TABLE {
        if *k == key {
            return match language {
                Language::En => (*en).to_string(),
                Language::Zh => (*zh).to_string(),
            };
        }
    }
    key.to_string()
}

/// Look up a translation and interpolate `{name}` placeholders.
///
/// # Examples
///
/// ```
/// use alpha_core::Language;
/// use alpha_i18n::translate_with;
///
/// let text = translate_with("company.filings_count", Language::En, &[("count", "5".into())]);
/// assert_eq!(text, "5 filings");
/// ```
pub fn translate_with(key: &str, language: Language, params: &[(&str, String)]) -> String {
    let mut text = translate(key, language);
    for (name, value) in params {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_lookup() {
        assert_eq!(translate("nav.companies", Language::En), "Companies");
        assert_eq!(translate("backtest.sharpe", Language::En), "Sharpe Ratio");
    }

    #[test]
    fn chinese_lookup() {
        assert_eq!(translate("nav.companies", Language::Zh), "公司");
        assert_eq!(translate("diff.high_change", Language::Zh), "高變化");
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(translate("does.not.exist", Language::En), "does.not.exist");
        assert_eq!(translate("does.not.exist", Language::Zh), "does.not.exist");
    }

    #[test]
    fn interpolation_replaces_placeholders() {
        let text = translate_with("company.diffs_count", Language::Zh, &[("count", "3".into())]);
        assert_eq!(text, "3 個差異");
    }

    #[test]
    fn interpolation_ignores_missing_params() {
        let text = translate_with("company.filings_count", Language::En, &[]);
        assert_eq!(text, "{count} filings");
    }

    #[test]
    fn every_key_has_both_languages() {
        for (key, en, zh) in TABLE {
            assert!(!en.is_empty(), "missing en for {key}");
            assert!(!zh.is_empty(), "missing zh for {key}");
        }
    }

    #[test]
    fn no_duplicate_keys() {
        for (i, (key, _, _)) in TABLE.iter().enumerate() {
            for (other, _, _) in &TABLE[i + 1..] {
                assert_ne!(key, other, "duplicate key {key}");
            }
        }
    }
}
