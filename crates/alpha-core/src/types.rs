use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A tracked company with basic filing metadata.
///
/// # Examples
///
/// ```
/// use alpha_core::Company;
///
/// let company = Company {
///     id: 1,
///     ticker: "NVDA".into(),
///     cik: "0001045810".into(),
///     name: "NVIDIA Corporation".into(),
///     latest_filing_date: None,
///     filing_count: 5,
/// };
/// assert_eq!(company.ticker, "NVDA");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Backend identifier.
    pub id: u32,
    /// Exchange ticker symbol, uppercase.
    pub ticker: String,
    /// SEC Central Index Key, zero-padded to 10 digits.
    pub cik: String,
    /// Registered company name.
    pub name: String,
    /// Date of the most recent filing, if any.
    pub latest_filing_date: Option<NaiveDate>,
    /// Number of filings on record.
    pub filing_count: u32,
}

/// A named subdivision of a filing (e.g. `item_1a` for Risk Factors).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingSection {
    /// Backend identifier.
    pub id: u32,
    /// Section key (e.g. `item_1a`, `item_7`).
    pub section_key: String,
    /// Length of the cleaned section text in characters.
    pub char_count: u64,
    /// Cleaned section text, omitted in list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_clean: Option<String>,
}

/// SEC form type of a filing.
///
/// # Examples
///
/// ```
/// use alpha_core::FormType;
///
/// let ft: FormType = "10-K".parse().unwrap();
/// assert_eq!(ft, FormType::TenK);
/// assert_eq!(ft.to_string(), "10-K");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormType {
    /// Annual report.
    #[serde(rename = "10-K")]
    TenK,
    /// Quarterly report.
    #[serde(rename = "10-Q")]
    TenQ,
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormType::TenK => write!(f, "10-K"),
            FormType::TenQ => write!(f, "10-Q"),
        }
    }
}

impl FromStr for FormType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "10-K" => Ok(FormType::TenK),
            "10-Q" => Ok(FormType::TenQ),
            other => Err(format!("unknown form type: {other}")),
        }
    }
}

/// A single SEC filing with its extracted sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filing {
    /// Backend identifier.
    pub id: u32,
    /// Identifier of the filing company.
    pub company_id: u32,
    /// SEC accession number.
    pub accession_no: String,
    /// Form type (10-K or 10-Q).
    pub form_type: FormType,
    /// Date the filing was submitted to EDGAR.
    pub filing_date: NaiveDate,
    /// Period the filing reports on.
    pub report_date: NaiveDate,
    /// URL of the primary document on sec.gov.
    pub primary_doc_url: String,
    /// Extracted sections.
    pub sections: Vec<FilingSection>,
}

/// A pre-computed diff for one filing section between two reporting periods.
///
/// The diff itself is computed by the backend; clients only render and
/// classify it. `diff_text` follows unified-diff conventions with
/// `+++`/`---`/`@@` headers and `+`/`-` line prefixes.
///
/// # Examples
///
/// ```
/// use alpha_core::FilingDiff;
///
/// let diff = FilingDiff {
///     id: 1,
///     section_key: "item_1a".into(),
///     prev_filing_id: 2,
///     curr_filing_id: 1,
///     diff_text: "+added line".into(),
///     novelty_score: 0.194,
///     added_ratio: Some(0.08),
///     removed_ratio: Some(0.02),
///     prev_filing_date: None,
///     curr_filing_date: None,
/// };
/// assert!(diff.novelty_score < 0.25);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingDiff {
    /// Backend identifier.
    pub id: u32,
    /// Section this diff covers.
    pub section_key: String,
    /// Identifier of the earlier filing.
    pub prev_filing_id: u32,
    /// Identifier of the later filing.
    pub curr_filing_id: u32,
    /// Raw unified-diff body.
    pub diff_text: String,
    /// Fraction of the section that changed, in `[0, 1]`.
    pub novelty_score: f64,
    /// Fraction of lines added, in `[0, 1]`.
    pub added_ratio: Option<f64>,
    /// Fraction of lines removed, in `[0, 1]`.
    pub removed_ratio: Option<f64>,
    /// Filing date of the earlier filing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_filing_date: Option<NaiveDate>,
    /// Filing date of the later filing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curr_filing_date: Option<NaiveDate>,
}

/// Point-in-time fundamental values for a company.
///
/// All fields are optional: the backend omits values it could not extract
/// from the filing's XBRL data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureValues {
    /// Total revenues, USD.
    pub revenues: Option<f64>,
    /// Net income or loss, USD.
    pub net_income_loss: Option<f64>,
    /// Total assets, USD.
    pub assets: Option<f64>,
    /// Total liabilities, USD.
    pub liabilities: Option<f64>,
    /// Liabilities over assets.
    pub leverage: Option<f64>,
    /// Net income over revenues.
    pub profitability: Option<f64>,
    /// Year-over-year revenue growth.
    pub yoy_growth_revenues: Option<f64>,
    /// Novelty score of the Risk Factors section.
    pub novelty_score_item_1a: Option<f64>,
    /// Novelty score of the MD&A section.
    pub novelty_score_mda: Option<f64>,
    /// Combined alpha signal.
    pub composite_signal: Option<f64>,
}

/// A dated feature snapshot for a company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Backend identifier.
    pub id: u32,
    /// Identifier of the company.
    pub company_id: u32,
    /// As-of date of the snapshot.
    pub asof_date: NaiveDate,
    /// Fiscal period label (e.g. `Q3 FY2025`).
    pub fiscal_period: String,
    /// Extracted fundamental values.
    #[serde(rename = "feature_json")]
    pub values: FeatureValues,
}

/// Audience level of an investment tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLevel {
    /// Plain-language explanation.
    Beginner,
    /// Assumes familiarity with filings.
    Intermediate,
    /// Assumes detailed accounting knowledge.
    Advanced,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLevel::Beginner => write!(f, "Beginner"),
            ComplexityLevel::Intermediate => write!(f, "Intermediate"),
            ComplexityLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Directional slant of an investment tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    /// Something that could hurt the position.
    Risk,
    /// Something that could help the position.
    Opportunity,
    /// Neither direction.
    Neutral,
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipCategory::Risk => write!(f, "risk"),
            TipCategory::Opportunity => write!(f, "opportunity"),
            TipCategory::Neutral => write!(f, "neutral"),
        }
    }
}

/// A generated investment insight tied to a filing change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentTip {
    /// Stable tip identifier.
    pub id: String,
    /// Ticker the tip applies to.
    pub ticker: String,
    /// Directional slant.
    pub category: TipCategory,
    /// English explanation.
    pub explanation_en: String,
    /// Chinese explanation.
    pub explanation_zh: String,
    /// Audience level.
    pub complexity_level: ComplexityLevel,
    /// When the tip was generated.
    pub generated_at: DateTime<Utc>,
    /// Model confidence in `[0, 1]`.
    pub confidence_score: f64,
}

/// How often a backtest rebalances its portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebalanceFreq {
    /// Rebalance every month.
    Monthly,
    /// Rebalance every quarter.
    Quarterly,
    /// Rebalance once a year.
    Annually,
}

impl fmt::Display for RebalanceFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebalanceFreq::Monthly => write!(f, "monthly"),
            RebalanceFreq::Quarterly => write!(f, "quarterly"),
            RebalanceFreq::Annually => write!(f, "annually"),
        }
    }
}

impl FromStr for RebalanceFreq {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(RebalanceFreq::Monthly),
            "quarterly" => Ok(RebalanceFreq::Quarterly),
            "annually" => Ok(RebalanceFreq::Annually),
            other => Err(format!("unknown rebalance frequency: {other}")),
        }
    }
}

/// Parameters for a backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Universe of tickers to trade.
    pub tickers: Vec<String>,
    /// First trading day.
    pub start_date: NaiveDate,
    /// Last trading day.
    pub end_date: NaiveDate,
    /// Rebalance cadence.
    pub rebalance_freq: RebalanceFreq,
    /// Round-trip transaction cost in basis points.
    pub transaction_cost_bps: f64,
}

/// Performance metrics of a backtest run.
///
/// Every field is optional so the API can return partial results for runs
/// that failed mid-way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BacktestMetrics {
    /// Compound annual growth rate.
    pub cagr: Option<f64>,
    /// Annualized Sharpe ratio.
    pub sharpe: Option<f64>,
    /// Worst peak-to-trough drawdown (negative).
    pub max_drawdown: Option<f64>,
    /// Annualized volatility.
    pub volatility: Option<f64>,
    /// Annualized portfolio turnover.
    pub turnover: Option<f64>,
    /// Fraction of winning trades.
    pub hit_rate: Option<f64>,
    /// Total return over the full period.
    pub total_return: Option<f64>,
    /// Number of trades executed.
    pub num_trades: Option<u32>,
}

/// One point on a backtest equity curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Trading day.
    pub date: NaiveDate,
    /// Portfolio value, normalized to 1.0 at start.
    pub equity: f64,
}

/// A completed backtest with its configuration and results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestRun {
    /// Stable run identifier.
    pub run_id: String,
    /// Parameters the run used.
    pub config: BacktestConfig,
    /// Performance results.
    pub metrics: BacktestMetrics,
    /// Portfolio value over time.
    pub equity_curve: Vec<EquityPoint>,
    /// When the run finished.
    pub created_at: DateTime<Utc>,
}

/// Output format for CLI subcommands.
///
/// Implements [`FromStr`] so it can be used directly with `clap` argument parsing.
///
/// # Examples
///
/// ```
/// use alpha_core::OutputFormat;
///
/// let fmt: OutputFormat = "json".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Json);
///
/// let fmt: OutputFormat = "md".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Markdown);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables and summaries.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
    /// Markdown-formatted output.
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "markdown".parse::<OutputFormat>().unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn form_type_roundtrips_through_json() {
        let json = serde_json::to_string(&FormType::TenK).unwrap();
        assert_eq!(json, "\"10-K\"");

        let parsed: FormType = serde_json::from_str("\"10-Q\"").unwrap();
        assert_eq!(parsed, FormType::TenQ);
    }

    #[test]
    fn form_type_from_str_is_case_insensitive() {
        assert_eq!("10-k".parse::<FormType>().unwrap(), FormType::TenK);
        assert_eq!("10-Q".parse::<FormType>().unwrap(), FormType::TenQ);
        assert!("8-K".parse::<FormType>().is_err());
    }

    #[test]
    fn tip_category_serializes_lowercase() {
        let json = serde_json::to_string(&TipCategory::Opportunity).unwrap();
        assert_eq!(json, "\"opportunity\"");
    }

    #[test]
    fn complexity_level_serializes_capitalized() {
        // The backend stores complexity levels capitalized.
        let json = serde_json::to_string(&ComplexityLevel::Beginner).unwrap();
        assert_eq!(json, "\"Beginner\"");
        let parsed: ComplexityLevel = serde_json::from_str("\"Advanced\"").unwrap();
        assert_eq!(parsed, ComplexityLevel::Advanced);
    }

    #[test]
    fn feature_values_field_renamed_in_json() {
        let feature = Feature {
            id: 1,
            company_id: 1,
            asof_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            fiscal_period: "Q3 FY2025".into(),
            values: FeatureValues::default(),
        };
        let json = serde_json::to_value(&feature).unwrap();
        assert!(json.get("feature_json").is_some());
        assert!(json.get("values").is_none());
    }

    #[test]
    fn filing_diff_deserializes_from_backend_shape() {
        let json = r#"{
            "id": 1,
            "section_key": "item_1a",
            "prev_filing_id": 2,
            "curr_filing_id": 1,
            "diff_text": "+line",
            "novelty_score": 0.194,
            "added_ratio": 0.08,
            "removed_ratio": 0.02
        }"#;
        let diff: FilingDiff = serde_json::from_str(json).unwrap();
        assert_eq!(diff.section_key, "item_1a");
        assert_eq!(diff.added_ratio, Some(0.08));
        assert!(diff.prev_filing_date.is_none());
    }

    #[test]
    fn rebalance_freq_from_str() {
        assert_eq!(
            "quarterly".parse::<RebalanceFreq>().unwrap(),
            RebalanceFreq::Quarterly
        );
        assert!("weekly".parse::<RebalanceFreq>().is_err());
    }
}
