use std::collections::HashMap;

use alpha_core::{Company, Feature, Filing, FilingDiff, InvestmentTip};

use crate::fixtures;

/// Read-only catalog of filing data, keyed by ticker.
///
/// Lookups are case-insensitive and total: an unknown ticker yields an empty
/// collection rather than an error, matching the backend API contract.
///
/// # Examples
///
/// ```
/// use alpha_data::Catalog;
///
/// let catalog = Catalog::mock();
/// assert_eq!(catalog.companies().len(), 7);
/// assert_eq!(catalog.diffs("nvda").len(), 2);
/// assert!(catalog.diffs("ZZZZ").is_empty());
/// ```
pub struct Catalog {
    companies: Vec<Company>,
    filings: HashMap<String, Vec<Filing>>,
    diffs: HashMap<String, Vec<FilingDiff>>,
    features: HashMap<String, Vec<Feature>>,
    tips: Vec<InvestmentTip>,
}

impl Catalog {
    /// Load the fixture dataset.
    pub fn mock() -> Self {
        Self {
            companies: fixtures::companies(),
            filings: fixtures::filings().into_iter().collect(),
            diffs: fixtures::diffs().into_iter().collect(),
            features: fixtures::features().into_iter().collect(),
            tips: fixtures::tips(),
        }
    }

    /// All tracked companies.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Look up a company by ticker, case-insensitively.
    pub fn company(&self, ticker: &str) -> Option<&Company> {
        self.companies
            .iter()
            .find(|c| c.ticker.eq_ignore_ascii_case(ticker))
    }

    /// Filings for a ticker, newest first. Empty for unknown tickers.
    pub fn filings(&self, ticker: &str) -> &[Filing] {
        lookup(&self.filings, ticker)
    }

    /// Section diffs for a ticker. Empty for unknown tickers.
    pub fn diffs(&self, ticker: &str) -> &[FilingDiff] {
        lookup(&self.diffs, ticker)
    }

    /// Feature snapshots for a ticker, newest first. Empty for unknown tickers.
    pub fn features(&self, ticker: &str) -> &[Feature] {
        lookup(&self.features, ticker)
    }

    /// Investment tips for a ticker. Empty for unknown tickers.
    pub fn tips(&self, ticker: &str) -> Vec<&InvestmentTip> {
        self.tips
            .iter()
            .filter(|tip| tip.ticker.eq_ignore_ascii_case(ticker))
            .collect()
    }

    /// Total filings on record across all companies.
    pub fn total_filings(&self) -> u32 {
        self.companies.iter().map(|c| c.filing_count).sum()
    }
}

fn lookup<'a, T>(map: &'a HashMap<String, Vec<T>>, ticker: &str) -> &'a [T] {
    let key = ticker.trim().to_uppercase();
    map.get(&key).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_core::{FormType, TipCategory};

    #[test]
    fn catalog_has_seven_companies() {
        let catalog = Catalog::mock();
        assert_eq!(catalog.companies().len(), 7);
        assert_eq!(catalog.total_filings(), 35);
    }

    #[test]
    fn company_lookup_is_case_insensitive() {
        let catalog = Catalog::mock();
        let company = catalog.company("nvda").unwrap();
        assert_eq!(company.name, "NVIDIA Corporation");
        assert_eq!(company.cik, "0001045810");
        assert!(catalog.company("ZZZZ").is_none());
    }

    #[test]
    fn filings_have_sections() {
        let catalog = Catalog::mock();
        let filings = catalog.filings("NVDA");
        assert_eq!(filings.len(), 2);
        assert_eq!(filings[0].form_type, FormType::TenQ);
        assert_eq!(filings[1].form_type, FormType::TenK);
        assert_eq!(filings[0].sections.len(), 2);
        assert_eq!(filings[0].sections[0].section_key, "item_1a");
    }

    #[test]
    fn diffs_carry_unified_diff_bodies() {
        let catalog = Catalog::mock();
        let diffs = catalog.diffs("NVDA");
        assert_eq!(diffs.len(), 2);
        assert!(diffs[0].diff_text.contains("@@ -1,5 +1,6 @@"));
        assert_eq!(diffs[0].novelty_score, 0.194);
        assert_eq!(diffs[1].section_key, "item_7");
    }

    #[test]
    fn unknown_ticker_yields_empty_collections() {
        let catalog = Catalog::mock();
        assert!(catalog.filings("ZZZZ").is_empty());
        assert!(catalog.diffs("ZZZZ").is_empty());
        assert!(catalog.features("ZZZZ").is_empty());
        assert!(catalog.tips("ZZZZ").is_empty());
    }

    #[test]
    fn tips_filter_by_ticker() {
        let catalog = Catalog::mock();
        let tips = catalog.tips("nvda");
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].category, TipCategory::Opportunity);
        assert_eq!(tips[1].category, TipCategory::Risk);

        assert_eq!(catalog.tips("KO").len(), 1);
    }

    #[test]
    fn features_expose_novelty_scores() {
        let catalog = Catalog::mock();
        let features = catalog.features("NVDA");
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].fiscal_period, "Q3 FY2025");
        assert_eq!(features[0].values.novelty_score_item_1a, Some(0.194));
        assert_eq!(features[0].values.composite_signal, Some(1.85));
    }
}
