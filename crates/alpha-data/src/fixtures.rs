//! Hand-carried mock data, matching the mobile client's fixtures.

use alpha_core::{
    Company, ComplexityLevel, Feature, FeatureValues, Filing, FilingDiff, FilingSection, FormType,
    InvestmentTip, TipCategory,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn timestamp(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub fn companies() -> Vec<Company> {
    let rows: &[(u32, &str, &str, &str, (i32, u32, u32))] = &[
        (1, "NVDA", "0001045810", "NVIDIA Corporation", (2025, 1, 15)),
        (
            2,
            "TSM",
            "0001046179",
            "Taiwan Semiconductor Manufacturing",
            (2025, 1, 14),
        ),
        (3, "META", "0001326801", "Meta Platforms, Inc.", (2025, 1, 13)),
        (4, "GOOG", "0001652044", "Alphabet Inc.", (2025, 1, 12)),
        (5, "FTNT", "0001262039", "Fortinet, Inc.", (2025, 1, 11)),
        (6, "SOFI", "0001818874", "SoFi Technologies, Inc.", (2025, 1, 10)),
        (7, "KO", "0000021344", "The Coca-Cola Company", (2025, 1, 9)),
    ];

    rows.iter()
        .map(|(id, ticker, cik, name, (y, m, d))| Company {
            id: *id,
            ticker: (*ticker).into(),
            cik: (*cik).into(),
            name: (*name).into(),
            latest_filing_date: Some(date(*y, *m, *d)),
            filing_count: 5,
        })
        .collect()
}

pub fn filings() -> Vec<(String, Vec<Filing>)> {
    vec![(
        "NVDA".into(),
        vec![
            Filing {
                id: 1,
                company_id: 1,
                accession_no: "0001045810-25-000230".into(),
                form_type: FormType::TenQ,
                filing_date: date(2025, 1, 15),
                report_date: date(2024, 10, 27),
                primary_doc_url: "https://www.sec.gov/Archives/edgar/data/1045810/...".into(),
                sections: vec![
                    FilingSection {
                        id: 1,
                        section_key: "item_1a".into(),
                        char_count: 45000,
                        text_clean: None,
                    },
                    FilingSection {
                        id: 2,
                        section_key: "item_2".into(),
                        char_count: 32000,
                        text_clean: None,
                    },
                ],
            },
            Filing {
                id: 2,
                company_id: 1,
                accession_no: "0001045810-24-000180".into(),
                form_type: FormType::TenK,
                filing_date: date(2024, 2, 21),
                report_date: date(2024, 1, 28),
                primary_doc_url: "https://www.sec.gov/Archives/edgar/data/1045810/...".into(),
                sections: vec![
                    FilingSection {
                        id: 3,
                        section_key: "item_1a".into(),
                        char_count: 52000,
                        text_clean: None,
                    },
                    FilingSection {
                        id: 4,
                        section_key: "item_7".into(),
                        char_count: 48000,
                        text_clean: None,
                    },
                ],
            },
        ],
    )]
}

pub fn diffs() -> Vec<(String, Vec<FilingDiff>)> {
    let item_1a = "\
--- Previous Filing
+++ Current Filing
@@ -1,5 +1,6 @@
 RISK FACTORS

 Investing in our securities involves risk.
-Our business faces competition.
+Our business faces intense competition, particularly in AI chips.
+New export restrictions may impact our China revenue.
 Market conditions affect demand.";

    let item_7 = "\
--- Previous Filing
+++ Current Filing
@@ -10,4 +10,5 @@
 Management's Discussion

 Revenue increased driven by data center demand.
+AI-related revenue grew 150% year-over-year.
 Operating expenses remained controlled.";

    vec![(
        "NVDA".into(),
        vec![
            FilingDiff {
                id: 1,
                section_key: "item_1a".into(),
                prev_filing_id: 2,
                curr_filing_id: 1,
                diff_text: item_1a.into(),
                novelty_score: 0.194,
                added_ratio: Some(0.08),
                removed_ratio: Some(0.02),
                prev_filing_date: Some(date(2024, 2, 21)),
                curr_filing_date: Some(date(2025, 1, 15)),
            },
            FilingDiff {
                id: 2,
                section_key: "item_7".into(),
                prev_filing_id: 2,
                curr_filing_id: 1,
                diff_text: item_7.into(),
                novelty_score: 0.156,
                added_ratio: Some(0.05),
                removed_ratio: Some(0.01),
                prev_filing_date: Some(date(2024, 2, 21)),
                curr_filing_date: Some(date(2025, 1, 15)),
            },
        ],
    )]
}

pub fn features() -> Vec<(String, Vec<Feature>)> {
    vec![(
        "NVDA".into(),
        vec![
            Feature {
                id: 1,
                company_id: 1,
                asof_date: date(2025, 1, 15),
                fiscal_period: "Q3 FY2025".into(),
                values: FeatureValues {
                    revenues: Some(35_100_000_000.0),
                    net_income_loss: Some(19_300_000_000.0),
                    assets: Some(85_200_000_000.0),
                    liabilities: Some(27_800_000_000.0),
                    leverage: Some(0.326),
                    profitability: Some(0.55),
                    yoy_growth_revenues: Some(0.94),
                    novelty_score_item_1a: Some(0.194),
                    novelty_score_mda: Some(0.156),
                    composite_signal: Some(1.85),
                },
            },
            Feature {
                id: 2,
                company_id: 1,
                asof_date: date(2024, 10, 15),
                fiscal_period: "Q2 FY2025".into(),
                values: FeatureValues {
                    revenues: Some(30_000_000_000.0),
                    net_income_loss: Some(16_500_000_000.0),
                    assets: Some(78_000_000_000.0),
                    liabilities: Some(25_000_000_000.0),
                    leverage: Some(0.32),
                    profitability: Some(0.55),
                    yoy_growth_revenues: Some(1.22),
                    novelty_score_item_1a: Some(0.12),
                    novelty_score_mda: Some(0.10),
                    composite_signal: Some(2.1),
                },
            },
        ],
    )]
}

pub fn tips() -> Vec<InvestmentTip> {
    vec![
        InvestmentTip {
            id: "tip-nvda-1".into(),
            ticker: "NVDA".into(),
            category: TipCategory::Opportunity,
            explanation_en: "Risk factors section shows minimal changes (8% novelty), indicating stable business operations. Revenue growth language strengthened with AI demand mentions.".into(),
            explanation_zh: "風險因素部分變化極小（8% 新穎度），顯示業務運營穩定。營收增長語言因 AI 需求提及而加強。".into(),
            complexity_level: ComplexityLevel::Beginner,
            generated_at: timestamp(2025, 1, 15, 10),
            confidence_score: 0.85,
        },
        InvestmentTip {
            id: "tip-nvda-2".into(),
            ticker: "NVDA".into(),
            category: TipCategory::Risk,
            explanation_en: "New risk factor added regarding export restrictions to China. This could impact ~20% of revenue based on geographic segment data.".into(),
            explanation_zh: "新增對中國出口限制的風險因素。根據地理分部數據，這可能影響約 20% 的營收。".into(),
            complexity_level: ComplexityLevel::Intermediate,
            generated_at: timestamp(2025, 1, 15, 10),
            confidence_score: 0.78,
        },
        InvestmentTip {
            id: "tip-tsm-1".into(),
            ticker: "TSM".into(),
            category: TipCategory::Neutral,
            explanation_en: "MD&A section shows standard seasonal patterns. Capital expenditure guidance maintained at previous levels.".into(),
            explanation_zh: "MD&A 部分顯示標準季節性模式。資本支出指引維持在先前水平。".into(),
            complexity_level: ComplexityLevel::Beginner,
            generated_at: timestamp(2025, 1, 14, 8),
            confidence_score: 0.72,
        },
        InvestmentTip {
            id: "tip-meta-1".into(),
            ticker: "META".into(),
            category: TipCategory::Opportunity,
            explanation_en: "Significant reduction in risk language around metaverse investments. Operating efficiency improvements highlighted in MD&A.".into(),
            explanation_zh: "元宇宙投資相關風險語言大幅減少。MD&A 中強調運營效率改善。".into(),
            complexity_level: ComplexityLevel::Intermediate,
            generated_at: timestamp(2025, 1, 13, 14),
            confidence_score: 0.81,
        },
        InvestmentTip {
            id: "tip-goog-1".into(),
            ticker: "GOOG".into(),
            category: TipCategory::Risk,
            explanation_en: "New antitrust risk factors added (25% section increase). Legal expense provisions increased in footnotes.".into(),
            explanation_zh: "新增反壟斷風險因素（部分增加 25%）。註腳中法律費用準備金增加。".into(),
            complexity_level: ComplexityLevel::Advanced,
            generated_at: timestamp(2025, 1, 12, 16),
            confidence_score: 0.88,
        },
        InvestmentTip {
            id: "tip-ko-1".into(),
            ticker: "KO".into(),
            category: TipCategory::Neutral,
            explanation_en: "Standard filing with minimal changes. Dividend language remains consistent. Supply chain risks unchanged from prior quarter.".into(),
            explanation_zh: "標準文件，變化極小。股息語言保持一致。供應鏈風險與上季度相比未變。".into(),
            complexity_level: ComplexityLevel::Beginner,
            generated_at: timestamp(2025, 1, 11, 9),
            confidence_score: 0.65,
        },
        InvestmentTip {
            id: "tip-sofi-1".into(),
            ticker: "SOFI".into(),
            category: TipCategory::Opportunity,
            explanation_en: "Bank charter benefits now reflected in improved NIM language. Member growth metrics show acceleration.".into(),
            explanation_zh: "銀行牌照優勢現已反映在改善的淨息差語言中。會員增長指標顯示加速。".into(),
            complexity_level: ComplexityLevel::Intermediate,
            generated_at: timestamp(2025, 1, 10, 11),
            confidence_score: 0.76,
        },
        InvestmentTip {
            id: "tip-ftnt-1".into(),
            ticker: "FTNT".into(),
            category: TipCategory::Risk,
            explanation_en: "Increased competition language in risk factors. Pricing pressure mentioned in MD&A for the first time.".into(),
            explanation_zh: "風險因素中競爭語言增加。MD&A 首次提及定價壓力。".into(),
            complexity_level: ComplexityLevel::Advanced,
            generated_at: timestamp(2025, 1, 9, 15),
            confidence_score: 0.73,
        },
    ]
}
