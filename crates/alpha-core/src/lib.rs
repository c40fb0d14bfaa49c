//! Core types, configuration, and error handling for Alpha Factory.
//!
//! This crate provides the shared foundation used by all other Alpha crates:
//! - [`AlphaError`] — unified error type using `thiserror`
//! - [`AlphaConfig`] — configuration loaded from `.alpha.toml`
//! - Domain types mirroring the backend schema: [`Company`], [`Filing`],
//!   [`FilingDiff`], [`Feature`], [`InvestmentTip`], [`BacktestRun`]
//! - Settings types: [`AppSettings`], [`ViewMode`], [`Language`]

mod config;
mod error;
mod settings;
mod types;

pub use config::{AlphaConfig, BacktestDefaults, DataConfig, DiffConfig};
pub use error::AlphaError;
pub use settings::{AppSettings, Language, ViewMode};
pub use types::{
    BacktestConfig, BacktestMetrics, BacktestRun, Company, ComplexityLevel, EquityPoint, Feature,
    FeatureValues, Filing, FilingDiff, FilingSection, FormType, InvestmentTip, OutputFormat,
    RebalanceFreq, TipCategory,
};

/// A convenience `Result` type for Alpha Factory operations.
pub type Result<T> = std::result::Result<T, AlphaError>;
