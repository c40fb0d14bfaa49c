//! Fixture dataset standing in for the filing backend.
//!
//! The backend API is not built yet; [`Catalog::mock`] loads a fixed dataset
//! of companies, filings, section diffs, fundamentals, and investment tips so
//! the client has something real to render. The catalog surface is read-only
//! and shaped like the eventual API: lookups by ticker, empty results for
//! unknown tickers, no errors.

mod catalog;
mod fixtures;

pub use catalog::Catalog;
