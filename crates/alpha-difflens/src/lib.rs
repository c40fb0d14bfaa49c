//! Diff-line classification and novelty scoring for filing diffs.
//!
//! The backend computes unified diffs between filing periods; this crate only
//! classifies and renders them. [`parser::parse_diff_lines`] turns a raw diff
//! string into typed lines, and [`novelty::NoveltyTier`] buckets a novelty
//! score into a severity tier for display.

pub mod novelty;
pub mod parser;
pub mod report;
