//! Aggregate reporting over classified records
//!
//! Builds per-group category counts and shares, and ranks groups and records
//! by severity.

pub mod age_band;
pub mod statistics;

pub use age_band::AgeBand;
pub use statistics::{
    GroupSummary, Grouping, ScreeningReport, by_age_band, by_country, by_region, by_sex,
    most_severe_records, overall, rank_most_at_risk, summarize, summarize_by,
};
