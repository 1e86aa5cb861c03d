//! Screening statistics and summaries
//!
//! Counts and percentage shares of each nutritional category per group
//! (region, country, sex, age band). Every "most at risk" ordering compares
//! severity ranks, never category labels or insertion order.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use itertools::Itertools;
use serde::Serialize;

use super::age_band::AgeBand;
use crate::algorithm::nutrition::NutritionalCategory;
use crate::models::ChildRecord;

/// Group label for records without a region
pub const UNASSIGNED: &str = "Unassigned";

/// How records are grouped in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Region,
    Country,
    Sex,
    AgeBand,
}

impl Grouping {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::Country => "Country",
            Self::Sex => "Sex",
            Self::AgeBand => "Age Band",
        }
    }
}

/// Category counts for one group of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Group label
    pub group: String,
    /// Number of records in the group
    pub total: usize,
    /// Records per category, including zero counts
    pub counts: BTreeMap<NutritionalCategory, usize>,
    /// Most severe category present in the group
    pub most_severe: Option<NutritionalCategory>,
}

impl GroupSummary {
    fn empty(group: String) -> Self {
        Self {
            group,
            total: 0,
            counts: NutritionalCategory::ALL.iter().map(|c| (*c, 0)).collect(),
            most_severe: None,
        }
    }

    fn record(&mut self, category: NutritionalCategory) {
        self.total += 1;
        *self.counts.entry(category).or_insert(0) += 1;
        self.most_severe = self.most_severe.max(Some(category));
    }

    /// Number of records in a category
    #[must_use]
    pub fn count(&self, category: NutritionalCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Percentage of the group in a category; 0 for an empty group
    #[must_use]
    pub fn share(&self, category: NutritionalCategory) -> f64 {
        percentage(self.count(category), self.total)
    }

    /// Percentage of the group in either severe acute malnutrition tier
    #[must_use]
    pub fn severe_share(&self) -> f64 {
        let severe = NutritionalCategory::ALL
            .iter()
            .filter(|c| c.is_severe())
            .map(|c| self.count(*c))
            .sum();
        percentage(severe, self.total)
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

/// Summarize records grouped by a key; groups come out in key order
pub fn summarize_by<'a, I, K, F>(records: I, key_fn: F) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = &'a ChildRecord>,
    K: Ord + ToString,
    F: Fn(&ChildRecord) -> K,
{
    let mut groups: BTreeMap<K, GroupSummary> = BTreeMap::new();
    for record in records {
        let key = key_fn(record);
        groups
            .entry(key)
            .or_insert_with_key(|k| GroupSummary::empty(k.to_string()))
            .record(record.category());
    }
    groups.into_values().collect()
}

/// Summary over all records
pub fn overall<'a, I>(records: I) -> GroupSummary
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    let mut summary = GroupSummary::empty("All".to_string());
    for record in records {
        summary.record(record.category());
    }
    summary
}

/// Per-region summaries, labelled "Region, Country"
pub fn by_region<'a, I>(records: I) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    summarize_by(records, |r| {
        r.region()
            .map_or_else(|| UNASSIGNED.to_string(), ToString::to_string)
    })
}

/// Per-country summaries
pub fn by_country<'a, I>(records: I) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    summarize_by(records, |r| {
        r.region()
            .map_or_else(|| UNASSIGNED.to_string(), |region| region.country.clone())
    })
}

/// Per-sex summaries
pub fn by_sex<'a, I>(records: I) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    summarize_by(records, |r| r.measurement().sex())
}

/// Per-age-band summaries, youngest band first
pub fn by_age_band<'a, I>(records: I) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    summarize_by(records, |r| AgeBand::from_months(r.measurement().age_months()))
}

/// Group summaries for a grouping
pub fn summarize<'a, I>(records: I, grouping: Grouping) -> Vec<GroupSummary>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    match grouping {
        Grouping::Region => by_region(records),
        Grouping::Country => by_country(records),
        Grouping::Sex => by_sex(records),
        Grouping::AgeBand => by_age_band(records),
    }
}

/// Order groups from most to least at risk.
///
/// Groups are compared by the severity rank of their most severe category,
/// then by how many records fall in that category, then by name.
#[must_use]
pub fn rank_most_at_risk(groups: &[GroupSummary]) -> Vec<&GroupSummary> {
    groups
        .iter()
        .sorted_by(|a, b| {
            let worst_a = a.most_severe.map(|c| (c.severity_rank(), a.count(c)));
            let worst_b = b.most_severe.map(|c| (c.severity_rank(), b.count(c)));
            worst_b.cmp(&worst_a).then_with(|| a.group.cmp(&b.group))
        })
        .collect()
}

/// The `n` most severe records, ties kept in insertion order
pub fn most_severe_records<'a, I>(records: I, n: usize) -> Vec<&'a ChildRecord>
where
    I: IntoIterator<Item = &'a ChildRecord>,
{
    records
        .into_iter()
        .enumerate()
        .sorted_by_key(|(index, record)| (Reverse(record.classification().severity_rank), *index))
        .take(n)
        .map(|(_, record)| record)
        .collect()
}

/// Screening report: overall counts plus per-group breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningReport {
    /// Grouping label
    pub grouping: &'static str,
    /// Summary over every record
    pub overall: GroupSummary,
    /// Per-group summaries in key order
    pub groups: Vec<GroupSummary>,
}

impl ScreeningReport {
    /// Build a report over records for a grouping
    pub fn build<'a, I>(records: I, grouping: Grouping) -> Self
    where
        I: IntoIterator<Item = &'a ChildRecord> + Clone,
    {
        Self {
            grouping: grouping.label(),
            overall: overall(records.clone()),
            groups: summarize(records, grouping),
        }
    }

    /// Generate a human-readable summary
    #[must_use]
    pub fn render(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Nutritional Screening Summary:\n");
        let _ = writeln!(summary, "  Total Children: {}", self.overall.total);

        if self.overall.total == 0 {
            summary.push_str("  No records.\n");
            return summary;
        }

        summary.push_str("  Distribution by Category:\n");
        for category in NutritionalCategory::ALL.iter().rev() {
            let _ = writeln!(
                summary,
                "    {}: {} ({:.1}%)",
                category.label(),
                self.overall.count(*category),
                self.overall.share(*category)
            );
        }

        let _ = writeln!(summary, "\nBy {}:", self.grouping);
        for group in &self.groups {
            let breakdown = NutritionalCategory::ALL
                .iter()
                .rev()
                .filter(|c| group.count(**c) > 0)
                .map(|c| format!("{} {}", c.short_code(), group.count(*c)))
                .join(", ");
            let _ = writeln!(
                summary,
                "  {}: {} children, {:.1}% severe [{breakdown}]",
                group.group,
                group.total,
                group.severe_share()
            );
        }

        let _ = writeln!(summary, "\nMost At Risk:");
        for (position, group) in rank_most_at_risk(&self.groups).iter().enumerate() {
            if let Some(worst) = group.most_severe {
                let _ = writeln!(
                    summary,
                    "  {}. {} - {} ({} of {})",
                    position + 1,
                    group.group,
                    worst.label(),
                    group.count(worst),
                    group.total
                );
            }
        }

        summary
    }
}
