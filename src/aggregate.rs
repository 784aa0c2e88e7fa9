//! Per-category aggregation of check summaries.
//!
//! The catalog is turned into a `check id -> category` lookup, one zeroed
//! `CategoryAggregate` is created per distinct category, and every summary is
//! folded into the aggregate of its category. Folding takes the worst status
//! and sums the resource counters, treating absent counters as zero. Both
//! operations are commutative, so the result does not depend on the order
//! summaries arrive in.

use crate::error::StatsError;
use crate::models::severity::{worst, Severity};
use crate::models::{CheckDescriptor, CheckSummary, ResourceCounts};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Running totals for one category.
pub struct CategoryAggregate {
    pub category_status: Severity,
    pub resources_flagged: i64,
    pub resources_ignored: i64,
    pub resources_processed: i64,
    pub resources_suppressed: i64,
}

impl CategoryAggregate {
    /// Fold one summary into this aggregate.
    ///
    /// Fails on an unrecognized status label; the aggregate is left untouched
    /// in that case.
    pub fn fold(&mut self, summary: &CheckSummary) -> Result<(), StatsError> {
        let status: Severity = summary.status.parse()?;
        self.category_status = worst(self.category_status, status);

        let counts = summary.resources_summary.clone().unwrap_or_default();
        let ResourceCounts {
            resources_flagged,
            resources_ignored,
            resources_processed,
            resources_suppressed,
        } = counts;
        self.resources_flagged += safe_value(resources_flagged);
        self.resources_ignored += safe_value(resources_ignored);
        self.resources_processed += safe_value(resources_processed);
        self.resources_suppressed += safe_value(resources_suppressed);
        Ok(())
    }
}

impl fmt::Display for CategoryAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "flagged={} ignored={} processed={} suppressed={}",
            self.resources_flagged,
            self.resources_ignored,
            self.resources_processed,
            self.resources_suppressed
        )
    }
}

fn safe_value(v: Option<i64>) -> i64 {
    v.unwrap_or(0)
}

/// Map every check id to its category. Later descriptors win on duplicate ids.
pub fn category_lookup(checks: &[CheckDescriptor]) -> HashMap<String, String> {
    checks
        .iter()
        .map(|c| (c.id.clone(), c.category.clone()))
        .collect()
}

/// Folds summaries into one aggregate per catalog category.
pub struct Aggregator {
    lookup: HashMap<String, String>,
    totals: BTreeMap<String, CategoryAggregate>,
}

impl Aggregator {
    /// Build the lookup and a zeroed aggregate for every category in `checks`.
    pub fn new(checks: &[CheckDescriptor]) -> Self {
        let lookup = category_lookup(checks);
        let totals = lookup
            .values()
            .map(|category| (category.clone(), CategoryAggregate::default()))
            .collect();
        Self { lookup, totals }
    }

    /// Known check ids, sorted.
    pub fn check_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lookup.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Route `summary` to its category and fold it in.
    pub fn fold(&mut self, summary: &CheckSummary) -> Result<(), StatsError> {
        let category = self
            .lookup
            .get(&summary.check_id)
            .ok_or_else(|| StatsError::UnresolvedCheckId(summary.check_id.clone()))?;
        let total = self
            .totals
            .get_mut(category)
            .ok_or_else(|| StatsError::UnresolvedCheckId(summary.check_id.clone()))?;
        total.fold(summary)
    }

    /// Fold every summary, stopping at the first failure.
    pub fn fold_all<'a, I>(&mut self, summaries: I) -> Result<(), StatsError>
    where
        I: IntoIterator<Item = &'a CheckSummary>,
    {
        for summary in summaries {
            self.fold(summary)?;
        }
        Ok(())
    }

    pub fn totals(&self) -> &BTreeMap<String, CategoryAggregate> {
        &self.totals
    }

    pub fn into_totals(self) -> BTreeMap<String, CategoryAggregate> {
        self.totals
    }
}

/// Aggregate `summaries` against `checks` in one call.
pub fn aggregate(
    checks: &[CheckDescriptor],
    summaries: &[CheckSummary],
) -> Result<BTreeMap<String, CategoryAggregate>, StatsError> {
    let mut agg = Aggregator::new(checks);
    agg.fold_all(summaries)?;
    Ok(agg.into_totals())
}
