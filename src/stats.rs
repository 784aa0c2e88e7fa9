//! Stats runner: fetch the catalog and summaries, then aggregate.
//!
//! Produces a `StatsReport` with one aggregate per category. Any fold error
//! aborts the run; there is no partial report.

use crate::aggregate::{Aggregator, CategoryAggregate};
use crate::error::StatsError;
use crate::models::severity::{worst, Severity};
use crate::models::Snapshot;
use crate::provider::AdvisorApi;
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Aggregated result of one run.
pub struct StatsReport {
    /// Aggregates keyed by category name, in lexicographic order.
    pub categories: BTreeMap<String, CategoryAggregate>,
    pub checks: usize,
    pub summaries: usize,
}

impl StatsReport {
    /// Worst status across all categories; `not_available` when empty.
    pub fn worst(&self) -> Severity {
        self.categories
            .values()
            .map(|c| c.category_status)
            .fold(Severity::NotAvailable, worst)
    }

    /// True when the worst status is at or above `threshold`.
    pub fn trips(&self, threshold: Severity) -> bool {
        self.worst() >= threshold
    }
}

/// Fetch the full catalog, then summaries for every catalog check.
pub fn fetch(api: &dyn AdvisorApi, language: &str) -> Result<Snapshot, StatsError> {
    let checks = api.list_checks(language)?;
    let ids = Aggregator::new(&checks).check_ids();
    let summaries = if ids.is_empty() {
        debug!("catalog is empty; skipping summary request");
        Vec::new()
    } else {
        api.check_summaries(&ids)?
    };
    Ok(Snapshot { checks, summaries })
}

/// Fold every summary of `snapshot` into per-category aggregates.
pub fn summarize(snapshot: &Snapshot) -> Result<StatsReport, StatsError> {
    let mut agg = Aggregator::new(&snapshot.checks);
    agg.fold_all(&snapshot.summaries)?;
    let report = StatsReport {
        categories: agg.into_totals(),
        checks: snapshot.checks.len(),
        summaries: snapshot.summaries.len(),
    };
    info!(
        categories = report.categories.len(),
        checks = report.checks,
        summaries = report.summaries,
        worst = %report.worst(),
        "aggregated check summaries"
    );
    Ok(report)
}

/// `fetch` followed by `summarize`.
pub fn run_stats(api: &dyn AdvisorApi, language: &str) -> Result<StatsReport, StatsError> {
    summarize(&fetch(api, language)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckDescriptor, CheckSummary, ResourceCounts};
    use std::cell::RefCell;

    /// In-memory provider that records what it was asked for.
    struct FakeApi {
        checks: Vec<CheckDescriptor>,
        summaries: Vec<CheckSummary>,
        fail_summaries: bool,
        languages: RefCell<Vec<String>>,
        requested: RefCell<Option<Vec<String>>>,
    }

    impl FakeApi {
        fn new(checks: Vec<CheckDescriptor>, summaries: Vec<CheckSummary>) -> Self {
            Self {
                checks,
                summaries,
                fail_summaries: false,
                languages: RefCell::new(Vec::new()),
                requested: RefCell::new(None),
            }
        }
    }

    impl AdvisorApi for FakeApi {
        fn list_checks(&self, language: &str) -> Result<Vec<CheckDescriptor>, StatsError> {
            self.languages.borrow_mut().push(language.to_string());
            Ok(self.checks.clone())
        }

        fn check_summaries(&self, ids: &[String]) -> Result<Vec<CheckSummary>, StatsError> {
            *self.requested.borrow_mut() = Some(ids.to_vec());
            if self.fail_summaries {
                return Err(StatsError::Transport {
                    operation: "DescribeTrustedAdvisorCheckSummaries",
                    message: "throttled".into(),
                });
            }
            Ok(self.summaries.clone())
        }
    }

    fn check(id: &str, category: &str) -> CheckDescriptor {
        CheckDescriptor {
            id: id.into(),
            name: String::new(),
            category: category.into(),
        }
    }

    fn summary(id: &str, status: &str, flagged: Option<i64>) -> CheckSummary {
        CheckSummary {
            check_id: id.into(),
            status: status.into(),
            resources_summary: Some(ResourceCounts {
                resources_flagged: flagged,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_requests_summaries_for_every_catalog_check() {
        let api = FakeApi::new(
            vec![check("c2", "Cost"), check("c1", "Cost"), check("c3", "Security")],
            vec![summary("c1", "ok", Some(1)), summary("c3", "error", None)],
        );
        let report = run_stats(&api, "ja").unwrap();
        assert_eq!(*api.languages.borrow(), vec!["ja".to_string()]);
        assert_eq!(
            api.requested.borrow().clone().unwrap(),
            vec!["c1".to_string(), "c2".to_string(), "c3".to_string()]
        );
        assert_eq!(report.checks, 3);
        assert_eq!(report.summaries, 2);
        assert_eq!(report.categories["Cost"].category_status, Severity::Ok);
        assert_eq!(report.categories["Cost"].resources_flagged, 1);
        assert_eq!(report.worst(), Severity::Error);
    }

    #[test]
    fn test_empty_catalog_skips_summary_request() {
        let api = FakeApi::new(Vec::new(), Vec::new());
        let report = run_stats(&api, "en").unwrap();
        assert!(api.requested.borrow().is_none());
        assert!(report.categories.is_empty());
        assert_eq!(report.worst(), Severity::NotAvailable);
    }

    #[test]
    fn test_transport_error_aborts_run() {
        let mut api = FakeApi::new(vec![check("c1", "Cost")], Vec::new());
        api.fail_summaries = true;
        let err = run_stats(&api, "en").unwrap_err();
        assert!(matches!(err, StatsError::Transport { .. }));
        assert!(err.to_string().contains("throttled"));
    }

    #[test]
    fn test_inconsistent_providers_produce_no_report() {
        let api = FakeApi::new(
            vec![check("c1", "Cost")],
            vec![summary("c1", "ok", Some(2)), summary("c9", "ok", None)],
        );
        let err = run_stats(&api, "en").unwrap_err();
        assert!(err.is_fold_error());
        assert!(matches!(err, StatsError::UnresolvedCheckId(ref id) if id == "c9"));
    }

    #[test]
    fn test_summarize_keeps_categories_without_summaries() {
        let snapshot = Snapshot {
            checks: vec![check("c1", "Cost"), check("c2", "Fault Tolerance")],
            summaries: vec![summary("c1", "warning", Some(4))],
        };
        let report = summarize(&snapshot).unwrap();
        assert_eq!(
            report.categories.keys().collect::<Vec<_>>(),
            vec!["Cost", "Fault Tolerance"]
        );
        assert_eq!(
            report.categories["Fault Tolerance"],
            CategoryAggregate::default()
        );
        assert_eq!(report.worst(), Severity::Warning);
    }

    #[test]
    fn test_fail_on_threshold() {
        let snapshot = Snapshot {
            checks: vec![check("c1", "Cost"), check("c2", "Security")],
            summaries: vec![summary("c1", "ok", None), summary("c2", "warning", None)],
        };
        let report = summarize(&snapshot).unwrap();
        // Worst status equal to the threshold trips
        assert!(report.trips(Severity::Warning));
        assert!(report.trips(Severity::Ok));
        // Below the threshold does not
        assert!(!report.trips(Severity::Error));
        // not_available trips on every report, including an empty one
        assert!(report.trips(Severity::NotAvailable));
        let empty = summarize(&Snapshot::default()).unwrap();
        assert!(empty.trips(Severity::NotAvailable));
        assert!(!empty.trips(Severity::Ok));
    }
}
