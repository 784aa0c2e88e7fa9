//! AWS Support API client for Trusted Advisor.
//!
//! The SDK is async; the rest of the tool is not. `SupportClient` owns a
//! current-thread runtime and blocks on each request, so callers see two
//! plain blocking calls.

use crate::error::StatsError;
use crate::models::{CheckDescriptor, CheckSummary, ResourceCounts};
use crate::provider::AdvisorApi;
use aws_sdk_support::config::Region;
use aws_sdk_support::error::DisplayErrorContext;
use aws_sdk_support::types::{
    TrustedAdvisorCheckDescription, TrustedAdvisorCheckSummary, TrustedAdvisorResourcesSummary,
};
use tokio::runtime::Runtime;
use tracing::{debug, info};

pub struct SupportClient {
    runtime: Runtime,
    client: aws_sdk_support::Client,
}

impl SupportClient {
    /// Resolve credentials from the default provider chain (or `profile`)
    /// and build a client for `region`.
    pub fn connect(region: &str, profile: Option<&str>) -> Result<Self, StatsError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StatsError::Transport {
                operation: "runtime start-up",
                message: e.to_string(),
            })?;

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.to_string()));
        if let Some(p) = profile {
            loader = loader.profile_name(p);
        }
        let sdk_config = runtime.block_on(loader.load());
        debug!(region, profile = profile.unwrap_or("default"), "support client ready");

        Ok(Self {
            runtime,
            client: aws_sdk_support::Client::new(&sdk_config),
        })
    }
}

impl AdvisorApi for SupportClient {
    fn list_checks(&self, language: &str) -> Result<Vec<CheckDescriptor>, StatsError> {
        let out = self
            .runtime
            .block_on(
                self.client
                    .describe_trusted_advisor_checks()
                    .language(language)
                    .send(),
            )
            .map_err(|e| transport("DescribeTrustedAdvisorChecks", e))?;
        let checks: Vec<CheckDescriptor> = out.checks().iter().map(to_descriptor).collect();
        info!(count = checks.len(), language, "fetched check catalog");
        Ok(checks)
    }

    fn check_summaries(&self, check_ids: &[String]) -> Result<Vec<CheckSummary>, StatsError> {
        let out = self
            .runtime
            .block_on(
                self.client
                    .describe_trusted_advisor_check_summaries()
                    .set_check_ids(Some(check_ids.iter().cloned().map(Some).collect()))
                    .send(),
            )
            .map_err(|e| transport("DescribeTrustedAdvisorCheckSummaries", e))?;
        let summaries: Vec<CheckSummary> = out.summaries().iter().map(to_summary).collect();
        info!(
            requested = check_ids.len(),
            count = summaries.len(),
            "fetched check summaries"
        );
        Ok(summaries)
    }
}

fn transport<E>(operation: &'static str, err: E) -> StatsError
where
    E: std::error::Error + 'static,
{
    StatsError::Transport {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}

fn to_descriptor(check: &TrustedAdvisorCheckDescription) -> CheckDescriptor {
    CheckDescriptor {
        id: check.id().to_string(),
        name: check.name().to_string(),
        category: check.category().to_string(),
    }
}

fn to_summary(summary: &TrustedAdvisorCheckSummary) -> CheckSummary {
    CheckSummary {
        check_id: summary.check_id().to_string(),
        status: summary.status().to_string(),
        resources_summary: summary.resources_summary().map(to_counts),
    }
}

fn to_counts(rs: &TrustedAdvisorResourcesSummary) -> ResourceCounts {
    ResourceCounts {
        resources_flagged: Some(rs.resources_flagged()),
        resources_ignored: Some(rs.resources_ignored()),
        resources_processed: Some(rs.resources_processed()),
        resources_suppressed: Some(rs.resources_suppressed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::CategoryAggregate;
    use crate::models::severity::Severity;

    fn sdk_summary(
        id: &str,
        status: &str,
        counts: Option<TrustedAdvisorResourcesSummary>,
    ) -> TrustedAdvisorCheckSummary {
        TrustedAdvisorCheckSummary::builder()
            .check_id(id)
            .timestamp("2026-10-19T08:00:00Z")
            .status(status)
            .set_resources_summary(counts)
            .build()
            .unwrap()
    }

    fn sdk_counts(
        processed: i64,
        flagged: i64,
        ignored: i64,
        suppressed: i64,
    ) -> TrustedAdvisorResourcesSummary {
        TrustedAdvisorResourcesSummary::builder()
            .resources_processed(processed)
            .resources_flagged(flagged)
            .resources_ignored(ignored)
            .resources_suppressed(suppressed)
            .build()
    }

    #[test]
    fn test_descriptor_mapping() {
        let sdk = TrustedAdvisorCheckDescription::builder()
            .id("Qch7DwouX1")
            .name("Low Utilization Amazon EC2 Instances")
            .description("Checks EC2 instances with low CPU utilization")
            .category("cost_optimizing")
            .set_metadata(Some(Vec::new()))
            .build()
            .unwrap();
        assert_eq!(
            to_descriptor(&sdk),
            CheckDescriptor {
                id: "Qch7DwouX1".into(),
                name: "Low Utilization Amazon EC2 Instances".into(),
                category: "cost_optimizing".into(),
            }
        );
    }

    #[test]
    fn test_summary_mapping_keeps_every_counter() {
        let sdk = sdk_summary("c1", "warning", Some(sdk_counts(10, 3, 0, 1)));
        assert_eq!(
            to_summary(&sdk),
            CheckSummary {
                check_id: "c1".into(),
                status: "warning".into(),
                resources_summary: Some(ResourceCounts {
                    resources_flagged: Some(3),
                    resources_ignored: Some(0),
                    resources_processed: Some(10),
                    resources_suppressed: Some(1),
                }),
            }
        );

        // No resources summary on the wire maps to an absent breakdown
        let bare = to_summary(&sdk_summary("c2", "ok", None));
        assert!(bare.resources_summary.is_none());
    }

    #[test]
    fn test_mapped_summaries_fold() {
        let mut total = CategoryAggregate::default();
        let flagged = sdk_summary("c1", "warning", Some(sdk_counts(10, 3, 2, 1)));
        total.fold(&to_summary(&flagged)).unwrap();
        // An absent resources summary adds nothing but still raises the status
        total.fold(&to_summary(&sdk_summary("c2", "error", None))).unwrap();
        assert_eq!(
            total,
            CategoryAggregate {
                category_status: Severity::Error,
                resources_flagged: 3,
                resources_ignored: 2,
                resources_processed: 10,
                resources_suppressed: 1,
            }
        );
    }
}
