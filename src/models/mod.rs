//! Shared data models for the check catalog, check summaries, and snapshots.
//!
//! Field names follow the Support API's camelCase JSON so a recorded
//! snapshot reads like the raw responses.

pub mod severity;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of the check catalog.
pub struct CheckDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub category: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Resource counters reported with a check summary. Any of them may be absent.
pub struct ResourceCounts {
    #[serde(default)]
    pub resources_flagged: Option<i64>,
    #[serde(default)]
    pub resources_ignored: Option<i64>,
    #[serde(default)]
    pub resources_processed: Option<i64>,
    #[serde(default)]
    pub resources_suppressed: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Result of a single check. `status` is the raw label; it is only
/// interpreted when folded into a category.
pub struct CheckSummary {
    pub check_id: String,
    pub status: String,
    #[serde(default)]
    pub resources_summary: Option<ResourceCounts>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog and summaries as returned by one run against the API.
pub struct Snapshot {
    #[serde(default)]
    pub checks: Vec<CheckDescriptor>,
    #[serde(default)]
    pub summaries: Vec<CheckSummary>,
}
