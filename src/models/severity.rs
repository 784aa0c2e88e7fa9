//! Check status severity.
//!
//! Trusted Advisor reports one of four status labels per check. They form a
//! total order from least to most severe:
//! `not_available < ok < warning < error`. Declaration order below is that
//! order, so the derived `Ord` is the severity ranking.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Status of a single check or the worst status across a category.
pub enum Severity {
    #[default]
    NotAvailable,
    Ok,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::NotAvailable,
        Severity::Ok,
        Severity::Warning,
        Severity::Error,
    ];

    /// Label as reported by the Support API.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::NotAvailable => "not_available",
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Return the more severe of `a` and `b`.
pub fn worst(a: Severity, b: Severity) -> Severity {
    a.max(b)
}

impl FromStr for Severity {
    type Err = StatsError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|s| s.as_str() == label)
            .ok_or_else(|| StatsError::UnknownStatusLabel(label.to_string()))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
