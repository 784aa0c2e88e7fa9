//! Error type shared by the library and the binary.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("{operation} failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("unknown status label '{0}' (expected not_available|ok|warning|error)")]
    UnknownStatusLabel(String),

    #[error("check '{0}' has no catalog entry")]
    UnresolvedCheckId(String),

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot {} is not valid JSON: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl StatsError {
    /// True for errors raised while folding summaries, as opposed to I/O.
    pub fn is_fold_error(&self) -> bool {
        matches!(
            self,
            StatsError::UnknownStatusLabel(_) | StatsError::UnresolvedCheckId(_)
        )
    }

    /// Follow-up note shown under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StatsError::UnresolvedCheckId(_) => {
                Some("check catalog and summaries disagree; no totals were printed")
            }
            StatsError::UnknownStatusLabel(_) => {
                Some("a check reported a status this tool does not know; no totals were printed")
            }
            _ => None,
        }
    }
}
