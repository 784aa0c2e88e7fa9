//! Sources of check catalogs and summaries.
//!
//! `AdvisorApi` is the seam between the aggregation pipeline and the
//! outside world. `SupportClient` (see `support`) talks to AWS;
//! `SnapshotProvider` replays a recorded JSON snapshot.

use crate::error::StatsError;
use crate::models::{CheckDescriptor, CheckSummary, Snapshot};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog and summary provider.
pub trait AdvisorApi {
    /// List every available check, with names in `language`.
    fn list_checks(&self, language: &str) -> Result<Vec<CheckDescriptor>, StatsError>;

    /// Fetch the latest summary for each of `check_ids`.
    fn check_summaries(&self, check_ids: &[String]) -> Result<Vec<CheckSummary>, StatsError>;
}

/// Replays a snapshot previously written with `--record`.
///
/// Summaries are returned exactly as recorded, so a recording whose
/// summaries reference unknown checks still fails aggregation.
pub struct SnapshotProvider {
    snapshot: Snapshot,
}

impl SnapshotProvider {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        let s = fs::read_to_string(path).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot =
            serde_json::from_str(&s).map_err(|source| StatsError::Snapshot {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            path = %path.display(),
            checks = snapshot.checks.len(),
            summaries = snapshot.summaries.len(),
            "loaded snapshot"
        );
        Ok(Self::new(snapshot))
    }
}

impl AdvisorApi for SnapshotProvider {
    fn list_checks(&self, language: &str) -> Result<Vec<CheckDescriptor>, StatsError> {
        debug!(language, "snapshot catalog is language-independent");
        Ok(self.snapshot.checks.clone())
    }

    fn check_summaries(&self, _check_ids: &[String]) -> Result<Vec<CheckSummary>, StatsError> {
        Ok(self.snapshot.summaries.clone())
    }
}

/// Write `snapshot` as pretty JSON to `path`, creating parent directories.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), StatsError> {
    let io_err = |source| StatsError::Io {
        path: PathBuf::from(path),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let body = serde_json::to_string_pretty(snapshot).map_err(|source| StatsError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, body + "\n").map_err(io_err)
}
