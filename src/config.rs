//! Configuration discovery and effective settings resolution.
//!
//! advisor-stats reads `advisor-stats.toml|yaml|yml` from the given root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `language`: `en`
//! - `region`: `us-east-1` (the Support API endpoint)
//! - `output`: `human`
//! - `profile`, `snapshot`, `failOn`: unset
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::StatsError;
use crate::models::severity::Severity;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["advisor-stats.toml", "advisor-stats.yaml", "advisor-stats.yml"];
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
/// Root configuration loaded from `advisor-stats.toml|yaml`.
pub struct StatsConfig {
    pub language: Option<String>,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub output: Option<String>,
    /// Snapshot to replay instead of calling AWS, relative to the config root
    pub snapshot: Option<String>,
    /// not_available|ok|warning|error
    pub fail_on: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub language: String,
    pub region: String,
    pub profile: Option<String>,
    pub output: String,
    pub snapshot: Option<PathBuf>,
    pub fail_on: Option<Severity>,
}

/// Walk upward from `start` to find the directory holding the config.
///
/// Stops when an `advisor-stats.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `StatsConfig` from the first config file present under `root`.
///
/// Returns the file path alongside the parsed config. A file that exists but
/// does not parse is an error.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, StatsConfig)>, StatsError> {
    let Some(path) = CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.is_file())
    else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|source| StatsError::Io {
        path: path.clone(),
        source,
    })?;
    let parsed = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str::<StatsConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<StatsConfig>(&s).map_err(|e| e.to_string())
    };
    match parsed {
        Ok(cfg) => Ok(Some((path, cfg))),
        Err(message) => Err(StatsError::Config { path, message }),
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_language: Option<&str>,
    cli_region: Option<&str>,
    cli_profile: Option<&str>,
    cli_output: Option<&str>,
    cli_snapshot: Option<&str>,
    cli_fail_on: Option<Severity>,
) -> Result<Effective, StatsError> {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let root = detect_config_root(&start);
    let (config_path, cfg) = match load_config(&root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, StatsConfig::default()),
    };
    let invalid = |message: String| StatsError::Config {
        path: config_path.clone().unwrap_or_else(|| root.clone()),
        message,
    };

    let language = cli_language
        .map(|s| s.to_string())
        .or(cfg.language)
        .unwrap_or_else(|| "en".to_string());

    let region = cli_region
        .map(|s| s.to_string())
        .or(cfg.region)
        .unwrap_or_else(|| "us-east-1".to_string());

    let profile = cli_profile.map(|s| s.to_string()).or(cfg.profile);

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if !OUTPUT_MODES.contains(&output.as_str()) {
        return Err(invalid(format!(
            "output must be one of human|json, got '{}'",
            output
        )));
    }

    // CLI paths are taken as given; config paths are relative to the config root
    let snapshot = cli_snapshot
        .map(PathBuf::from)
        .or_else(|| cfg.snapshot.map(|s| root.join(s)));

    let fail_on = match cli_fail_on {
        Some(sev) => Some(sev),
        None => match cfg.fail_on.as_deref() {
            Some(label) => Some(
                label
                    .parse::<Severity>()
                    .map_err(|e| invalid(format!("failOn: {}", e)))?,
            ),
            None => None,
        },
    };

    Ok(Effective {
        root,
        config_path,
        language,
        region,
        profile,
        output,
        snapshot,
        fail_on,
    })
}
