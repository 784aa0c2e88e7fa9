//! advisor-stats CLI binary entry point.
//! Resolves configuration, picks a provider, and prints results.

use advisor_stats::cli::{Cli, Commands, SourceArgs};
use advisor_stats::config::{self, Effective};
use advisor_stats::error::StatsError;
use advisor_stats::models::severity::Severity;
use advisor_stats::provider::{self, AdvisorApi, SnapshotProvider};
use advisor_stats::support::SupportClient;
use advisor_stats::utils::{error_prefix, info_prefix, note_prefix};
use advisor_stats::{output, stats};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            0
        }
        Commands::Stats {
            source,
            record,
            fail_on,
        } => report(run_stats_cmd(&source, record.as_deref(), fail_on)),
        Commands::Checks { source } => report(run_checks_cmd(&source)),
    };
    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

/// Map a command result to an exit code, printing failures.
fn report(res: Result<i32, StatsError>) -> i32 {
    match res {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", note_prefix(), hint);
            }
            2
        }
    }
}

fn resolve(source: &SourceArgs, fail_on: Option<Severity>) -> Result<Effective, StatsError> {
    let eff = config::resolve_effective(
        source.root.as_deref(),
        source.language.as_deref(),
        source.region.as_deref(),
        source.profile.as_deref(),
        source.output.as_deref(),
        source.snapshot.as_deref(),
        fail_on,
    )?;
    // Friendly note if no config was found
    if eff.config_path.is_none() && eff.output != "json" {
        eprintln!(
            "{} {}",
            note_prefix(),
            "No advisor-stats.toml found; using defaults."
        );
    }
    Ok(eff)
}

fn open_api(eff: &Effective) -> Result<Box<dyn AdvisorApi>, StatsError> {
    match eff.snapshot.as_deref() {
        Some(path) => {
            if eff.output != "json" {
                eprintln!(
                    "{} {}",
                    info_prefix(),
                    format!("Replaying snapshot {}", path.display())
                );
            }
            Ok(Box::new(SnapshotProvider::load(path)?))
        }
        None => Ok(Box::new(SupportClient::connect(
            &eff.region,
            eff.profile.as_deref(),
        )?)),
    }
}

fn run_stats_cmd(
    source: &SourceArgs,
    record: Option<&str>,
    fail_on: Option<Severity>,
) -> Result<i32, StatsError> {
    let eff = resolve(source, fail_on)?;
    let api = open_api(&eff)?;
    let snapshot = stats::fetch(api.as_ref(), &eff.language)?;
    if let Some(path) = record {
        provider::write_snapshot(Path::new(path), &snapshot)?;
    }
    let res = stats::summarize(&snapshot)?;
    output::print_stats(&res, &eff.output);
    // Severity gate for CI: exit 1 when the worst status reaches the threshold
    match eff.fail_on {
        Some(threshold) if res.trips(threshold) => Ok(1),
        _ => Ok(0),
    }
}

fn run_checks_cmd(source: &SourceArgs) -> Result<i32, StatsError> {
    let eff = resolve(source, None)?;
    let api = open_api(&eff)?;
    let checks = api.list_checks(&eff.language)?;
    output::print_checks(&checks, &eff.output);
    Ok(0)
}
