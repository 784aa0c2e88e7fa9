//! CLI argument parsing via `clap`.

use crate::models::severity::Severity;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "advisor-stats",
    version,
    about = "Trusted Advisor stats per category",
    long_about = "advisor-stats — fetch Trusted Advisor check summaries from the AWS Support API and print per-category totals with the worst status.\n\nConfiguration precedence: CLI > advisor-stats.toml > defaults.",
    after_help = "Examples:\n  advisor-stats stats\n  advisor-stats stats --output json --fail-on error\n  advisor-stats stats --record snap.json\n  advisor-stats stats --snapshot snap.json\n  advisor-stats checks --language ja",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(long, short, global = true, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Args, Debug, Clone)]
/// Where checks come from and how results are shown.
pub struct SourceArgs {
    #[arg(long, help = "Directory to search for advisor-stats.toml (default: current dir)")]
    pub root: Option<String>,
    #[arg(long, help = "Language for check metadata (default: en)")]
    pub language: Option<String>,
    #[arg(long, help = "AWS region of the Support API (default: us-east-1)")]
    pub region: Option<String>,
    #[arg(long, help = "Named AWS profile for credentials")]
    pub profile: Option<String>,
    #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Replay a recorded snapshot instead of calling AWS")]
    pub snapshot: Option<String>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current advisor-stats version."
    )]
    Version,
    /// Aggregate check summaries per category
    #[command(
        about = "Print per-category totals",
        long_about = "Fetch the check catalog and every check summary, then print one line per category with the worst status and summed resource counts.",
        after_help = "Examples:\n  advisor-stats stats\n  advisor-stats stats --output json\n  advisor-stats stats --fail-on warning"
    )]
    Stats {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, help = "Write the fetched catalog and summaries to this JSON file")]
        record: Option<String>,
        #[arg(long, value_parser = parse_severity, help = "Exit 1 when the worst status is at or above this level")]
        fail_on: Option<Severity>,
    },
    /// List the check catalog
    #[command(
        about = "List available checks",
        long_about = "Print every Trusted Advisor check with its category and name.",
        after_help = "Examples:\n  advisor-stats checks\n  advisor-stats checks --output json"
    )]
    Checks {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse::<Severity>().map_err(|e| e.to_string())
}
