//! Output rendering for the stats and checks commands.
//!
//! Supports `human` (default) and `json` outputs. Human stats output is one
//! line per category: `<category> (<status>): <counters>`. The JSON form
//! includes per-category fields and a top-level summary.

use crate::aggregate::CategoryAggregate;
use crate::models::CheckDescriptor;
use crate::stats::StatsReport;
use crate::utils::{paint_status, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Format one category line of human output.
pub fn format_category_line(category: &str, total: &CategoryAggregate, color: bool) -> String {
    let name = if color {
        category.bold().to_string()
    } else {
        category.to_string()
    };
    format!(
        "{} ({}): {}",
        name,
        paint_status(total.category_status, color),
        total
    )
}

/// Print aggregated stats in the requested format.
pub fn print_stats(report: &StatsReport, output: &str) {
    match output {
        "json" => println!("{}", pretty(&compose_stats_json(report))),
        _ => {
            let color = use_colors(output);
            for (category, total) in &report.categories {
                println!("{}", format_category_line(category, total, color));
            }
        }
    }
}

/// Print the check catalog, sorted by category then id.
pub fn print_checks(checks: &[CheckDescriptor], output: &str) {
    match output {
        "json" => println!("{}", pretty(&compose_checks_json(checks))),
        _ => {
            let color = use_colors(output);
            for c in sorted_checks(checks) {
                if color {
                    println!("{}  {}  {}", c.category.bold(), c.id.cyan(), c.name);
                } else {
                    println!("{}  {}  {}", c.category, c.id, c.name);
                }
            }
        }
    }
}

fn sorted_checks(checks: &[CheckDescriptor]) -> Vec<&CheckDescriptor> {
    let mut sorted: Vec<&CheckDescriptor> = checks.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category).then(a.id.cmp(&b.id)));
    sorted
}

fn pretty(v: &JsonVal) -> String {
    // Serializing a `Value` cannot fail
    serde_json::to_string_pretty(v).unwrap_or_default()
}

/// Compose stats JSON object (pure) for testing/snapshot purposes.
pub fn compose_stats_json(report: &StatsReport) -> JsonVal {
    let items: Vec<_> = report
        .categories
        .iter()
        .map(|(category, t)| {
            json!({
                "category": category,
                "status": t.category_status,
                "resourcesFlagged": t.resources_flagged,
                "resourcesIgnored": t.resources_ignored,
                "resourcesProcessed": t.resources_processed,
                "resourcesSuppressed": t.resources_suppressed,
            })
        })
        .collect();
    let summary = json!({
        "categories": report.categories.len(),
        "checks": report.checks,
        "summaries": report.summaries,
        "worst": report.worst(),
    });
    json!({"categories": items, "summary": summary})
}

/// Compose checks JSON object (pure) for testing/snapshot purposes.
pub fn compose_checks_json(checks: &[CheckDescriptor]) -> JsonVal {
    json!({
        "checks": sorted_checks(checks),
        "total": checks.len(),
    })
}
