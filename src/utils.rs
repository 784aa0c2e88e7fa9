//! Terminal helpers: colored message prefixes and status painting.

use crate::models::severity::Severity;
use owo_colors::OwoColorize;

/// Colors are used for human output unless `NO_COLOR` is set.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if stderr_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if stderr_colors() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if stderr_colors() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Render a status label, colored by severity when `color` is set.
pub fn paint_status(status: Severity, color: bool) -> String {
    let label = status.as_str();
    if !color {
        return label.to_string();
    }
    match status {
        Severity::Error => label.red().bold().to_string(),
        Severity::Warning => label.yellow().bold().to_string(),
        Severity::Ok => label.green().to_string(),
        Severity::NotAvailable => label.bright_black().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_status_plain() {
        assert_eq!(paint_status(Severity::NotAvailable, false), "not_available");
        assert_eq!(paint_status(Severity::Error, false), "error");
        // Colored output still carries the label
        assert!(paint_status(Severity::Warning, true).contains("warning"));
    }

    #[test]
    fn test_json_never_colored() {
        assert!(!use_colors("json"));
    }
}
