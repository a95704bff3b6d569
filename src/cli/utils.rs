//! Shared utilities for CLI commands

use tabled::{Table, settings::Style};

use crate::cli::error::{CliError, CliResult};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Format card labels for display
pub fn format_labels(labels: &[String]) -> String {
    if labels.is_empty() {
        "-".to_string()
    } else {
        labels.join(", ")
    }
}

/// Parse comma-separated labels into a vector, dropping empty entries
pub fn parse_labels(labels: Option<&str>) -> Option<Vec<String>> {
    labels.map(|l| {
        l.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

/// Destructive commands must be confirmed with `--force`
pub fn require_force(force: bool) -> CliResult<()> {
    if force {
        Ok(())
    } else {
        Err(CliError::InvalidInput {
            message: "Delete operation requires --force flag. This action is destructive and cannot be undone.".to_string(),
        })
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
