//! Human-readable result lines

use crate::types::{SyncOutcome, SyncStatus};
use console::style;

/// Per-file lines plus a one-line summary for a finished pass
pub fn format_outcome(outcome: &SyncOutcome) -> String {
    let mut lines = Vec::new();

    if let Some(source) = &outcome.source {
        lines.push(format!("Source: {}", style(source).bold()));
    }
    for name in &outcome.created {
        lines.push(format!("  {}    {}", style("CREATE").green(), name));
    }
    for name in &outcome.updated {
        lines.push(format!("  {}    {}", style("UPDATE").yellow(), name));
    }
    for name in &outcome.unchanged {
        lines.push(format!("  {} {}", style("UNCHANGED").dim(), name));
    }

    lines.push(summary_line(outcome));
    if outcome.dry_run {
        lines.push("Dry-run mode: no changes were made.".to_string());
    }

    lines.join("\n")
}

fn summary_line(outcome: &SyncOutcome) -> String {
    match outcome.status() {
        SyncStatus::NoFilesFound => "No instruction files found; nothing to synchronize.".to_string(),
        SyncStatus::NoChangeNeeded => "All files already in sync.".to_string(),
        SyncStatus::FilesUpdated => format!(
            "Synchronized {} file(s) to match the latest changes.",
            outcome.updated.len()
        ),
        SyncStatus::FilesCreated => {
            format!("Created missing file(s): {}.", outcome.created.join(", "))
        }
    }
}
