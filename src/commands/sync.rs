//! Main sync command

use crate::diff::generate_sync_plan;
use crate::executor::execute_plan;
use crate::scanner::load_targets;
use crate::types::{SyncError, SyncOutcome, SyncStatus};
use crate::ui::format_outcome;
use crate::Config;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Synchronize `filenames` inside `directory`
///
/// Needs at least two distinct filenames. The body of the most recently
/// modified file is copied onto the others; every file keeps its own header
/// line and missing files are created with a `# <name>` header.
///
/// # Example
/// ```no_run
/// use sync_instructions::{synchronize, SyncStatus};
/// use std::path::Path;
///
/// let outcome = synchronize(Path::new("."), &["AGENTS.md", "CLAUDE.md"])?;
/// if outcome.status() == SyncStatus::FilesUpdated {
///     println!("updated: {:?}", outcome.updated);
/// }
/// # Ok::<(), sync_instructions::SyncError>(())
/// ```
pub fn synchronize<S: AsRef<str>>(directory: &Path, filenames: &[S]) -> Result<SyncOutcome, SyncError> {
    let config = Config::new(directory, filenames)?;
    synchronize_with(&config)
}

/// Run one pass with an already built configuration, without printing
pub fn synchronize_with(config: &Config) -> Result<SyncOutcome, SyncError> {
    config.validate()?;
    let targets = load_targets(config)?;
    let plan = generate_sync_plan(&targets);
    if !plan.has_changes() {
        debug!("every target already carries the source body");
    }
    let outcome = execute_plan(&plan, config)?;

    info!(
        status = ?outcome.status(),
        created = outcome.created.len(),
        updated = outcome.updated.len(),
        unchanged = outcome.unchanged.len(),
        "sync finished"
    );
    Ok(outcome)
}

/// Run the sync operation and print the result
pub fn run(config: &Config) -> Result<SyncStatus, SyncError> {
    let outcome = synchronize_with(config)?;

    if config.json {
        println!("{}", format_json(&outcome));
    } else {
        println!("{}", format_outcome(&outcome));
    }

    Ok(outcome.status())
}

fn format_json(outcome: &SyncOutcome) -> String {
    serde_json::json!({
        "status": outcome.status(),
        "source": outcome.source,
        "created": outcome.created,
        "updated": outcome.updated,
        "unchanged": outcome.unchanged,
        "dry_run": outcome.dry_run,
    })
    .to_string()
}

/// Plain-English follow-up for an error, if there is a useful one
pub fn suggestion_for(error: &SyncError) -> Option<&'static str> {
    match error {
        SyncError::InvalidConfiguration(_) => {
            Some("Pass at least two distinct names, e.g. --files AGENTS.md,CLAUDE.md")
        }
        SyncError::DirectoryNotFound { .. } => Some("Check the --path argument."),
        SyncError::Io { source, .. } => match source.kind() {
            ErrorKind::PermissionDenied => {
                Some("Check file permissions or run with a user that has access.")
            }
            ErrorKind::InvalidData => Some("Instruction files must be valid UTF-8 text."),
            _ => None,
        },
    }
}
