//! Executor module for file operations

pub mod write;

use crate::diff::SyncPlan;
use crate::types::{SyncAction, SyncError, SyncOutcome};
use crate::Config;
use tracing::{debug, info};

pub use write::write_file_atomic;

/// Execute a sync plan
///
/// Actions run in plan order. The first failed write aborts the run; files
/// written before it keep their new content. With `config.dry_run` nothing
/// is written but the outcome still reports what would have changed.
pub fn execute_plan(plan: &SyncPlan, config: &Config) -> Result<SyncOutcome, SyncError> {
    let mut outcome = SyncOutcome {
        source: plan.source.clone(),
        dry_run: config.dry_run,
        ..SyncOutcome::default()
    };

    for action in &plan.actions {
        let name = action.name().to_string();

        if action.is_skip() {
            outcome.unchanged.push(name);
            continue;
        }

        if config.dry_run {
            debug!(file = %name, action = action.action_name(), "dry run, not writing");
        } else {
            let content = action.target().render_with_body(&plan.body);
            let bytes = write_file_atomic(action.path(), &content)?;
            info!(file = %name, action = action.action_name(), bytes, "wrote");
        }

        match action {
            SyncAction::Create(_) => outcome.created.push(name),
            SyncAction::Update(_) => outcome.updated.push(name),
            SyncAction::Skip(_) => {}
        }
    }

    Ok(outcome)
}
