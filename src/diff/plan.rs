//! SyncPlan generation

use crate::diff::select_source;
use crate::types::{SyncAction, TargetFile};
use tracing::debug;

/// Planned work for one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncPlan {
    /// Name of the source file, `None` when no target exists
    pub source: Option<String>,

    /// Authoritative body copied onto every other target
    pub body: String,

    /// One action per target, in configuration order
    pub actions: Vec<SyncAction>,
}

impl SyncPlan {
    pub fn has_changes(&self) -> bool {
        self.actions.iter().any(|action| !action.is_skip())
    }
}

/// Build a plan from freshly loaded targets
///
/// With no existing target the plan is empty. Otherwise missing targets are
/// created, targets whose body differs from the source are updated, and the
/// rest (the source included) are skipped.
///
/// # Example
/// ```
/// use sync_instructions::diff::generate_sync_plan;
/// use sync_instructions::types::TargetFile;
/// use filetime::FileTime;
/// use std::path::PathBuf;
///
/// let targets = vec![
///     TargetFile::existing(
///         "AGENTS.md",
///         PathBuf::from("/repo/AGENTS.md"),
///         FileTime::from_unix_time(1_000, 0),
///         "# AGENTS.md\nBe terse.\n",
///     ),
///     TargetFile::missing("CLAUDE.md", PathBuf::from("/repo/CLAUDE.md")),
/// ];
///
/// let plan = generate_sync_plan(&targets);
/// assert_eq!(plan.source.as_deref(), Some("AGENTS.md"));
/// assert_eq!(plan.body, "Be terse.\n");
/// assert!(plan.has_changes());
/// ```
pub fn generate_sync_plan(targets: &[TargetFile]) -> SyncPlan {
    let Some(source) = select_source(targets) else {
        debug!("no target exists, nothing to plan");
        return SyncPlan::default();
    };
    debug!(source = %source.name, "selected source");

    let actions = targets
        .iter()
        .map(|target| {
            let action = if !target.exists() {
                SyncAction::Create(target.clone())
            } else if target.body != source.body {
                SyncAction::Update(target.clone())
            } else {
                SyncAction::Skip(target.clone())
            };
            debug!(file = %target.name, action = action.action_name(), "planned");
            action
        })
        .collect();

    SyncPlan {
        source: Some(source.name.clone()),
        body: source.body.clone(),
        actions,
    }
}
