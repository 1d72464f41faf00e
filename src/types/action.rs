//! SyncAction - Per-file actions determined by the planner

use super::TargetFile;
use std::path::Path;

/// Action the executor takes for one target file
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    /// File is missing and gets created with the source body
    Create(TargetFile),

    /// File exists but its body differs from the source body
    Update(TargetFile),

    /// Body already matches (includes the source itself)
    Skip(TargetFile),
}

impl SyncAction {
    pub fn target(&self) -> &TargetFile {
        match self {
            SyncAction::Create(target) | SyncAction::Update(target) | SyncAction::Skip(target) => {
                target
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.target().name
    }

    pub fn path(&self) -> &Path {
        &self.target().path
    }

    /// Short label used in logs and reports
    pub fn action_name(&self) -> &'static str {
        match self {
            SyncAction::Create(_) => "Create",
            SyncAction::Update(_) => "Update",
            SyncAction::Skip(_) => "Skip",
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, SyncAction::Skip(_))
    }
}
