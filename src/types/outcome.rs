//! SyncOutcome - What a synchronization pass did

use serde::Serialize;

/// Final status of a pass, in priority order created > updated > unchanged > none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// None of the target files exist
    NoFilesFound,

    /// All existing files already share the source body
    NoChangeNeeded,

    /// At least one existing file got a new body
    FilesUpdated,

    /// At least one missing file was created
    FilesCreated,
}

impl SyncStatus {
    /// Exit code for a pre-commit runner: non-zero means files changed
    pub fn exit_code(self) -> u8 {
        match self {
            SyncStatus::NoFilesFound | SyncStatus::NoChangeNeeded => 0,
            SyncStatus::FilesUpdated => 1,
            SyncStatus::FilesCreated => 2,
        }
    }
}

/// Aggregated result of one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// File whose body was copied to the others
    pub source: Option<String>,

    pub created: Vec<String>,

    pub updated: Vec<String>,

    /// Existing files left untouched, the source included
    pub unchanged: Vec<String>,

    /// Plan was reported but nothing was written
    pub dry_run: bool,
}

impl SyncOutcome {
    pub fn status(&self) -> SyncStatus {
        if !self.created.is_empty() {
            SyncStatus::FilesCreated
        } else if !self.updated.is_empty() {
            SyncStatus::FilesUpdated
        } else if !self.unchanged.is_empty() {
            SyncStatus::NoChangeNeeded
        } else {
            SyncStatus::NoFilesFound
        }
    }
}
