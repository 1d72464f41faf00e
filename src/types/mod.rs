//! Core type definitions for sync-instructions

mod action;
mod entry;
mod error;
mod outcome;

pub use action::SyncAction;
pub use entry::{compose_document, default_header, split_document, TargetFile};
pub use error::SyncError;
pub use outcome::{SyncOutcome, SyncStatus};
