//! # sync-instructions - Keep AI assistant instruction files in step
//!
//! Copies the body of the most recently modified file among `AGENTS.md`,
//! `CLAUDE.md` and `GEMINI.md` (or any list of two or more files) onto the
//! others, leaving each file's first line alone. Meant to run as a
//! pre-commit hook: a non-zero exit code means files were changed.

pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod scanner;
pub mod types;
pub mod ui;

pub use commands::sync::{synchronize, synchronize_with};
pub use config::{Cli, Config, DEFAULT_FILES};
pub use types::{SyncError, SyncOutcome, SyncStatus, TargetFile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
