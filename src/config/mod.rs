//! Configuration management

use super::types::SyncError;
use clap::Parser;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Files synchronized when `--files` is not given
pub const DEFAULT_FILES: [&str; 3] = ["AGENTS.md", "CLAUDE.md", "GEMINI.md"];

/// Command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "sync-instructions")]
#[command(author, version)]
#[command(about = "Synchronize AGENTS.md, CLAUDE.md, and GEMINI.md based on the newest file.")]
pub struct Cli {
    /// Directory containing the instruction files (defaults to current working directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Comma-separated list of filenames to synchronize (minimum two)
    #[arg(long, value_name = "LIST", default_value_t = DEFAULT_FILES.join(","))]
    pub files: String,

    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the target files
    pub directory: PathBuf,

    /// Target filenames, relative to `directory`
    pub files: Vec<String>,

    /// Report the plan, don't write
    pub dry_run: bool,

    /// JSON report instead of per-file lines
    pub json: bool,

    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            files: DEFAULT_FILES.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
            json: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Config for `directory` and `files` with default flags, validated
    pub fn new<S: AsRef<str>>(directory: impl Into<PathBuf>, files: &[S]) -> Result<Self, SyncError> {
        let config = Self {
            directory: directory.into(),
            files: files.iter().map(|s| s.as_ref().to_string()).collect(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// The directory itself is checked when the run starts, so a config can
    /// be built before the directory exists.
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.files.len() < 2 {
            return Err(SyncError::InvalidConfiguration(
                "Provide at least 2 comma-separated filenames for synchronization.".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.files {
            validate_file_name(name)?;
            if !seen.insert(normalized_name(name)) {
                return Err(SyncError::InvalidConfiguration(format!(
                    "Filename listed more than once: {name}"
                )));
            }
        }

        Ok(())
    }
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let directory = match cli.path {
            Some(path) => path,
            None => std::env::current_dir().map_err(|e| SyncError::io(".", e))?,
        };

        let config = Self {
            directory,
            files: parse_file_list(&cli.files),
            dry_run: cli.dry_run,
            json: cli.json,
            verbose: cli.verbose,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Split a `--files` value on commas, trimming entries and dropping empty ones
pub fn parse_file_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// `./A.md`, `A.md/` and `A.md` all name the same file
fn normalized_name(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

fn validate_file_name(name: &str) -> Result<(), SyncError> {
    let path = Path::new(name);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || path.file_name().is_none() {
        return Err(SyncError::InvalidConfiguration(format!(
            "Filename must be a relative path inside the sync directory: {name}"
        )));
    }
    Ok(())
}
