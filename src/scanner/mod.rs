//! Loading target files from disk

use crate::types::{SyncError, TargetFile};
use crate::Config;
use filetime::FileTime;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the sync directory to an absolute path
///
/// Fails with `DirectoryNotFound` when the path is missing or not a directory.
pub fn resolve_directory(directory: &Path) -> Result<PathBuf, SyncError> {
    let not_found = || SyncError::DirectoryNotFound {
        path: directory.to_path_buf(),
    };

    match fs::metadata(directory) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(not_found()),
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(SyncError::io(directory, e)),
    }

    fs::canonicalize(directory).map_err(|e| SyncError::io(directory, e))
}

/// Load every configured target, in configuration order
///
/// Missing files come back as `TargetFile::missing`; any other read error
/// aborts the scan.
pub fn load_targets(config: &Config) -> Result<Vec<TargetFile>, SyncError> {
    let root = resolve_directory(&config.directory)?;
    debug!(directory = %root.display(), "scanning targets");

    config
        .files
        .iter()
        .map(|name| load_target(&root, name))
        .collect()
}

fn load_target(root: &Path, name: &str) -> Result<TargetFile, SyncError> {
    let path = root.join(name);

    let metadata = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(file = name, "target missing");
            return Ok(TargetFile::missing(name, path));
        }
        Err(e) => return Err(SyncError::io(&path, e)),
    };

    let content = fs::read_to_string(&path).map_err(|e| SyncError::io(&path, e))?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    debug!(
        file = name,
        mtime = mtime.unix_seconds(),
        bytes = content.len(),
        "target loaded"
    );

    Ok(TargetFile::existing(name, path, mtime, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(dir: &Path, files: &[&str]) -> Config {
        Config::new(dir, files).expect("valid config")
    }

    #[test]
    fn test_missing_directory_is_reported() {
        let temp = TempDir::new().unwrap();
        let config = config_for(&temp.path().join("nope"), &["A.md", "B.md"]);

        let err = load_targets(&config).unwrap_err();
        assert!(matches!(err, SyncError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_file_instead_of_directory_is_reported() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        let err = load_targets(&config_for(&file, &["A.md", "B.md"])).unwrap_err();
        assert!(matches!(err, SyncError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_loads_existing_and_missing_targets_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("B.md"), "# B\nbody\n").unwrap();

        let targets = load_targets(&config_for(temp.path(), &["A.md", "B.md"])).unwrap();
        assert_eq!(targets.len(), 2);

        assert_eq!(targets[0].name, "A.md");
        assert!(!targets[0].exists());

        assert_eq!(targets[1].name, "B.md");
        assert!(targets[1].exists());
        assert_eq!(targets[1].header, "# B\n");
        assert_eq!(targets[1].body, "body\n");
        assert!(targets[1].path.is_absolute());
    }

    #[test]
    fn test_directory_named_like_target_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("A.md")).unwrap();

        let err = load_targets(&config_for(temp.path(), &["A.md", "B.md"])).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }
}
