//! Atomic file write implementation

use crate::types::SyncError;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `content` to `dest` using the write-then-rename strategy
///
/// 1. Write to a hidden `.part` sibling
/// 2. Flush and sync to disk
/// 3. Carry over the permissions of the file being replaced
/// 4. Rename over the destination
///
/// A symlinked destination is resolved first, so the file it points to is
/// replaced and the link itself survives. If any step fails the destination
/// keeps its previous content and the `.part` file is removed.
///
/// # Returns
/// * `Ok(u64)` - Number of bytes written
/// * `Err(SyncError)` - IO error on the failing path
///
/// # Example
/// ```no_run
/// use sync_instructions::executor::write_file_atomic;
/// use std::path::Path;
///
/// let bytes = write_file_atomic(Path::new("CLAUDE.md"), "# CLAUDE.md\nBe terse.\n")?;
/// # Ok::<(), sync_instructions::types::SyncError>(())
/// ```
pub fn write_file_atomic(dest: &Path, content: &str) -> Result<u64, SyncError> {
    let dest = resolve_link(dest);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }

    let part_path = part_path_for(&dest);
    let result = write_part_and_commit(&part_path, &dest, content);
    if result.is_err() {
        let _ = fs::remove_file(&part_path);
    }
    result
}

fn write_part_and_commit(part_path: &Path, dest: &Path, content: &str) -> Result<u64, SyncError> {
    let mut part_file = File::create(part_path).map_err(|e| SyncError::io(part_path, e))?;
    part_file
        .write_all(content.as_bytes())
        .map_err(|e| SyncError::io(part_path, e))?;
    part_file
        .sync_all()
        .map_err(|e| SyncError::io(part_path, e))?;

    // Drop the handle before rename (required on Windows)
    drop(part_file);

    if let Ok(existing) = fs::metadata(dest) {
        fs::set_permissions(part_path, existing.permissions())
            .map_err(|e| SyncError::io(part_path, e))?;
    }

    fs::rename(part_path, dest).map_err(|e| SyncError::io(dest, e))?;

    Ok(content.len() as u64)
}

/// Follow a symlinked destination to the file it points to
///
/// Dangling links resolve to nothing and are replaced by a regular file.
fn resolve_link(dest: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(dest)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if is_link {
        if let Ok(target) = fs::canonicalize(dest) {
            debug!(link = %dest.display(), target = %target.display(), "writing through symlink");
            return target;
        }
    }
    dest.to_path_buf()
}

/// `dir/.NAME.part` next to the destination, so the rename stays on one filesystem
fn part_path_for(dest: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(dest.file_name().unwrap_or_default());
    name.push(".part");
    dest.with_file_name(name)
}
