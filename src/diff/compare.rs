//! Source selection

use crate::types::TargetFile;
use std::cmp::Ordering;

/// Pick the target whose body is authoritative
///
/// The existing file with the latest modification time wins. When several
/// share that time, the lexicographically smallest name wins so the choice
/// never depends on the order of `--files`. Returns `None` when no target
/// exists.
pub fn select_source(targets: &[TargetFile]) -> Option<&TargetFile> {
    targets
        .iter()
        .filter(|target| target.exists())
        .max_by(|a, b| compare_freshness(a, b))
}

/// Ordering where the "greater" target is the better source
fn compare_freshness(a: &TargetFile, b: &TargetFile) -> Ordering {
    a.mtime
        .cmp(&b.mtime)
        // reversed: smaller name is preferred on ties
        .then_with(|| b.name.cmp(&a.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::FileTime;
    use std::path::PathBuf;

    fn existing(name: &str, secs: i64) -> TargetFile {
        TargetFile::existing(
            name,
            PathBuf::from(name),
            FileTime::from_unix_time(secs, 0),
            &format!("# {name}\nbody\n"),
        )
    }

    #[test]
    fn test_no_existing_targets_means_no_source() {
        let targets = vec![
            TargetFile::missing("A.md", PathBuf::from("A.md")),
            TargetFile::missing("B.md", PathBuf::from("B.md")),
        ];
        assert!(select_source(&targets).is_none());
    }

    #[test]
    fn test_newest_file_is_source() {
        let targets = vec![existing("A.md", 100), existing("B.md", 300), existing("C.md", 200)];
        assert_eq!(select_source(&targets).unwrap().name, "B.md");
    }

    #[test]
    fn test_sole_existing_file_is_source() {
        let targets = vec![
            TargetFile::missing("A.md", PathBuf::from("A.md")),
            existing("B.md", 1),
        ];
        assert_eq!(select_source(&targets).unwrap().name, "B.md");
    }

    #[test]
    fn test_tie_prefers_smallest_name_regardless_of_order() {
        let forward = vec![existing("AGENTS.md", 500), existing("CLAUDE.md", 500)];
        let reverse = vec![existing("CLAUDE.md", 500), existing("AGENTS.md", 500)];

        assert_eq!(select_source(&forward).unwrap().name, "AGENTS.md");
        assert_eq!(select_source(&reverse).unwrap().name, "AGENTS.md");
    }

    #[test]
    fn test_subsecond_precision_counts() {
        let mut later = existing("A.md", 100);
        later.mtime = Some(FileTime::from_unix_time(100, 500));
        let targets = vec![existing("B.md", 100), later];
        assert_eq!(select_source(&targets).unwrap().name, "A.md");
    }
}
