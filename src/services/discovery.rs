//! Discovery walker: finds entry-point candidates under a project root.

use crate::domain::{CandidateSet, LanguageClass, SkipConfig};
use crate::error::{LauncherError, Result};
use crate::services::classifier;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk `root` and collect every file that classifies as an entry point.
///
/// Directories are visited in lexicographic order and any entry whose base
/// name is in `skip` is pruned together with its subtree. The root itself is
/// never pruned. The first traversal error aborts the walk.
pub fn discover(root: &Path, skip: &SkipConfig) -> Result<CandidateSet> {
    let mut candidates = CandidateSet::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() > 0 && skip.should_skip(entry.path()) {
                tracing::debug!("Pruning {:?}", entry.path());
                return false;
            }
            true
        });

    for entry in walker {
        let entry = entry.map_err(|e| LauncherError::Walk {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: e,
        })?;

        if let Some(class) = classifier::classify(entry.path(), entry.file_type()) {
            let path = display_path(entry.path());
            tracing::debug!("Found {} candidate {:?}", class, path);
            candidates.push(class, path);
        }
    }

    Ok(candidates)
}

/// Like [`discover`], restricted to classes that have a build command
pub fn discover_build_targets(root: &Path, skip: &SkipConfig) -> Result<CandidateSet> {
    let mut candidates = discover(root, skip)?;
    candidates.retain_classes(LanguageClass::is_buildable);
    Ok(candidates)
}

/// Drop a leading `./` so a walk from `.` reports `main.go`
fn display_path(path: &Path) -> PathBuf {
    path.strip_prefix(".").unwrap_or(path).to_path_buf()
}
