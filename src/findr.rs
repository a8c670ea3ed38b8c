//! Project root lookup for `prwd -f [TARGET]`.
//!
//! Three searches run one after the other, each walking from the start
//! directory up to the filesystem root:
//!
//! 1. the nearest directory containing `TARGET`, when given
//! 2. the nearest repository root (`.hg` or `.git`)
//! 3. the nearest directory with a README

use std::path::{Path, PathBuf};
use tracing::debug;

const REPOSITORY_MARKERS: &[&str] = &[".hg", ".git"];
const README_MARKERS: &[&str] = &["README", "README.md", "README.txt"];

/// Find the nearest project root above `start` (inclusive).
pub fn find_root(start: &Path, target: Option<&str>) -> Option<PathBuf> {
    if let Some(target) = target {
        if let Some(root) = nearest_containing(start, &[target]) {
            debug!(root = %root.display(), target, "found target");
            return Some(root);
        }
    }

    if let Some(root) = nearest_containing(start, REPOSITORY_MARKERS) {
        debug!(root = %root.display(), "found repository");
        return Some(root);
    }

    let root = nearest_containing(start, README_MARKERS);
    if let Some(root) = &root {
        debug!(root = %root.display(), "found readme");
    }
    root
}

/// Nearest ancestor of `start` holding any of `names`.
fn nearest_containing(start: &Path, names: &[&str]) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| names.iter().any(|name| dir.join(name).exists()))
        .map(Path::to_path_buf)
}
