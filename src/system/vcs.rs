//! Version control branch detection.
//!
//! Walks up from a directory looking for `.hg/branch` or `.git/HEAD` and
//! turns the file content into a short label. Nothing is executed; only
//! the metadata files are read.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// How much of a branch file (HEAD, .hg/branch) is read.
const BRANCH_FILE_BUFSIZE: u64 = 1024;

/// Prefix of a symbolic ref pointing at a local branch.
const GIT_HEADS_PREFIX: &str = "ref: refs/heads/";

/// Failure to look up the current branch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BranchError {
    /// The working directory could not be read.
    #[error("working directory unavailable")]
    Cwd,
    /// A branch file exists but could not be read.
    #[error("failed to read {0}")]
    Io(String),
}

impl BranchError {
    /// The text shown in the prompt instead of the branch.
    pub fn placeholder(&self) -> &'static str {
        match self {
            BranchError::Cwd => "<branch-cwd-error>",
            BranchError::Io(_) => "<branch-io-error>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vcs {
    Mercurial,
    Git,
}

/// Find the branch label of the repository enclosing `start`.
///
/// Each directory from `start` up to the root is checked for Mercurial
/// first, then Git. Returns `Ok(None)` when no repository is found.
pub fn find_branch(start: &Path) -> Result<Option<String>, BranchError> {
    let Some((vcs, head)) = locate_branch_file(start) else {
        return Ok(None);
    };
    debug!(file = %head.display(), "reading branch file");

    let data = read_head(&head).map_err(|e| {
        debug!(error = %e, "branch file unreadable");
        BranchError::Io(head.display().to_string())
    })?;

    let label = match vcs {
        Vcs::Mercurial => parse_hg_branch(&data),
        Vcs::Git => parse_git_head(&data),
    };
    Ok(Some(label))
}

fn locate_branch_file(start: &Path) -> Option<(Vcs, PathBuf)> {
    for dir in start.ancestors() {
        let hg = dir.join(".hg").join("branch");
        if hg.is_file() {
            return Some((Vcs::Mercurial, hg));
        }

        let git = dir.join(".git");
        if git.is_dir() {
            let head = git.join("HEAD");
            if head.is_file() {
                return Some((Vcs::Git, head));
            }
        } else if git.is_file() {
            // Linked worktrees and submodules: `.git` holds "gitdir: PATH".
            if let Some(head) = resolve_gitdir_file(dir, &git) {
                return Some((Vcs::Git, head));
            }
        }
    }
    None
}

fn resolve_gitdir_file(dir: &Path, git_file: &Path) -> Option<PathBuf> {
    let content = read_head(git_file).ok()?;
    let gitdir = content.lines().next()?.strip_prefix("gitdir:")?.trim();
    if gitdir.is_empty() {
        return None;
    }

    let head = dir.join(gitdir).join("HEAD");
    head.is_file().then_some(head)
}

fn read_head(path: &Path) -> std::io::Result<String> {
    let mut buf = Vec::new();
    File::open(path)?
        .take(BRANCH_FILE_BUFSIZE)
        .read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Extract a branch name from the content of `.hg/branch`.
///
/// The file is a plain branch name; only the first line is kept.
pub fn parse_hg_branch(data: &str) -> String {
    data.lines().next().unwrap_or("").to_string()
}

/// Extract a label from the content of `.git/HEAD`.
///
/// - `ref: refs/heads/NAME` gives `NAME`
/// - any other `ref: REF` gives `REF` as-is
/// - a detached changeset id is cut to its first 6 characters plus `...`,
///   which is enough to notice the changeset moved
/// - anything else gives `???`
pub fn parse_git_head(data: &str) -> String {
    let line = data.lines().next().unwrap_or("");

    if let Some(branch) = line.strip_prefix(GIT_HEADS_PREFIX) {
        return branch.to_string();
    }

    if let Some(reference) = line.strip_prefix("ref:") {
        return reference.trim_start().to_string();
    }

    let id = line.trim();
    if id.chars().count() > 6 {
        let short: String = id.chars().take(6).collect();
        return format!("{}...", short);
    }

    "???".to_string()
}
