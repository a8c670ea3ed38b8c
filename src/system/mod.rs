//! Access to the machine the prompt is rendered on.
//!
//! Builtin commands never touch the environment directly; they ask a
//! [`System`]. [`HostSystem`] is the real implementation, tests use a fake
//! with fixed answers so renders stay deterministic.

mod host;
mod vcs;
mod working_dir;

pub use host::HostSystem;
pub use vcs::{BranchError, find_branch, parse_git_head, parse_hg_branch};
pub use working_dir::{WorkingDirError, resolve_working_dir};

use chrono::{DateTime, Local};
use thiserror::Error;

/// Failure to read the machine hostname.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostnameError {
    /// The hostname is not valid UTF-8.
    #[error("hostname is not valid UTF-8")]
    BadCharset,
    /// The lookup itself failed.
    #[error("hostname lookup failed: {0}")]
    Lookup(String),
}

/// Collaborators consulted by builtin commands.
pub trait System {
    /// Current working directory, as it should be displayed.
    fn working_dir(&self) -> Result<String, WorkingDirError>;

    /// Fully qualified hostname.
    fn hostname(&self) -> Result<String, HostnameError>;

    /// Branch or changeset label of the enclosing repository, if any.
    fn branch(&self) -> Result<Option<String>, BranchError>;

    /// Whether the effective user is the superuser.
    fn is_superuser(&self) -> bool;

    /// Current local time.
    fn now(&self) -> DateTime<Local>;
}
