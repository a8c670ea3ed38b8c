//! The real [`System`], backed by the running process and machine.

use super::vcs::{BranchError, find_branch};
use super::working_dir::{WorkingDirError, resolve_working_dir};
use super::{HostnameError, System};
use chrono::{DateTime, Local};
use std::env;

/// Collaborators answered by the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSystem;

impl HostSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for HostSystem {
    fn working_dir(&self) -> Result<String, WorkingDirError> {
        resolve_working_dir(env::current_dir(), env::var_os("PWD"))
    }

    fn hostname(&self) -> Result<String, HostnameError> {
        hostname::get()
            .map_err(|e| HostnameError::Lookup(e.to_string()))?
            .into_string()
            .map_err(|_| HostnameError::BadCharset)
    }

    fn branch(&self) -> Result<Option<String>, BranchError> {
        let cwd = env::current_dir().map_err(|_| BranchError::Cwd)?;
        find_branch(&cwd)
    }

    #[cfg(unix)]
    fn is_superuser(&self) -> bool {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    fn is_superuser(&self) -> bool {
        false
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
