//! Working directory resolution.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons the working directory cannot be shown.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingDirError {
    #[error("permission denied")]
    NoAccess,
    #[error("directory not found")]
    NotFound,
    #[error("path is not valid UTF-8")]
    BadCharset,
    #[error("working directory unavailable")]
    Generic,
}

impl WorkingDirError {
    /// The text shown in the prompt instead of the path.
    pub fn placeholder(&self) -> &'static str {
        match self {
            WorkingDirError::NoAccess => "<path-no-access>",
            WorkingDirError::NotFound => "<path-not-found>",
            WorkingDirError::BadCharset => "<path-bad-charset>",
            WorkingDirError::Generic => "<path-error>",
        }
    }
}

impl From<&io::Error> for WorkingDirError {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => WorkingDirError::NoAccess,
            io::ErrorKind::NotFound => WorkingDirError::NotFound,
            _ => WorkingDirError::Generic,
        }
    }
}

/// Pick the path to display from `getcwd()` and the shell's `$PWD`.
///
/// `$PWD` wins when it points at the same directory, which keeps symlinked
/// paths the way the user typed them. A missing or removed directory maps
/// to a [`WorkingDirError`].
pub fn resolve_working_dir(
    cwd: io::Result<PathBuf>,
    pwd_env: Option<OsString>,
) -> Result<String, WorkingDirError> {
    let cwd = cwd.map_err(|e| WorkingDirError::from(&e))?;
    let cwd_meta = std::fs::metadata(&cwd).map_err(|_| WorkingDirError::Generic)?;

    let chosen = match pwd_env.map(PathBuf::from) {
        Some(pwd) if pwd.is_absolute() && same_file(&cwd_meta, &pwd) => pwd,
        _ => cwd,
    };

    chosen
        .into_os_string()
        .into_string()
        .map_err(|_| WorkingDirError::BadCharset)
}

#[cfg(unix)]
fn same_file(cwd_meta: &std::fs::Metadata, other: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match std::fs::metadata(other) {
        Ok(meta) => meta.ino() == cwd_meta.ino() && meta.dev() == cwd_meta.dev(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn same_file(_cwd_meta: &std::fs::Metadata, _other: &Path) -> bool {
    false
}
