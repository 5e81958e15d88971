//! FsUtilError is the failure type shared by every operation in this crate.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, FsUtilError>;

/// The ways a filesystem primitive can fail.
///
/// Two conditions never surface here: a missing target during removal and an
/// already-existing directory during creation are both handled internally as
/// success.
#[derive(Debug, Error)]
pub enum FsUtilError {
    /// A computed path would exceed [`PATH_MAX`](crate::PATH_MAX). The
    /// operation fails instead of truncating the path.
    #[error("path too long: {}", path.display())]
    PathTooLong { path: PathBuf },

    /// An underlying OS call failed.
    #[error("{} failed on {}: {}", op, path.display(), source)]
    Io {
        /// Name of the failing primitive (`opendir`, `readdir`, `stat`,
        /// `unlink`, `rmdir`, `mkdir` or `open`).
        op: &'static str,
        /// The path the primitive was applied to.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsUtilError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsUtilError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// True when the failure was the path-length bound rather than the OS.
    pub fn is_path_too_long(&self) -> bool {
        matches!(self, FsUtilError::PathTooLong { .. })
    }

    /// The path the failing operation was applied to.
    pub fn path(&self) -> &Path {
        match self {
            FsUtilError::PathTooLong { path } | FsUtilError::Io { path, .. } => path,
        }
    }

    /// Raw OS error code, when the OS produced one.
    pub fn os_error(&self) -> Option<i32> {
        match self {
            FsUtilError::Io { source, .. } => source.raw_os_error(),
            FsUtilError::PathTooLong { .. } => None,
        }
    }
}
