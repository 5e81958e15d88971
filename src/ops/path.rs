//! Shared path-length convention.
//!
//! Paths handed to the OS are bounded: a path is representable only when its
//! byte length is strictly below [`PATH_MAX`]. Joins that would cross the
//! bound fail instead of truncating.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tracing::error;

use super::error::{FsUtilError, Result};

/// Maximum length of a path in bytes, including the terminating byte the OS
/// adds. The Linux limit.
pub const PATH_MAX: usize = 4096;

/// Joins `dir` and a single entry `name`, failing with
/// [`FsUtilError::PathTooLong`] when the combined path would exceed
/// [`PATH_MAX`].
pub(crate) fn join_checked(dir: &Path, name: &OsStr) -> Result<PathBuf> {
    let dir_bytes = dir.as_os_str().as_bytes();
    let sep = usize::from(!dir_bytes.ends_with(b"/"));
    if dir_bytes.len() + sep + name.as_bytes().len() >= PATH_MAX {
        error!("path too long: {}/{}", dir.display(), name.to_string_lossy());
        return Err(FsUtilError::PathTooLong {
            path: dir.join(name),
        });
    }
    Ok(dir.join(name))
}
