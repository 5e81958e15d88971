//! Recursive directory creation and removal.

use std::fs::{self, DirBuilder};
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Component, Path, PathBuf};

use tracing::error;

use super::error::{FsUtilError, Result};
use super::path::{join_checked, PATH_MAX};

/// Permission bits applied to every directory created by
/// [`create_dir_recursive`] (owner rwx, group/other rx), subject to the
/// process umask.
pub const DIR_MODE: u32 = 0o755;

/// Creates the directory at `path` together with every missing parent, like
/// `mkdir -p`.
///
/// The path is walked from its first segment; each prefix that does not
/// exist yet is created with mode [`DIR_MODE`]. A prefix that already exists
/// counts as success, whatever occupies it; when the occupant is not a
/// directory the walk fails on the segment after it with the OS error.
/// Directories created before a failure are left in place.
///
/// # Example
///
/// ```
/// let base = std::env::temp_dir().join(format!("fsutil_mkdir_doc_{}", std::process::id()));
/// fsutil::create_dir_recursive(base.join("a/b"))?;
/// assert!(base.join("a/b").is_dir());
/// fsutil::remove_dir_recursive(&base)?;
/// # Ok::<(), fsutil::FsUtilError>(())
/// ```
pub fn create_dir_recursive<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut prefix = PathBuf::new();
    for component in path.components() {
        prefix.push(component);
        if let Component::Normal(_) = component {
            match DirBuilder::new().mode(DIR_MODE).create(&prefix) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
                Err(err) => {
                    error!("mkdir {} failed: {}", prefix.display(), err);
                    return Err(FsUtilError::io("mkdir", prefix, err));
                }
            }
        }
    }
    Ok(())
}

/// Creates every directory leading up to the file named by `path`, without
/// creating the file itself.
///
/// A bare filename with no directory component is a trivial success with no
/// filesystem action.
pub fn create_dir_for_file<P: AsRef<Path>>(path: P) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_recursive(parent),
        _ => Ok(()),
    }
}

/// Deletes the directory at `path` and everything beneath it, like `rm -rf`.
///
/// A missing path is a success, which also makes the operation idempotent.
/// Entries are processed in whatever order the directory listing yields
/// them; symlinks are unlinked, never followed. The first failure aborts the
/// walk and propagates; whatever was already deleted stays deleted, with no
/// rollback and no confirmation.
pub fn remove_dir_recursive<P: AsRef<Path>>(path: P) -> Result<()> {
    remove_tree(path.as_ref())
}

fn remove_tree(path: &Path) -> Result<()> {
    // The working path must leave room for a trailing separator.
    if path.as_os_str().as_bytes().len() + 1 >= PATH_MAX {
        error!("path too long: {}", path.display());
        return Err(FsUtilError::PathTooLong {
            path: path.to_path_buf(),
        });
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => {
            error!("opendir {} failed: {}", path.display(), err);
            return Err(FsUtilError::io("opendir", path, err));
        }
    };

    // `entries` owns the directory handle; every exit below releases it
    // before the caller sees the result.
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                error!("readdir {} failed: {}", path.display(), err);
                return Err(FsUtilError::io("readdir", path, err));
            }
        };
        let child = join_checked(path, &entry.file_name())?;
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                error!("stat {} failed: {}", child.display(), err);
                return Err(FsUtilError::io("stat", child, err));
            }
        };
        if file_type.is_dir() {
            remove_tree(&child)?;
        } else if let Err(err) = fs::remove_file(&child) {
            error!("unlink {} failed: {}", child.display(), err);
            return Err(FsUtilError::io("unlink", child, err));
        }
    }

    fs::remove_dir(path).map_err(|err| {
        error!("rmdir {} failed: {}", path.display(), err);
        FsUtilError::io("rmdir", path, err)
    })
}
