//! Anonymous temporary files.

use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::error;

use super::error::{FsUtilError, Result};
use super::path::join_checked;

/// Fixed location used by [`create_temp_file`]. Memory-backed on Linux, so
/// the data never has to reach a disk.
pub const DEFAULT_TEMP_DIR: &str = "/dev/shm";

/// Permission bits for freshly created temp files, matching `mkstemp`.
const TEMP_FILE_MODE: u32 = 0o600;

/// How many random names to try before giving up on a saturated directory.
const NAME_ATTEMPTS: u32 = 32;

/// An open handle to a file whose directory entry has already been removed.
///
/// The file stays readable and writable through [`file`](Self::file) and its
/// storage is reclaimed by the OS when the handle is dropped.
/// [`path`](Self::path) records the name the file was created under; the
/// entry no longer exists and the path is kept for diagnostics only.
#[derive(Debug)]
pub struct TempFile {
    pub file: File,
    pub path: PathBuf,
}

/// Creates an anonymous temporary file inside `dir`.
///
/// A unique name of the form `<prefix>_<16 hex digits>` is generated with
/// exclusive-create semantics and mode 0600; name collisions retry with a
/// fresh name. The entry is unlinked immediately after creation, before the
/// handle is returned. If the unlink fails the handle is closed before the
/// error reaches the caller, so no descriptor leaks; the visible entry is
/// left behind in that case.
///
/// # Example
///
/// ```
/// use std::io::{Read, Seek, SeekFrom, Write};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut tmp = fsutil::create_temp_file_in(std::env::temp_dir(), "upload")?;
/// tmp.file.write_all(b"payload")?;
/// tmp.file.seek(SeekFrom::Start(0))?;
/// let mut buf = String::new();
/// tmp.file.read_to_string(&mut buf)?;
///
/// assert_eq!(buf, "payload");
/// assert!(!tmp.path.exists());
/// # Ok(())
/// # }
/// ```
pub fn create_temp_file_in<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<TempFile> {
    let dir = dir.as_ref();
    for _ in 0..NAME_ATTEMPTS {
        let code: u64 = rand::rng().random();
        let name = format!("{}_{:016x}", prefix, code);
        let path = join_checked(dir, OsStr::new(&name))?;
        let file = match OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .mode(TEMP_FILE_MODE)
            .open(&path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => {
                error!("open {} failed: {}", path.display(), err);
                return Err(FsUtilError::io("open", path, err));
            }
        };
        if let Err(err) = fs::remove_file(&path) {
            // `file` drops here, so the descriptor is closed before the
            // caller sees the failure. The visible entry stays behind.
            error!("unlink {} failed: {}", path.display(), err);
            return Err(FsUtilError::io("unlink", path, err));
        }
        return Ok(TempFile { file, path });
    }

    let exhausted = io::Error::new(io::ErrorKind::AlreadyExists, "no unused temp name found");
    error!("open {}/{}_* failed: {}", dir.display(), prefix, exhausted);
    Err(FsUtilError::io("open", dir, exhausted))
}

/// Creates an anonymous temporary file in [`DEFAULT_TEMP_DIR`] and returns
/// only the open handle.
pub fn create_temp_file(prefix: &str) -> Result<File> {
    create_temp_file_in(DEFAULT_TEMP_DIR, prefix).map(|temp| temp.file)
}
