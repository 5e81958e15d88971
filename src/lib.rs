//! This library provides a small set of filesystem utility primitives for
//! Unix: recursive directory creation (`mkdir -p` semantics), recursive
//! directory removal (`rm -rf` semantics), and anonymous temporary files that
//! are created with a unique name and unlinked immediately, so they live
//! exactly as long as their open handle.
//!
//! All operations are synchronous and blocking, hold no state between calls,
//! and release every handle they acquire on every exit path. Paths are
//! bounded by [`PATH_MAX`]; an operation that would cross the bound fails
//! with [`FsUtilError::PathTooLong`] instead of truncating. Failures are
//! additionally reported through `tracing` at the failing call site.
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//!
//! use fsutil::{create_dir_recursive, create_temp_file_in, remove_dir_recursive};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let base = std::env::temp_dir().join(format!("fsutil_doc_{}", std::process::id()));
//! create_dir_recursive(base.join("logs/archive"))?;
//! assert!(base.join("logs/archive").is_dir());
//!
//! let mut tmp = create_temp_file_in(&base, "scratch")?;
//! tmp.file.write_all(b"transient")?;
//! assert!(!tmp.path.exists());
//!
//! remove_dir_recursive(&base)?;
//! assert!(!base.exists());
//! # Ok(())
//! # }
//! ```

pub mod ops;

pub use ops::error::{FsUtilError, Result};

pub use ops::dir::{create_dir_for_file, create_dir_recursive, remove_dir_recursive, DIR_MODE};

pub use ops::path::PATH_MAX;

pub use ops::temp::{create_temp_file, create_temp_file_in, TempFile, DEFAULT_TEMP_DIR};
