//! Shared sandbox helper for the integration tests.

use std::env;
use std::path::{Path, PathBuf};

use rand::Rng;

/// A throwaway directory under the system temp dir with a random suffix,
/// removed on drop so a failed test leaves no litter behind.
pub struct Sandbox {
    path: PathBuf,
}

impl Sandbox {
    pub fn new(tag: &str) -> Self {
        let path = env::temp_dir().join(format!(
            "fsutil_{}_{:016x}",
            tag,
            rand::rng().random::<u64>()
        ));
        fsutil::create_dir_recursive(&path).expect("failed to create sandbox directory");
        Sandbox { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        if let Err(e) = fsutil::remove_dir_recursive(&self.path) {
            eprintln!("failed to remove sandbox {}: {}", self.path.display(), e);
        }
    }
}
