//! Access to the virtual process directory.
//!
//! Readers go through the [`ProcFs`] trait so that tests can substitute a
//! fixture tree or a fake that simulates processes exiting mid-scan.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Read-only view of a procfs-shaped directory.
pub trait ProcFs {
    /// Names of the immediate children of the root, numeric or not.
    fn entries(&self) -> io::Result<Vec<String>>;

    /// Raw contents of `<root>/<entry>/<file>`.
    fn read(&self, entry: &str, file: &str) -> io::Result<Vec<u8>>;
}

impl<T: ProcFs + ?Sized> ProcFs for &T {
    fn entries(&self) -> io::Result<Vec<String>> {
        (**self).entries()
    }

    fn read(&self, entry: &str, file: &str) -> io::Result<Vec<u8>> {
        (**self).read(entry, file)
    }
}

/// [`ProcFs`] backed by the real filesystem.
#[derive(Debug, Clone)]
pub struct RealProcFs {
    root: PathBuf,
}

impl RealProcFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for RealProcFs {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}

impl ProcFs for RealProcFs {
    fn entries(&self) -> io::Result<Vec<String>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.root)?.flatten() {
            // Non-UTF-8 names can never be PIDs.
            if let Some(name) = entry.file_name().to_str() {
                out.push(name.to_string());
            }
        }
        Ok(out)
    }

    fn read(&self, entry: &str, file: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(entry).join(file))
    }
}
