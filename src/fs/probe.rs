//! The file-system collaborator used by the path checks.

use std::io;
use std::path::{Path, PathBuf};

/// Blocking access to a file system.
///
/// Answers are taken as authoritative at the time of the call; nothing is
/// cached between probes.
pub trait FileSystem: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// The entries directly inside the directory at `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).read_dir(path)
    }
}

/// The operating system's file system, through `std::fs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let exists = path.exists();
        #[cfg(feature = "tracing")]
        tracing::trace!(path = %path.display(), exists, "probed path");
        exists
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(path = %path.display(), entries = entries.len(), "listed directory");
        Ok(entries)
    }
}
