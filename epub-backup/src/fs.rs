//! Filesystem access used by the backup run.

use crate::error::CopyError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operations needed to back up a folder
pub trait FileSystem {
    /// Regular files directly inside `folder`, sorted by path
    fn list_files(&self, folder: &Path) -> io::Result<Vec<PathBuf>>;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Copy `src` to `dst` byte for byte, returning the number of bytes copied
    fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64, CopyError>;

    /// Create `path` and any missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_files(&self, folder: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(folder)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<u64, CopyError> {
        if is_same_file(src, dst) {
            return Err(CopyError::SameFile);
        }
        Ok(fs::copy(src, dst)?)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
