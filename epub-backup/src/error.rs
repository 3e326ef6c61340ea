use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to compute a destination name for one archive
#[derive(Error, Debug)]
pub enum NameError {
    #[error("EPUB not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read EPUB archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failure to copy one archive into the backup folder
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Permission denied")]
    PermissionDenied,

    #[error("Source and destination represent the same file")]
    SameFile,

    #[error("Error occurred while copying file: {0}")]
    Other(io::Error),
}

impl From<io::Error> for CopyError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => CopyError::PermissionDenied,
            _ => CopyError::Other(err),
        }
    }
}

/// Failure that prevents a backup run from starting
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Source folder not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Backup folder not found: {} (use --create-backup-dir to create it)", .0.display())]
    BackupNotFound(PathBuf),

    #[error("Failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create backup folder {}: {source}", path.display())]
    CreateBackupDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
