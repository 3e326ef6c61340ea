//! Copy a folder of EPUBs into a backup folder under metadata-based names.
//!
//! Every archive directly inside the source folder is named from its OPF
//! metadata and copied unless the backup folder already holds a file with
//! that name. The first archive to claim a name wins; later ones are
//! reported as collisions and left alone. Per-file problems never stop the
//! run.

use crate::error::{BackupError, CopyError, NameError};
use crate::fs::FileSystem;
use crate::namer::{self, display_name};
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Destination name -> first source that produced it during a run
pub type CollisionMap = HashMap<String, PathBuf>;

/// Options for one backup run
#[derive(Debug, Clone, Copy, Default)]
pub struct BackupOptions {
    /// Log each OPF document while naming
    pub debug: bool,
    /// Report what would be copied without copying
    pub dry_run: bool,
    /// Create the backup folder when it does not exist
    pub create_backup_dir: bool,
}

/// A source skipped because its destination name was already taken
#[derive(Debug)]
pub struct Collision {
    pub name: String,
    pub source: PathBuf,
    /// Earlier source in this run with the same name, if any
    pub prior_source: Option<PathBuf>,
}

/// A source whose name could not be computed
#[derive(Debug)]
pub struct NameFailure {
    pub source: PathBuf,
    pub error: NameError,
}

/// A source that could not be copied
#[derive(Debug)]
pub struct CopyFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: CopyError,
}

/// Outcome of a backup run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// EPUBs found in the source folder
    pub found: usize,
    /// EPUBs copied (or that would be copied in a dry run)
    pub copied: usize,
    /// EPUBs without a usable title
    pub not_moved: Vec<PathBuf>,
    pub name_failures: Vec<NameFailure>,
    pub collisions: Vec<Collision>,
    pub copy_failures: Vec<CopyFailure>,
}

/// Back up every EPUB directly inside `source` into `backup`.
///
/// Only setup problems (missing folders, unreadable source listing) are
/// returned as errors; everything that goes wrong for a single file ends up
/// in the report.
pub fn backup_all(
    fs: &impl FileSystem,
    source: &Path,
    backup: &Path,
    options: &BackupOptions,
) -> Result<BatchReport, BackupError> {
    if !source.is_dir() {
        return Err(BackupError::SourceNotFound(source.to_path_buf()));
    }
    prepare_backup_dir(fs, backup, options)?;

    let epubs = find_epubs(fs, source)?;
    log::info!("{} epub(s) in {}", epubs.len(), source.display());

    let mut report = BatchReport {
        found: epubs.len(),
        ..Default::default()
    };
    let mut seen = CollisionMap::new();
    // Names claimed by a dry run, which leaves nothing on disk to check
    let mut planned: HashSet<String> = HashSet::new();

    for epub in epubs {
        let name = match namer::epub_name(&epub, options.debug) {
            Ok(name) => name,
            Err(error) => {
                log::warn!("{}: {}", display_name(&epub), error);
                report.name_failures.push(NameFailure {
                    source: epub,
                    error,
                });
                continue;
            }
        };

        if name.is_empty() {
            log::info!("{} not moved", epub.display());
            report.not_moved.push(epub);
            continue;
        }

        let destination = backup.join(&name);
        let taken = fs.exists(&destination) || planned.contains(&name);

        if taken {
            let prior_source = seen.get(&name).cloned();
            log::info!("target exists: {}", name);
            log::info!("source -> {}", display_name(&epub));
            if let Some(prior) = &prior_source {
                log::info!("first source -> {}", display_name(prior));
            }
            report.collisions.push(Collision {
                name: name.clone(),
                source: epub.clone(),
                prior_source,
            });
        } else if options.dry_run {
            log::info!("would copy {} -> {}", display_name(&epub), name);
            planned.insert(name.clone());
            report.copied += 1;
        } else {
            match fs.copy_file(&epub, &destination) {
                Ok(_) => {
                    log::info!("{} -> {}", display_name(&epub), name);
                    report.copied += 1;
                }
                Err(error) => {
                    log::warn!("{}: {}", destination.display(), error);
                    report.copy_failures.push(CopyFailure {
                        source: epub.clone(),
                        destination,
                        error,
                    });
                }
            }
        }

        seen.entry(name).or_insert(epub);
    }

    log::info!("{} epub(s) copied to {}", report.copied, backup.display());
    Ok(report)
}

fn prepare_backup_dir(
    fs: &impl FileSystem,
    backup: &Path,
    options: &BackupOptions,
) -> Result<(), BackupError> {
    if backup.is_dir() {
        return Ok(());
    }
    if !options.create_backup_dir {
        return Err(BackupError::BackupNotFound(backup.to_path_buf()));
    }
    if options.dry_run {
        log::info!("would create {}", backup.display());
        return Ok(());
    }

    fs.create_dir_all(backup)
        .map_err(|source| BackupError::CreateBackupDir {
            path: backup.to_path_buf(),
            source,
        })
}

/// EPUB files directly inside `folder`, in listing order
fn find_epubs(fs: &impl FileSystem, folder: &Path) -> Result<Vec<PathBuf>, BackupError> {
    let files = fs.list_files(folder).map_err(|source| BackupError::List {
        path: folder.to_path_buf(),
        source,
    })?;
    Ok(files.into_iter().filter(|path| is_epub(path)).collect())
}

/// Check if a path is an epub file (case-insensitive)
fn is_epub(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("epub"))
        .unwrap_or(false)
}
