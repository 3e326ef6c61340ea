mod archive;
mod backup;
mod config;
mod error;
mod fs;
mod namer;

use anyhow::{Context, Result};
use backup::{BackupOptions, BatchReport};
use clap::{Parser, Subcommand};
use config::BackupConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "epub-backup",
    about = "Back up epub files under names built from their metadata",
    long_about = "Copies every epub in a folder to a backup folder, naming each copy \
                  \"Title - Author[Year].epub\" from the book's OPF metadata. \
                  Existing files in the backup folder are never overwritten."
)]
#[command(version)]
struct Args {
    /// Folder containing the epub files (defaults to the configured source_dir)
    source: Option<PathBuf>,

    /// Folder receiving the renamed copies (defaults to the configured backup_dir)
    backup: Option<PathBuf>,

    /// Show what would be copied without copying anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Create the backup folder if it does not exist
    #[arg(long)]
    create_backup_dir: bool,

    /// Enable debug mode for verbose output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Configuration subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default source folder
    SetSourceDir {
        /// Folder containing epub files
        path: PathBuf,
    },
    /// Set the default backup folder
    SetBackupDir {
        /// Folder receiving the renamed copies
        path: PathBuf,
    },
}

/// Handle config subcommands
fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = BackupConfig::load()?;
            let path = BackupConfig::config_path()?;
            println!("Config file: {}", path.display());
            println!();
            println!("{:#?}", config);
        }
        ConfigAction::SetSourceDir { path } => {
            let mut config = BackupConfig::load()?;
            config.source_dir = Some(path.clone());
            config.save()?;
            println!("Default source folder set to: {}", path.display());
        }
        ConfigAction::SetBackupDir { path } => {
            let mut config = BackupConfig::load()?;
            config.backup_dir = Some(path.clone());
            config.save()?;
            println!("Default backup folder set to: {}", path.display());
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let filter = if debug {
        "epub_backup=debug,opf_meta=debug"
    } else {
        "epub_backup=info,opf_meta=info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn print_summary(report: &BatchReport, dry_run: bool) {
    for collision in &report.collisions {
        println!("target exists: {}", collision.name);
        println!("  source -> {}", namer::display_name(&collision.source));
        if let Some(prior) = &collision.prior_source {
            println!("  first source -> {}", namer::display_name(prior));
        }
    }
    for failure in &report.copy_failures {
        println!(
            "copy failed: {} -> {}: {}",
            failure.source.display(),
            failure.destination.display(),
            failure.error
        );
    }
    for failure in &report.name_failures {
        println!("unreadable: {}: {}", failure.source.display(), failure.error);
    }

    println!("---");
    if dry_run {
        println!("Dry run, nothing was copied");
    }
    println!(
        "Found: {}, Copied: {}, Not moved: {}, Already present: {}, Errors: {}",
        report.found,
        report.copied,
        report.not_moved.len(),
        report.collisions.len(),
        report.name_failures.len() + report.copy_failures.len()
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Handle config subcommands first
    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    let config = BackupConfig::load().context("Failed to load configuration")?;
    let debug = args.debug || config.debug;
    init_logging(debug);

    let source = args
        .source
        .or(config.source_dir)
        .context("No source folder given. Pass SOURCE or run 'epub-backup config set-source-dir'.")?;
    let backup = args
        .backup
        .or(config.backup_dir)
        .context("No backup folder given. Pass BACKUP or run 'epub-backup config set-backup-dir'.")?;

    let options = BackupOptions {
        debug,
        dry_run: args.dry_run,
        create_backup_dir: args.create_backup_dir || config.create_backup_dir,
    };

    let report = backup::backup_all(&fs::StdFileSystem, &source, &backup, &options)
        .context("Backup failed")?;

    print_summary(&report, options.dry_run);

    Ok(())
}
