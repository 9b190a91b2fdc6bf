//! Backup commands
//!
//! Usage: homefit backup <create|list|delete|restore|restore-named>

use clap::{Args, Subcommand};
use homefit_engine::Database;
use homefit_store::RestoreOutcome;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    #[command(subcommand)]
    pub command: BackupCommand,
}

#[derive(Debug, Subcommand)]
pub enum BackupCommand {
    /// Copy the live database into the backup directory
    Create,
    /// List backups, newest first
    List,
    /// Delete a backup by file name
    Delete { filename: String },
    /// Replace the live database with any database file
    Restore { path: PathBuf },
    /// Replace the live database with a backup from the backup directory
    RestoreNamed { filename: String },
}

pub fn execute(db: &Database, args: BackupArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        BackupCommand::Create => {
            let path = db.create_backup()?;
            println!("✓ Backup written to {}", path.display());
        }
        BackupCommand::List => {
            let backups = db.list_backups()?;
            if backups.is_empty() {
                println!("No backups in {}", db.config().backup_dir.display());
            }
            for entry in backups {
                println!(
                    "{}\t{} bytes\t{}",
                    entry.filename,
                    entry.size,
                    entry.modified.format("%Y-%m-%d %H:%M:%S")
                );
            }
        }
        BackupCommand::Delete { filename } => {
            if db.delete_backup(&filename)? {
                println!("✓ Deleted {}", filename);
            } else {
                return Err(format!("no backup named '{}'", filename).into());
            }
        }
        BackupCommand::Restore { path } => report_restore(db.restore_from_backup(&path)?),
        BackupCommand::RestoreNamed { filename } => {
            report_restore(db.restore_from_named_backup(&filename)?)
        }
    }
    Ok(())
}

fn report_restore(outcome: RestoreOutcome) {
    if let Some(copy) = outcome.safety_copy {
        println!("Previous database saved to {}", copy.display());
    }
    for column in outcome.added_columns {
        println!("✓ Added column {}", column);
    }
    println!("✓ Restore complete");
}
