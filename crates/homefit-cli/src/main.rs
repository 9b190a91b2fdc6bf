//! Homefit CLI
//!
//! Database maintenance for the workout tracker: schema setup, backups,
//! restores and seed import.

use clap::{Parser, Subcommand};
use homefit_core::logging_facility::{init, Profile};
use homefit_engine::{Database, StoreConfig};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "homefit")]
#[command(about = "Homefit - workout template database tools", long_about = None)]
struct Cli {
    /// Database file
    #[arg(long, env = "HOMEFIT_DB", default_value = "workout_app.db", global = true)]
    db: PathBuf,

    /// Backup directory (defaults to `backups/` next to the database)
    #[arg(long, global = true)]
    backup_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database if it does not exist
    Init(commands::db::InitArgs),
    /// Add missing tables and columns to an existing database
    Migrate,
    /// Show size, tables and record counts
    Info,
    /// Backup operations
    Backup(commands::backup::BackupArgs),
    /// Seed import operations
    Seed(commands::seed::SeedArgs),
}

fn main() {
    init(Profile::Development);
    let cli = Cli::parse();

    let mut config = StoreConfig::new(cli.db);
    if let Some(dir) = cli.backup_dir {
        config = config.with_backup_dir(dir);
    }
    let db = Database::new(config);

    let result = match cli.command {
        Commands::Init(args) => commands::db::execute_init(&db, args),
        Commands::Migrate => commands::db::execute_migrate(&db),
        Commands::Info => commands::db::execute_info(&db),
        Commands::Backup(args) => commands::backup::execute(&db, args),
        Commands::Seed(args) => commands::seed::execute(&db, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
