//! Seed import command
//!
//! Usage: homefit seed import <PATH>

use clap::{Args, Subcommand};
use homefit_engine::Database;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file or a directory of seed files
    Import(ImportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to a seed YAML file or directory
    pub path: PathBuf,
}

pub fn execute(db: &Database, args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(db, import_args),
    }
}

fn execute_import(db: &Database, args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Seeding an absent database creates it
    db.migrate()?;

    let seed_files = if args.path.is_dir() {
        // Sorted for a stable import order
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        println!("Importing {}...", seed_file.display());
        let report = db.import_seed(&seed_file)?;
        println!(
            "✓ Imported {} workout sets, {} exercises{}",
            report.workoutset_codes.len(),
            report.exercise_count,
            if report.preferences_saved {
                ", preferences"
            } else {
                ""
            }
        );
    }
    Ok(())
}
