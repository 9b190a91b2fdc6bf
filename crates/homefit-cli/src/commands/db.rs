//! Schema and status commands
//!
//! Usage:
//!   homefit init [--force]
//!   homefit migrate
//!   homefit info

use clap::Args;
use homefit_engine::Database;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Delete the existing database first (destroys all data)
    #[arg(long)]
    pub force: bool,
}

pub fn execute_init(db: &Database, args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = db.config().db_path.display();
    if db.initialize(args.force)? {
        println!("✓ Created database {}", path);
    } else {
        println!("Database {} already exists, schema is up to date", path);
    }
    Ok(())
}

pub fn execute_migrate(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let added = db.migrate()?;
    if added.is_empty() {
        println!("Schema is up to date");
    } else {
        for column in &added {
            println!("✓ Added column {}", column);
        }
    }
    Ok(())
}

pub fn execute_info(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    let info = db.database_info()?;
    println!("database: {}", db.config().db_path.display());
    if !info.exists {
        println!("exists: false");
        return Ok(());
    }

    println!("exists: true");
    println!("size: {} bytes", info.size);
    if let Some(modified) = info.modified {
        println!("modified: {}", modified.format("%Y-%m-%d %H:%M:%S"));
    }
    println!("tables: {}", info.tables_count);
    for (table, count) in &info.records_count {
        println!("  {}: {}", table, count);
    }
    Ok(())
}
