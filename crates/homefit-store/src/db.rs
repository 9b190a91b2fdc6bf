//! Database connection management

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Open (creating if absent) a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an existing database without write access and without creating it
pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply per-connection settings
///
/// Foreign keys are off by default in SQLite and must be enabled on every
/// connection for the exercise cascade to fire. The rollback journal is left
/// at its default so the database is always a single self-contained file.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .map_err(from_rusqlite)?;
    Ok(())
}

/// `open` followed by `configure`
pub fn open_configured<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = open(path)?;
    configure(&conn)?;
    Ok(conn)
}
