//! Additive-only column upgrades
//!
//! Databases written by older builds may predate some columns. Each missing
//! column is added in place; nothing is dropped or rewritten.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// A column that must exist on an application table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub table: &'static str,
    pub column: &'static str,
    /// Type and constraints as written after the column name
    pub definition: &'static str,
}

pub const ADDITIVE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        table: "workout_logs",
        column: "completed_exercises",
        definition: "TEXT",
    },
    ColumnSpec {
        table: "user_prefs",
        column: "default_warmup_rest_seconds",
        definition: "INTEGER NOT NULL DEFAULT 120",
    },
];

/// Add every missing column from [`ADDITIVE_COLUMNS`]
///
/// Tables that do not exist are skipped. Returns the columns added, as
/// `table.column`.
///
/// # Errors
/// Engine failures.
pub fn apply_additive_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut added = Vec::new();

    for spec in ADDITIVE_COLUMNS {
        let columns = table_columns(conn, spec.table)?;
        if columns.is_empty() || columns.iter().any(|c| c == spec.column) {
            continue;
        }

        conn.execute(
            &format!(
                "ALTER TABLE {} ADD COLUMN {} {}",
                spec.table, spec.column, spec.definition
            ),
            [],
        )
        .map_err(from_rusqlite)?;

        tracing::debug!(table = spec.table, column = spec.column, "column added");
        added.push(format!("{}.{}", spec.table, spec.column));
    }

    Ok(added)
}

/// Column names of `table`, empty when the table is absent
fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .map_err(from_rusqlite)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(names)
}
