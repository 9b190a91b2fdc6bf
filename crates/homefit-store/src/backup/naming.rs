//! Backup and safety-copy file names

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn timestamp(at: &DateTime<Local>) -> String {
    at.format(STAMP_FORMAT).to_string()
}

/// `<prefix>_<YYYYMMDD_HHMMSS>.db`
pub fn backup_filename(prefix: &str, at: &DateTime<Local>) -> String {
    format!("{}_{}.db", prefix, timestamp(at))
}

/// True only for `<prefix>_<8 digits>_<6 digits>.db`
///
/// Anything else, including names with path components, is rejected.
pub fn is_backup_filename(prefix: &str, name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .and_then(|rest| rest.strip_suffix(".db"))
    else {
        return false;
    };

    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[9..].iter().all(u8::is_ascii_digit)
        && !prefix.contains(['/', '\\'])
}

/// `<db file name>.backup_<YYYYMMDD_HHMMSS>` next to the database
pub fn safety_copy_path(db_path: &Path, at: &DateTime<Local>) -> PathBuf {
    let name = db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    db_path.with_file_name(format!("{}.backup_{}", name, timestamp(at)))
}

/// `.<db file name>.restore` next to the database, where a restore
/// candidate is prepared
pub fn staging_path(db_path: &Path) -> PathBuf {
    let name = db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    db_path.with_file_name(format!(".{}.restore", name))
}
