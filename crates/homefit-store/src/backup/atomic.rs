use crate::errors::{io_error_at, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.tmp", name))
}

/// Copy `source` to `target` so that `target` is either untouched or a
/// complete copy
///
/// The parent directory of `target` is created if needed. Returns the
/// number of bytes copied.
///
/// # Errors
/// `Io` on any file system failure; the temporary file is removed.
pub fn atomic_copy(source: &Path, target: &Path) -> Result<u64> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error_at("create_target_dir", parent, e))?;
    }

    let temp_path = temp_path_for(target);

    let copied = fs::copy(source, &temp_path)
        .and_then(|n| fs::File::open(&temp_path)?.sync_all().map(|_| n))
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            io_error_at("copy_to_temp", source, e)
        })?;

    fs::rename(&temp_path, target).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        io_error_at("rename_temp", target, e)
    })?;

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_creates_parent_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src.db");
        fs::write(&source, b"payload").unwrap();
        let target = dir.path().join("sub").join("dst.db");

        assert_eq!(atomic_copy(&source, &target).unwrap(), 7);
        assert_eq!(fs::read(&target).unwrap(), b"payload");

        let leftovers = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_missing_source_leaves_target_untouched() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("dst.db");
        fs::write(&target, b"original").unwrap();

        assert!(atomic_copy(&dir.path().join("absent.db"), &target).is_err());
        assert_eq!(fs::read(&target).unwrap(), b"original");
        assert!(!temp_path_for(&target).exists());
    }

    #[test]
    fn test_overwrites_existing_target() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src.db");
        let target = dir.path().join("dst.db");
        fs::write(&source, b"new").unwrap();
        fs::write(&target, b"old contents").unwrap();

        atomic_copy(&source, &target).unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");
    }
}
