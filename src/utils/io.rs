//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Create a directory and any missing parents.
pub fn ensure_dir(dir: &Path, operation: &str) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
    }
    Ok(())
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// Readers of the target path see either the previous content or the new
/// content, never a partial write.
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path.display()),
            Some(operation.to_string()),
        )
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("{} (write temp)", operation))))?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::internal_io(
            e.to_string(),
            Some(format!("{} (rename)", operation)),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");

        ensure_dir(&nested, "test mkdir").unwrap();
        ensure_dir(&nested, "test mkdir").unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_fails_when_path_is_a_file() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("taken");
        fs::write(&file, "x").unwrap();

        let err = ensure_dir(&file.join("child"), "test mkdir").unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_atomic_overwrites_existing_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out.json");

        write_file_atomic(&path, "first version, longer", "test write").unwrap();
        write_file_atomic(&path, "second", "test write").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!temp.path().join("out.json.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let temp = tempfile::tempdir().unwrap();
        let target = temp.path().join("beta.json");
        fs::create_dir(&target).unwrap();

        let err = write_file_atomic(&target, "{}", "test write").unwrap_err();

        assert_eq!(err.details["context"], "test write (rename)");
        assert!(!temp.path().join("beta.json.tmp").exists());
    }

    #[test]
    fn write_file_atomic_returns_error_for_missing_dir() {
        let result = write_file_atomic(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            "test write",
        );
        assert_eq!(result.unwrap_err().code.as_str(), "internal.io_error");
    }
}
