//! Filesystem helpers for batch conversion.
//!
//! Every failure is mapped to an [`IoError`] carrying the offending path so
//! callers can log it without further context.

use crate::error::{IoError, Result};
use std::path::{Path, PathBuf};

/// Lists entries of `dir` whose extension is exactly `extension`.
///
/// The comparison is case-sensitive and excludes the leading dot, so
/// `"md"` matches `notes.md` but not `NOTES.MD` or `.md`. Entries are
/// returned sorted by file name.
///
/// # Errors
///
/// Returns [`IoError::ListFailed`] if the directory cannot be read.
pub fn list_files_with_extension<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
    let dir_ref = dir.as_ref();
    let list_failed = |e: std::io::Error| IoError::ListFailed {
        path: dir_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir_ref).map_err(list_failed)? {
        let path = entry.map_err(list_failed)?.path();
        if path.extension().is_some_and(|ext| ext == extension) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Reads a file to a string.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] if the file cannot be read or is not
/// valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use md_sections::io::read_file;
///
/// let content = read_file("docs/index.md").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    std::fs::read_to_string(path_ref).map_err(|e| {
        IoError::ReadFailed {
            path: path_ref.to_string_lossy().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Creates `dir` and any missing parents.
///
/// # Errors
///
/// Returns [`IoError::DirectoryFailed`] if the directory cannot be created.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir_ref = dir.as_ref();
    if dir_ref.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(dir_ref).map_err(|e| IoError::DirectoryFailed {
        path: dir_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Writes content to a file, replacing any existing file.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file cannot be written.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_list_filters_extension() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.md", "a.md", "c.txt", "D.MD", ".md", "e.md.bak", "f.markdown"] {
            std::fs::write(temp_dir.path().join(name), "x").unwrap();
        }

        let files = list_files_with_extension(temp_dir.path(), "md").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let result = list_files_with_extension(temp_dir.path().join("missing"), "md");
        assert!(matches!(result, Err(Error::Io(IoError::ListFailed { .. }))));
    }

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("doc.md");
        std::fs::write(&file_path, "# Hello, 世界").unwrap();

        assert_eq!(read_file(&file_path).unwrap(), "# Hello, 世界");
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.md");
        std::fs::write(&file_path, [0xff, 0xfe, 0x23]).unwrap();

        let result = read_file(&file_path);
        assert!(matches!(result, Err(Error::Io(IoError::ReadFailed { .. }))));
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = read_file("/nonexistent/path/file.md").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/file.md"));
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Idempotent
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_dir_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("occupied");
        std::fs::write(&file_path, "x").unwrap();

        let result = ensure_dir(&file_path);
        assert!(matches!(result, Err(Error::Io(IoError::DirectoryFailed { .. }))));
    }

    #[test]
    fn test_write_file_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.txt");

        write_file(&file_path, "first").unwrap();
        write_file(&file_path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let result = write_file(temp_dir.path().join("nope/out.txt"), "x");
        assert!(matches!(result, Err(Error::Io(IoError::WriteFailed { .. }))));
    }
}
