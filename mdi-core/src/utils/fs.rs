//! Filesystem helpers that report failures as [`CoreError::Filesystem`].

use crate::error::CoreError;
use std::fs;
use std::io;
use std::path::Path;

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// Fails if `path` exists but is not a directory.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads a file to a string.
///
/// Returns `Ok(None)` when the file does not exist, so callers can fall back
/// to defaults without matching on `io::ErrorKind` themselves.
pub fn read_optional_file(path: &Path) -> Result<Option<String>, io::Error> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
