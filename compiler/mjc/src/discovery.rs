//! Input discovery.
//!
//! A file path names a single input. A directory path names every regular
//! file directly inside it, sorted by path. Hidden entries and
//! subdirectories are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::DriverError;

/// Resolve `path` to the list of files to check.
pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let metadata = fs::metadata(path).map_err(|e| DriverError::read(path, e))?;
    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| DriverError::read(path, e))? {
        let entry = entry.map_err(|e| DriverError::read(path, e))?;
        let file = entry.path();
        if is_hidden(&file) || file.is_dir() {
            continue;
        }
        files.push(file);
    }
    files.sort();
    Ok(files)
}

/// Whether a test file is expected to be rejected: its name contains `fail`.
pub fn expects_failure(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains("fail"))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
