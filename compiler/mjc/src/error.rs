//! Driver failures.
//!
//! These are failures of the driver itself: a missing path, an unreadable
//! file, a broken output stream. Problems in the MiniJ source are never
//! errors here; they end up in the file's `ErrorReporter`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl DriverError {
    /// Classify a failure to read `path`.
    #[cold]
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DriverError::NotFound(path.to_path_buf())
        } else {
            DriverError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
