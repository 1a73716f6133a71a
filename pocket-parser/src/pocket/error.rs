//! Error types for loading source files

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning or reading the source directories.
///
/// Parsing itself never fails, so every variant wraps an I/O error together with the
/// path that caused it.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot list directory {}", .path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoaderError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoaderError::ListDir { path, .. } | LoaderError::ReadFile { path, .. } => path,
        }
    }
}
