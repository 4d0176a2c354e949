//! Defines the custom error type for the `core` module.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for the `core` module.
///
/// Most failures during a run are swallowed locally (unreadable directories
/// are skipped, unreadable files become a sentinel string); only the two
/// user-visible failure points are represented here.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Represents an I/O error, typically from writing the output artifact.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// Represents a scan root that is missing or not a directory.
    #[error("Path is not a valid directory: {0}")]
    NotADirectory(PathBuf),
}
