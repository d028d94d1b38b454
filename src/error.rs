//! Errors raised by the file driver.
//!
//! The transformer itself is infallible; only file access can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a file.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path is missing or not a regular file.
    #[error("Missing {}", .path.display())]
    MissingInput {
        /// Path given on the command line.
        path: PathBuf,
    },

    /// Reading the input failed (including invalid UTF-8).
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Creating or writing the output failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Convenience alias for driver results.
pub type Result<T> = std::result::Result<T, Error>;
