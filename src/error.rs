//! Error types for the wp-readme library.

use std::io;
use thiserror::Error;

/// Result type alias for wp-readme operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a readme.txt.
///
/// The conversion pipeline itself never fails; these cover the Writer's
/// filesystem steps. Display strings are the user-facing messages printed
/// by the CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// The source README file does not exist.
    #[error("File not found.")]
    NotFound,

    /// The destination directory cannot be statted or is not a directory.
    #[error("Target directory is not writable.")]
    NotWritable,

    /// The output file already exists and rejected a write probe.
    #[error("readme.txt already exists and is not writable.")]
    AlreadyExistsNotWritable,

    /// The final content write failed.
    #[error("Failed to save readme.txt")]
    WriteFailed,

    /// I/O error when reading the source file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
