//! Error type for block-to-CSV conversion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a conversion run.
///
/// Malformed input lines are never errors; only file operations fail.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file is missing, unreadable, or not valid UTF-8.
    #[error("cannot read input file '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("cannot write output file '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV writer rejected a row or failed to flush into its sink.
    #[error("cannot write CSV to '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ConvertError {
    /// Path of the file whose operation failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            ConvertError::InputRead { path, .. }
            | ConvertError::OutputWrite { path, .. }
            | ConvertError::Csv { path, .. } => path,
        }
    }
}
