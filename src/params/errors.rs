/// Errors from loading, transforming, and writing parameter files.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a parameters file.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The input file could not be opened or read.
    #[error("Cannot read parameters file '{}': {source}", .path.display())]
    ReadInput {
        /// The input path as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The input file is not valid JSON, or its top level is not an array.
    #[error("Parameters file '{}' is not a JSON array of records: {source}", .path.display())]
    ParseInput {
        /// The input path.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A record lacks `ParameterKey`/`ParameterValue` or holds a non-string value.
    #[error("Record {index} in '{}' is invalid: {source}", .path.display())]
    InvalidRecord {
        /// The input path.
        path: PathBuf,
        /// Zero-based position of the record in the input array.
        index: usize,
        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// The output file could not be created or written.
    #[error("Cannot write '{}': {source}", .path.display())]
    WriteOutput {
        /// The output path as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The confirmation or echoed mapping could not be written to stdout.
    #[error("Cannot write to stdout: {source}")]
    WriteStdout {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Serializing the result failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Exit code mapping for `ParamsError` variants.
impl ParamsError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReadInput { .. } | Self::ParseInput { .. } | Self::InvalidRecord { .. } => 3,
            Self::WriteOutput { .. } => 4,
            Self::WriteStdout { .. } | Self::Serialize(_) => 1,
        }
    }
}
