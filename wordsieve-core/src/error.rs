//! Layered error types
//!
//! Build-time failures abort context construction entirely; scan-time
//! failures abort only the call that hit them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`Context`](crate::Context)
#[derive(Error, Debug)]
pub enum BuildError {
    /// The dictionary source could not be opened or read
    #[error("dictionary source unavailable: {path}: {source}")]
    SourceUnavailable {
        /// Path of the dictionary, or a description of the reader
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The entry arena could not be reserved
    #[error("cannot allocate dictionary arena for {capacity} words")]
    AllocationFailure {
        /// The requested word capacity
        capacity: usize,
    },

    /// A word starts with a double-byte lead byte but has no continuation byte
    #[error("dictionary word #{slot} is a lone double-byte lead byte 0x{byte:02x}")]
    EncodingViolation {
        /// Arena slot of the offending word
        slot: usize,
        /// The lead byte
        byte: u8,
    },

    /// A limit or argument is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while scanning an input buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The buffer is longer than the configured maximum input length
    #[error("input of {len} bytes exceeds the {max} byte limit")]
    InputTooLong {
        /// Buffer length
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// The buffer ends in the middle of a double-byte character
    #[error("truncated double-byte character at offset {position}")]
    EncodingError {
        /// Offset of the dangling lead byte
        position: usize,
    },
}

/// Any engine error
#[derive(Error, Debug)]
pub enum Error {
    /// Context construction failed
    #[error(transparent)]
    Build(#[from] BuildError),

    /// A scan failed
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Result type for build operations
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Result type for scan operations
pub type MatchResult<T> = std::result::Result<T, MatchError>;
