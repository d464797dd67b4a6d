//! Custom error types for the plt-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum PltError {
    /// An error originating from I/O operations (loading the file into memory).
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A field read would run past the end of the buffer.
    #[error("Truncated input while reading {context} at offset {offset}")]
    TruncatedInput { context: &'static str, offset: usize },

    /// A string decode exhausted the buffer before reaching a terminator slot.
    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// The header file-type code is not one of FULL (0), GRID (1) or SOLUTION (2).
    #[error("Unknown file type code: {0}")]
    UnknownFileType(i16),

    /// A sentinel scan exhausted its search space before finding the required matches.
    #[error("Marker {sentinel} not found: expected {expected} match(es), found {found}")]
    MarkerNotFound {
        sentinel: f32,
        expected: usize,
        found: usize,
    },

    /// The data section does not contain one zone record per header zone.
    #[error("Inconsistent zone count: header declares {header}, data section has {data}")]
    InconsistentZoneCount { header: usize, data: usize },
}

/// A convenience `Result` type alias using the crate's `PltError` type.
pub type Result<T> = std::result::Result<T, PltError>;
