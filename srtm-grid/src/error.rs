//! Error types for the srtm-grid library.

use std::fmt;

use thiserror::Error;

use crate::coords::Point;
use crate::format::GridFormat;

/// The location that failed a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// A linear index into the row-major sample array.
    Index(i64),
    /// An (x, y) grid coordinate.
    Point(Point),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Index(index) => write!(f, "index {}", index),
            Position::Point(point) => write!(f, "point {}", point),
        }
    }
}

/// Errors that can occur when decoding or querying an elevation grid.
#[derive(Error, Debug)]
pub enum SrtmError {
    /// IO error from the underlying reader or file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a full grid could be read.
    #[error("Truncated grid data: read {actual} of {expected} bytes")]
    Truncated { expected: usize, actual: usize },

    /// Byte length doesn't match SRTM1 or SRTM3 format.
    #[error("Invalid file size: {size} bytes (expected 25934402 for SRTM1 or 2884802 for SRTM3)")]
    InvalidFileSize { size: usize },

    /// Index or point lies outside the grid.
    #[error("{position} is out of bounds for {format}")]
    OutOfBounds {
        position: Position,
        format: GridFormat,
    },

    /// Percentile outside the inclusive range 0.0..=1.0.
    #[error("Invalid percentile: {p} (valid: 0.0 to 1.0 inclusive)")]
    InvalidPercentile { p: f64 },

    /// A `.hgt.zip` archive could not be read or contains no `.hgt` entry.
    #[error("Archive error: {0}")]
    Archive(String),
}

/// Result type alias using [`SrtmError`].
pub type Result<T> = std::result::Result<T, SrtmError>;
