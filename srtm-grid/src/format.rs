//! Supported SRTM grid formats.
//!
//! An SRTM tile is a square grid of samples whose side length depends on the
//! sampling resolution. The side length is always odd because the outermost
//! rows and columns are shared with the neighbouring tiles.

use std::fmt;

use crate::error::{Result, SrtmError};

/// Number of samples per row/column for SRTM1
const SRTM1_SIDE: usize = 3601;

/// Number of samples per row/column for SRTM3
const SRTM3_SIDE: usize = 1201;

/// Bytes per encoded sample (16-bit signed integer)
pub const BYTES_PER_SAMPLE: usize = 2;

/// Format of an SRTM elevation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridFormat {
    /// SRTM1: 1 arc-second (~30m) resolution, 3601×3601 samples
    Format1,
    /// SRTM3: 3 arc-second (~90m) resolution, 1201×1201 samples
    Format3,
}

impl GridFormat {
    /// Returns the number of samples per row/column.
    pub const fn side_length(self) -> usize {
        match self {
            GridFormat::Format1 => SRTM1_SIDE,
            GridFormat::Format3 => SRTM3_SIDE,
        }
    }

    /// Returns the total number of samples in a grid of this format.
    pub const fn element_count(self) -> usize {
        self.side_length() * self.side_length()
    }

    /// Returns the exact byte length of an encoded grid of this format.
    ///
    /// 25,934,402 bytes for SRTM1 and 2,884,802 bytes for SRTM3.
    pub const fn byte_len(self) -> usize {
        self.element_count() * BYTES_PER_SAMPLE
    }

    /// Returns the sampling interval in arc-seconds.
    pub fn arc_seconds(self) -> u8 {
        match self {
            GridFormat::Format1 => 1,
            GridFormat::Format3 => 3,
        }
    }

    /// Returns the approximate resolution in meters.
    pub fn meters(self) -> f64 {
        match self {
            GridFormat::Format1 => 30.0,
            GridFormat::Format3 => 90.0,
        }
    }

    /// Detect the format from the byte length of an encoded grid.
    ///
    /// # Errors
    ///
    /// Returns [`SrtmError::InvalidFileSize`] if the length matches neither format.
    pub fn from_byte_len(size: usize) -> Result<Self> {
        [GridFormat::Format1, GridFormat::Format3]
            .into_iter()
            .find(|format| format.byte_len() == size)
            .ok_or(SrtmError::InvalidFileSize { size })
    }

    /// Select the format by its arc-second resolution (1 or 3).
    pub fn from_arc_seconds(arc_seconds: u8) -> Option<Self> {
        match arc_seconds {
            1 => Some(GridFormat::Format1),
            3 => Some(GridFormat::Format3),
            _ => None,
        }
    }
}

impl fmt::Display for GridFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side_length();
        write!(f, "SRTM{} ({}x{})", self.arc_seconds(), side, side)
    }
}
