//! Decoding SRTM elevation grids.
//!
//! This module provides [`ElevationGrid`], an owned row-major grid of signed
//! 16-bit samples, and the decoders that build it from a byte stream, an
//! `.hgt` file or a `.hgt.zip` archive.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Result, SrtmError};
use crate::format::{GridFormat, BYTES_PER_SAMPLE};

/// Value indicating no data (void) in SRTM files
pub const VOID_VALUE: i16 = -32768;

/// Decode one sample. SRTM data is big-endian regardless of host byte order.
#[inline]
fn decode_sample(bytes: [u8; BYTES_PER_SAMPLE]) -> i16 {
    i16::from_be_bytes(bytes)
}

/// A decoded SRTM elevation grid.
///
/// Holds exactly `format.element_count()` samples in row-major order, origin
/// at the top-left corner. Samples are elevations in meters; [`VOID_VALUE`]
/// marks missing data.
///
/// # Example
///
/// ```ignore
/// use srtm_grid::ElevationGrid;
///
/// let grid = ElevationGrid::from_file("N35E138.hgt")?;
/// let (min, max) = grid.min_max();
/// println!("{}: {}m .. {}m", grid.format(), min, max);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationGrid {
    data: Vec<i16>,
    format: GridFormat,
}

impl ElevationGrid {
    /// Decode a grid of the given format from a byte stream.
    ///
    /// Reads exactly `format.byte_len()` bytes and leaves anything after them
    /// unread. A short stream yields no grid at all.
    ///
    /// # Errors
    ///
    /// - [`SrtmError::Truncated`] if the stream ends early
    /// - [`SrtmError::Io`] if the underlying reader fails
    pub fn decode<R: Read>(reader: R, format: GridFormat) -> Result<Self> {
        let expected = format.byte_len();
        let mut bytes = Vec::with_capacity(expected);
        reader.take(expected as u64).read_to_end(&mut bytes)?;

        if bytes.len() < expected {
            tracing::warn!(
                format = %format,
                expected,
                actual = bytes.len(),
                "Grid data is truncated"
            );
            return Err(SrtmError::Truncated {
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(BYTES_PER_SAMPLE)
            .map(|pair| decode_sample([pair[0], pair[1]]))
            .collect();

        tracing::debug!(format = %format, bytes = expected, "Decoded elevation grid");

        Ok(Self { data, format })
    }

    /// Load a grid from an `.hgt` file.
    ///
    /// The format (SRTM1 vs SRTM3) is detected from the file size.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or memory-mapped
    /// - The file size doesn't match SRTM1 or SRTM3 format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;

        // SAFETY: Memory mapping is safe as long as the file is not modified
        // while mapped. We open the file read-only and drop the mapping
        // before returning.
        let mmap = unsafe { Mmap::map(&file)? };

        let format = GridFormat::from_byte_len(mmap.len())?;
        tracing::debug!(
            path = %path.as_ref().display(),
            format = %format,
            "Detected grid format from file size"
        );

        Self::decode(&mmap[..], format)
    }

    /// Load a grid from the given file using an explicit format.
    ///
    /// Unlike [`Self::from_file`], the file size is not checked up front, so a
    /// short file surfaces as [`SrtmError::Truncated`].
    pub fn from_file_with_format<P: AsRef<Path>>(path: P, format: GridFormat) -> Result<Self> {
        let file = File::open(&path)?;
        Self::decode(std::io::BufReader::new(file), format)
    }

    /// Load a grid from the first `.hgt` entry of a `.hgt.zip` archive.
    ///
    /// The format is detected from the entry's uncompressed size.
    pub fn from_zip<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| SrtmError::Archive(e.to_string()))?;

        for i in 0..archive.len() {
            let entry = archive
                .by_index(i)
                .map_err(|e| SrtmError::Archive(e.to_string()))?;

            if !entry.name().to_ascii_lowercase().ends_with(".hgt") {
                continue;
            }

            let format = GridFormat::from_byte_len(entry.size() as usize)?;
            tracing::debug!(
                archive = %path.as_ref().display(),
                entry = entry.name(),
                format = %format,
                "Decoding grid from archive entry"
            );
            return Self::decode(entry, format);
        }

        Err(SrtmError::Archive(format!(
            "No .hgt file found in {}",
            path.as_ref().display()
        )))
    }

    /// Build a grid from already decoded samples.
    ///
    /// # Errors
    ///
    /// Returns [`SrtmError::InvalidFileSize`] if `data` doesn't hold exactly
    /// `format.element_count()` samples.
    pub fn from_samples(format: GridFormat, data: Vec<i16>) -> Result<Self> {
        if data.len() != format.element_count() {
            return Err(SrtmError::InvalidFileSize {
                size: data.len() * BYTES_PER_SAMPLE,
            });
        }
        Ok(Self { data, format })
    }

    /// Create a grid where every sample is zero.
    pub fn zeroed(format: GridFormat) -> Self {
        Self::filled(format, 0)
    }

    /// Create a grid where every sample has the same value.
    pub fn filled(format: GridFormat, value: i16) -> Self {
        Self {
            data: vec![value; format.element_count()],
            format,
        }
    }

    /// Returns the format of this grid.
    pub fn format(&self) -> GridFormat {
        self.format
    }

    /// Returns the number of samples per row/column.
    pub fn side_length(&self) -> usize {
        self.format.side_length()
    }

    /// Returns the samples in row-major order.
    pub fn samples(&self) -> &[i16] {
        &self.data
    }
}
