//! Grayscale rendering of elevation grids.
//!
//! Two mappings are provided:
//!
//! - **8-bit centered**: a chosen elevation maps to mid-gray (128), one meter
//!   per gray level, saturating at 0 and 255. No scaling is applied.
//! - **16-bit full range**: every sample is shifted into unsigned range
//!   (`-32768 -> 0`, `0 -> 32768`, `32767 -> 65535`) and stored big-endian.
//!   The mapping is lossless.
//!
//! Buffers are row-major with pixel `i` taken from sample `i`. Encoding them
//! into PNG/TIFF containers is left to the caller.

use crate::grid::ElevationGrid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Gray level that the centering elevation maps to
const MID_GRAY: i32 = 128;

/// Offset that shifts a signed 16-bit sample into unsigned range
const FULL_RANGE_OFFSET: i32 = 32768;

/// Map a sample to an 8-bit gray level, centered on `center`.
#[inline]
fn centered_pixel(value: i16, center: i16) -> u8 {
    // i32 holds value - center + 128 for every pair of i16 inputs.
    (i32::from(value) - i32::from(center) + MID_GRAY).clamp(0, 255) as u8
}

/// Shift a signed sample into unsigned 16-bit range.
#[inline]
pub fn elevation_to_full_range(value: i16) -> u16 {
    ((i32::from(value) + FULL_RANGE_OFFSET) & 0xFFFF) as u16
}

/// Inverse of [`elevation_to_full_range`].
#[inline]
pub fn full_range_to_elevation(value: u16) -> i16 {
    (i32::from(value) - FULL_RANGE_OFFSET) as i16
}

/// An 8-bit single-channel image, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gray8Image {
    side: usize,
    pixels: Vec<u8>,
}

impl Gray8Image {
    /// Width and height in pixels.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Gray level at the given pixel, `None` if outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.side || y >= self.side {
            return None;
        }
        Some(self.pixels[y * self.side + x])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}

/// A 16-bit single-channel image, two big-endian bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gray16Image {
    side: usize,
    pixels: Vec<u8>,
}

impl Gray16Image {
    /// Width and height in pixels.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Gray level at the given pixel, `None` if outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.side || y >= self.side {
            return None;
        }
        let offset = (y * self.side + x) * 2;
        Some(u16::from_be_bytes([
            self.pixels[offset],
            self.pixels[offset + 1],
        ]))
    }

    /// Gray levels in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u16> + '_ {
        self.pixels
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
    }

    /// Raw big-endian pixel bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

/// Bit depth of a [`RenderedImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    Sixteen,
}

/// Either kind of rendered buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedImage {
    Gray8(Gray8Image),
    Gray16(Gray16Image),
}

impl RenderedImage {
    pub fn side(&self) -> usize {
        match self {
            RenderedImage::Gray8(img) => img.side(),
            RenderedImage::Gray16(img) => img.side(),
        }
    }

    pub fn bit_depth(&self) -> BitDepth {
        match self {
            RenderedImage::Gray8(_) => BitDepth::Eight,
            RenderedImage::Gray16(_) => BitDepth::Sixteen,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RenderedImage::Gray8(img) => img.as_bytes(),
            RenderedImage::Gray16(img) => img.as_bytes(),
        }
    }
}

impl From<Gray8Image> for RenderedImage {
    fn from(img: Gray8Image) -> Self {
        RenderedImage::Gray8(img)
    }
}

impl From<Gray16Image> for RenderedImage {
    fn from(img: Gray16Image) -> Self {
        RenderedImage::Gray16(img)
    }
}

impl ElevationGrid {
    /// Render an 8-bit image centered on the mean elevation.
    ///
    /// See [`Self::mean`] for how the center is computed.
    pub fn mean_centered_image(&self) -> Gray8Image {
        self.height_centered_image(self.mean())
    }

    /// Render an 8-bit image with `center` mapped to gray level 128.
    ///
    /// Each sample becomes `v - center + 128`, clamped to `0..=255`.
    /// Samples more than 128m below or 127m above the center saturate.
    /// Voids get no special treatment and render black for any center at
    /// or above -32640.
    pub fn height_centered_image(&self, center: i16) -> Gray8Image {
        #[cfg(not(feature = "parallel"))]
        let pixels = self
            .samples()
            .iter()
            .map(|&v| centered_pixel(v, center))
            .collect();

        #[cfg(feature = "parallel")]
        let pixels = self
            .samples()
            .par_iter()
            .map(|&v| centered_pixel(v, center))
            .collect();

        Gray8Image {
            side: self.side_length(),
            pixels,
        }
    }

    /// Render the full sample range as a 16-bit image.
    ///
    /// Some image viewers can't display 16-bit grayscale correctly.
    pub fn full_image(&self) -> Gray16Image {
        let mut pixels = vec![0u8; self.samples().len() * 2];

        #[cfg(not(feature = "parallel"))]
        pixels
            .chunks_exact_mut(2)
            .zip(self.samples())
            .for_each(|(out, &v)| out.copy_from_slice(&elevation_to_full_range(v).to_be_bytes()));

        #[cfg(feature = "parallel")]
        pixels
            .par_chunks_exact_mut(2)
            .zip(self.samples().par_iter())
            .for_each(|(out, &v)| out.copy_from_slice(&elevation_to_full_range(v).to_be_bytes()));

        Gray16Image {
            side: self.side_length(),
            pixels,
        }
    }
}
