//! # srtm-grid - SRTM elevation grids
//!
//! Decode SRTM (Shuttle Radar Topography Mission) `.hgt` files into an
//! in-memory grid, compute statistics over it and render it as grayscale
//! pixel buffers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use srtm_grid::{ElevationGrid, Point};
//!
//! let grid = ElevationGrid::from_file("N35E138.hgt")?;
//! let (min, max) = grid.min_max();
//! println!("min: {}m max: {}m mean: {}m", min, max, grid.mean());
//!
//! let peak = grid.elevation_at(Point::new(600, 600))?;
//! let image = grid.mean_centered_image();
//! assert_eq!(image.as_bytes().len(), 1201 * 1201);
//! ```
//!
//! ## SRTM Data Format
//!
//! SRTM files contain elevation data in a simple binary format with no header:
//!
//! - **SRTM1**: 3601×3601 samples, 1 arc-second (~30m) resolution
//! - **SRTM3**: 1201×1201 samples, 3 arc-second (~90m) resolution
//!
//! Each sample is a 16-bit big-endian signed integer representing elevation in
//! meters, stored row-major from the north-west corner.
//!
//! ## Voids
//!
//! The value -32768 ([`VOID_VALUE`]) indicates void (no data). The statistics
//! treat voids asymmetrically, and this is intentional:
//!
//! - `min_max` never reports a void as the minimum, but may report it as the
//!   maximum on an all-void grid.
//! - `mean` substitutes the running average for each void.
//! - `percentile` includes voids in the sort, so they rank lowest.
//!
//! ## Features
//!
//! - `parallel`: render images, sort for percentiles and compute
//!   `exact_mean` with rayon. `mean` stays sequential because its result
//!   depends on scan order.

pub mod coords;
pub mod error;
pub mod format;
pub mod grid;
pub mod render;
pub mod stats;

// Re-export main types at crate root for convenience
pub use coords::Point;
pub use error::{Position, Result, SrtmError};
pub use format::GridFormat;
pub use grid::{ElevationGrid, VOID_VALUE};
pub use render::{BitDepth, Gray16Image, Gray8Image, RenderedImage};
pub use stats::GridSummary;
