use anyhow::{Context, Result};
use image::{GrayImage, ImageFormat};
use srtm_grid::{ElevationGrid, Gray8Image};
use std::path::{Path, PathBuf};

pub fn run(
    file: PathBuf,
    format: Option<u8>,
    center: Option<i16>,
    percentile: Option<f64>,
    output: PathBuf,
) -> Result<()> {
    let grid = super::load_grid(&file, format)?;
    let center = resolve_center(&grid, center, percentile)?;

    tracing::info!(center, "Rendering height-centered image");
    write_png(grid.height_centered_image(center), &output)?;

    println!("Wrote {}", output.display());
    Ok(())
}

/// Pick the elevation mapped to mid-gray: explicit value, percentile or mean.
fn resolve_center(grid: &ElevationGrid, center: Option<i16>, percentile: Option<f64>) -> Result<i16> {
    match (center, percentile) {
        (Some(center), _) => Ok(center),
        (None, Some(p)) => grid
            .percentile(p)
            .with_context(|| format!("Failed to compute percentile {}", p)),
        (None, None) => Ok(grid.mean()),
    }
}

fn write_png(image: Gray8Image, output: &Path) -> Result<()> {
    let side = image.side() as u32;
    let buffer = GrayImage::from_raw(side, side, image.into_bytes())
        .context("Pixel buffer does not match image dimensions")?;

    buffer
        .save_with_format(output, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", output.display()))
}
