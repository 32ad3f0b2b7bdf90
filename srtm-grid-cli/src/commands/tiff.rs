use anyhow::{Context, Result};
use image::{ImageBuffer, ImageFormat, Luma};
use srtm_grid::Gray16Image;
use std::path::{Path, PathBuf};

pub fn run(file: PathBuf, format: Option<u8>, output: PathBuf) -> Result<()> {
    let grid = super::load_grid(&file, format)?;

    tracing::info!("Rendering full-range 16-bit image");
    write_tiff(&grid.full_image(), &output)?;

    println!("Wrote {}", output.display());
    println!("Please note that the bit-depth is 16 bit per pixel.");
    println!("Some viewers may not be able to display the image.");
    Ok(())
}

fn write_tiff(image: &Gray16Image, output: &Path) -> Result<()> {
    let side = image.side() as u32;
    let buffer: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(side, side, image.values().collect())
            .context("Pixel buffer does not match image dimensions")?;

    buffer
        .save_with_format(output, ImageFormat::Tiff)
        .with_context(|| format!("Failed to write {}", output.display()))
}
