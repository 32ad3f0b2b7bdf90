pub mod info;
pub mod png;
pub mod tiff;

use anyhow::{bail, Context, Result};
use srtm_grid::{ElevationGrid, GridFormat};
use std::path::Path;

/// Load a grid from an `.hgt` or `.hgt.zip` file.
///
/// With an explicit resolution the file is decoded as that format; otherwise
/// the format is detected from the file size. Archives always detect the
/// format from the entry size, so a resolution is rejected for them.
pub fn load_grid(path: &Path, arc_seconds: Option<u8>) -> Result<ElevationGrid> {
    if !path.exists() {
        bail!("Tile not found: {}", path.display());
    }

    let is_zip = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    let grid = match (is_zip, arc_seconds) {
        (true, Some(_)) => {
            bail!("--format cannot be used with a .zip archive; the format is detected from the archive entry");
        }
        (true, None) => ElevationGrid::from_zip(path),
        (false, Some(arc_seconds)) => {
            let Some(format) = GridFormat::from_arc_seconds(arc_seconds) else {
                bail!("resolution must be 1 or 3, got {}", arc_seconds);
            };
            ElevationGrid::from_file_with_format(path, format)
        }
        (false, None) => ElevationGrid::from_file(path),
    }
    .with_context(|| format!("Failed to load tile {}", path.display()))?;

    tracing::info!(path = %path.display(), format = %grid.format(), "Loaded tile");
    Ok(grid)
}
