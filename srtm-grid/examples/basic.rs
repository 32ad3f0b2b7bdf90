//! Basic example demonstrating srtm-grid library usage.
//!
//! Run with: cargo run --example basic -- /path/to/N35E138.hgt

use srtm_grid::{ElevationGrid, Point, SrtmError};
use std::env;

fn main() -> Result<(), SrtmError> {
    // Get tile path from command line
    let path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example basic -- /path/to/tile.hgt");
        std::process::exit(1);
    });

    let grid = ElevationGrid::from_file(&path)?;
    let side = grid.side_length() as i64;

    println!("{}: {}", path, grid.format());
    println!("{:-<50}", "");

    let (min, max) = grid.min_max();
    println!("Min/max: {}m / {}m (voids excluded from min)", min, max);
    println!("Running mean: {}m", grid.mean());
    if let Some(exact) = grid.exact_mean() {
        println!("Exact mean: {:.1}m", exact);
    }
    println!("Median: {}m", grid.percentile(0.5)?);
    println!("Voids: {}", grid.void_count());

    // Sample the corners and center
    let points = [
        ("north-west", Point::new(0, 0)),
        ("north-east", Point::new(side - 1, 0)),
        ("center", Point::new(side / 2, side / 2)),
        ("south-west", Point::new(0, side - 1)),
        ("south-east", Point::new(side - 1, side - 1)),
    ];
    for (name, point) in points {
        println!("{} {}: {}m", name, point, grid.elevation_at(point)?);
    }

    Ok(())
}
