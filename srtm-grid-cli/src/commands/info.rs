use anyhow::{Context, Result};
use serde::Serialize;
use srtm_grid::{ElevationGrid, GridFormat};
use std::path::PathBuf;

#[derive(Serialize)]
struct PercentileValue {
    p: f64,
    elevation: i16,
}

#[derive(Serialize)]
struct InfoResponse {
    path: String,
    format: String,
    side: usize,
    file_size: u64,
    min: i16,
    max: i16,
    mean: i16,
    exact_mean: Option<f64>,
    void_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    percentiles: Vec<PercentileValue>,
}

pub fn run(file: PathBuf, format: Option<u8>, percentiles: Vec<f64>, json: bool) -> Result<()> {
    let grid = super::load_grid(&file, format)?;
    let file_size = std::fs::metadata(&file)?.len();

    let summary = grid.summary();
    let percentiles = percentile_values(&grid, &percentiles)?;

    if json {
        let response = InfoResponse {
            path: file.display().to_string(),
            format: grid.format().to_string(),
            side: grid.side_length(),
            file_size,
            min: summary.min,
            max: summary.max,
            mean: summary.mean,
            exact_mean: summary.exact_mean,
            void_count: summary.void_count,
            percentiles,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let side = grid.side_length();
    println!("Path: {}", file.display());
    println!(
        "Resolution: {} ({}x{} samples)",
        resolution_label(grid.format()),
        side,
        side
    );
    println!("File size: {}", format_size(file_size));
    println!();

    println!("min/max values may be erroneous, because of voids or other invalid data");
    println!("Min elevation: {}m", summary.min);
    println!("Max elevation: {}m", summary.max);
    println!("Mean elevation: {}m", summary.mean);
    if let Some(exact) = summary.exact_mean {
        println!("Exact mean (voids excluded): {:.2}m", exact);
    }

    for value in &percentiles {
        println!("{}: {}m", percentile_label(value.p), value.elevation);
    }

    println!(
        "Void samples: {} ({:.1}%)",
        summary.void_count,
        summary.void_ratio() * 100.0
    );

    Ok(())
}

fn percentile_values(grid: &ElevationGrid, percentiles: &[f64]) -> Result<Vec<PercentileValue>> {
    percentiles
        .iter()
        .map(|&p| {
            let elevation = grid
                .percentile(p)
                .with_context(|| format!("Failed to compute percentile {}", p))?;
            Ok(PercentileValue { p, elevation })
        })
        .collect()
}

fn resolution_label(format: GridFormat) -> String {
    format!("SRTM{} (~{}m)", format.arc_seconds(), format.meters())
}

fn percentile_label(p: f64) -> String {
    format!("P{:.1}", p * 100.0)
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
