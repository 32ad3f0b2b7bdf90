use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// SRTM elevation grid CLI tool
#[derive(Parser)]
#[command(name = "srtm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory for rendered images
    #[arg(
        short = 'd',
        long,
        env = "SRTM_OUTPUT_DIR",
        default_value = ".",
        global = true
    )]
    output_dir: PathBuf,

    /// Grid resolution in arc-seconds (1 or 3); detected from the file size if omitted
    #[arg(short = 'r', long, global = true)]
    format: Option<u8>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display statistics about an SRTM tile
    Info {
        /// Path to .hgt or .hgt.zip file
        file: PathBuf,

        /// Percentile to report (0.0 to 1.0), may be repeated
        #[arg(short, long)]
        percentile: Vec<f64>,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Render an 8-bit grayscale PNG centered on an elevation
    Png {
        /// Path to .hgt or .hgt.zip file
        file: PathBuf,

        /// Elevation in meters mapped to mid-gray (default: mean elevation)
        #[arg(short, long, allow_negative_numbers = true, conflicts_with = "percentile")]
        center: Option<i16>,

        /// Center on this percentile of the elevation data (0.0 to 1.0)
        #[arg(short, long)]
        percentile: Option<f64>,

        /// Output file (default: out.png in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the full elevation range as a 16-bit grayscale TIFF
    Tiff {
        /// Path to .hgt or .hgt.zip file
        file: PathBuf,

        /// Output file (default: out16.tiff in the output directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Log to stderr so stdout stays clean for --json output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "srtm=info,srtm_grid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info {
            file,
            percentile,
            json,
        } => commands::info::run(file, cli.format, percentile, json),
        Commands::Png {
            file,
            center,
            percentile,
            output,
        } => {
            let output = output.unwrap_or_else(|| cli.output_dir.join("out.png"));
            commands::png::run(file, cli.format, center, percentile, output)
        }
        Commands::Tiff { file, output } => {
            let output = output.unwrap_or_else(|| cli.output_dir.join("out16.tiff"));
            commands::tiff::run(file, cli.format, output)
        }
    }
}
