//! Command-line front end.
//!
//! ```bash
//! # Dry run at 256x256, saving the preview
//! image-to-scope run photo.jpg --resolution 256x256 --preview-png preview.png
//!
//! # Send to a device
//! image-to-scope run photo.jpg --port /dev/ttyUSB0 --baud 115200
//!
//! # Rescan serial ports
//! image-to-scope ports
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use image_to_scope_lib::{AppConfig, RunConfig, Selection, execute};
use scope_image::render_preview;
use scope_link::list_destinations;

/// Convert images into 1-bit frames for an oscilloscope point display
#[derive(Parser, Debug)]
#[command(name = "image-to-scope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Process an image and send it to the display
    Run {
        /// Path to the source image
        image: String,

        /// Frame resolution, e.g. 256x256 [env: SCOPE_RESOLUTION]
        #[arg(long)]
        resolution: Option<String>,

        /// "Global Thresholding" or "Adaptive Gaussian Thresholding" [env: SCOPE_ALGORITHM]
        #[arg(long)]
        algorithm: Option<String>,

        /// Invert the preview; the display receives the complement.
        /// `--invert=false` overrides SCOPE_INVERT=true [env: SCOPE_INVERT]
        #[arg(
            long,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            value_name = "BOOL"
        )]
        invert: Option<bool>,

        /// Serial device, or "Test mode" to skip transmission [env: SCOPE_PORT]
        #[arg(long)]
        port: Option<String>,

        /// Baud rate [env: SCOPE_BAUD_RATE]
        #[arg(long)]
        baud: Option<String>,

        /// Save the preview (points over the reference grid) as PNG
        #[arg(long, value_name = "FILE")]
        preview_png: Option<PathBuf>,

        /// Save the packed frame bytes
        #[arg(long, value_name = "FILE")]
        dump: Option<PathBuf>,
    },

    /// List serial ports (followed by "Test mode")
    Ports,

    /// Show effective default settings
    Settings,
}

fn main() -> ExitCode {
    // Step 1: .env + tracing
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let defaults = AppConfig::load();

    match cli.command {
        Commands::Run {
            image,
            resolution,
            algorithm,
            invert,
            port,
            baud,
            preview_png,
            dump,
        } => {
            let selection = Selection {
                image_path: &image,
                resolution: resolution.as_deref().unwrap_or(&defaults.resolution),
                algorithm: algorithm.as_deref().unwrap_or(&defaults.algorithm),
                invert: invert.unwrap_or(defaults.invert),
                destination: port.as_deref().unwrap_or(&defaults.port),
                baud_rate: baud.as_deref().unwrap_or(&defaults.baud_rate),
            };
            let config = RunConfig::from_selection(&selection)?;

            let report = match execute(&config) {
                Ok(report) => report,
                // Already logged by the runner; no message for the user.
                Err(e) if !e.is_user_facing() => return Ok(ExitCode::from(2)),
                Err(e) => return Err(e.into()),
            };

            if let Some(path) = preview_png {
                render_preview(&report.preview)
                    .save(&path)
                    .with_context(|| format!("Failed to save preview {}", path.display()))?;
                println!("Preview saved to {}", path.display());
            }
            if let Some(path) = dump {
                std::fs::write(&path, &report.bitstream)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }

            println!("{}", report.bitstream.len());

            if let Some(msg) = report.user_message() {
                eprintln!("Error: {msg}");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Ports => {
            for name in list_destinations() {
                println!("{name}");
            }
        }
        Commands::Settings => {
            for (key, value) in defaults.entries() {
                println!("{key}={value}");
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
