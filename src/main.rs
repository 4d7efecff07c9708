//! # Barras CLI
//!
//! Command-line interface for encoding retail barcodes.
//!
//! ## Usage
//!
//! ```bash
//! # Report which symbology accepts a digit string
//! barras detect 4006381333931
//!
//! # Encode and print the module sequence as 1s and 0s
//! barras encode 4006381333931
//!
//! # Save as PNG with 3 pixels per module and an 8-module quiet zone
//! barras encode 4006381333931 --png ean13.png --scale 3 --margin 8
//!
//! # Emit the packed transport form as JSON
//! barras encode 96385074 --json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use barras::{BarrasError, EncodeError, RenderOptions, Symbology, digits, render};

/// Barras - EAN/UPC barcode encoder
#[derive(Parser, Debug)]
#[command(name = "barras")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a digit string into a barcode symbol
    Encode {
        /// Digits to encode (13 digits: EAN-13, 12: UPC-A, 8: EAN-8 or UPC-E)
        digits: String,

        /// Write the rasterized symbol to a PNG file
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,

        /// Pixels per module for PNG output
        #[arg(long, default_value = "2")]
        scale: u32,

        /// Quiet zone width in modules, each side, for PNG output
        #[arg(long, default_value = "0")]
        margin: u32,

        /// Print the packed transport form as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report which symbology accepts a digit string
    Detect {
        /// Digits to classify
        digits: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BarrasError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            digits,
            png,
            scale,
            margin,
            json,
        } => {
            let symbol = barras::encode(&digits)?;
            let packed = symbol.pack();

            if let Some(path) = png {
                let options = RenderOptions {
                    scale,
                    quiet_zone: margin,
                };
                let bytes = render::render_png(&packed, &options)?;
                std::fs::write(&path, bytes)?;
                println!(
                    "Wrote {} ({}, {} modules)",
                    path.display(),
                    symbol.symbology,
                    packed.width
                );
            } else if json {
                println!("{}", serde_json::to_string_pretty(&packed)?);
            } else {
                println!("symbology: {}", symbol.symbology);
                println!("modules:   {}", packed.width);
                println!("{}", symbol.modules.bit_string());
            }
        }

        Commands::Detect { digits: input } => {
            let parsed = digits::parse(&input)?;
            let symbology = Symbology::detect(&parsed).map_err(EncodeError::from)?;
            println!(
                "{} ({} digits, {} modules)",
                symbology,
                symbology.digit_count(),
                symbology.module_count()
            );
        }
    }

    Ok(())
}
