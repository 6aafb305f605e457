//! webcut2bazis - CLI tool to convert webcut cutting lists to bazis cloud CSV.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use webcut2bazis::{convert_webcut_to_bazis, parse_webcut_file, ConvertConfig};

/// Split a webcut cutting list into bazis cloud CSV files, one per material and thickness.
#[derive(Parser, Debug)]
#[command(name = "webcut2bazis")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input webcut file path
    input: PathBuf,

    /// Directory for the generated CSV files (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print parsed items as JSON instead of writing files
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing: {}", args.input.display());

    // Debug output
    if args.debug {
        let items = parse_webcut_file(&args.input)
            .with_context(|| format!("Failed to parse {}", args.input.display()))?;
        let json = serde_json::to_string_pretty(&items)?;
        println!("{}", json);
        return Ok(());
    }

    let config = ConvertConfig {
        output_dir: args.output_dir,
    };

    let written = convert_webcut_to_bazis(&args.input, &config)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    info!("Generated {} file(s)", written.len());

    Ok(())
}
