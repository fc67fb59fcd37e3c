//! AquaDash - A terminal dashboard for aquaculture water-quality monitoring
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;

use aquadash_core::prelude::*;

/// AquaDash - A terminal dashboard for aquaculture water-quality monitoring
#[derive(Parser, Debug)]
#[command(name = "aquadash")]
#[command(about = "A terminal dashboard for aquaculture water-quality monitoring", long_about = None)]
struct Args {
    /// Directory to load `.aquadash/config.toml` from
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print the dashboard dataset as JSON instead of drawing the TUI
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    aquadash_core::logging::init()?;

    if args.headless {
        return aquadash::headless::run_headless();
    }

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    aquadash::run_with_settings(&base_path)
}
