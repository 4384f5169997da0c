//! Command-line entry point for the waybill planner.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use waybill_lib::{loader, plan, report};

/// Plan courier routes across a grid map.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Map file: a "rows cols" header, then row-major cell codes
    /// (0 free, 1 obstacle, 2 depot).
    map: PathBuf,
    /// Stop manifest: one "x y priority" line per stop.
    stops: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let map = loader::load_map(&cli.map)?;
    let stops = loader::load_stops(&cli.stops)?;
    let legs = plan::plan(&map, &stops);

    report::write_plan(&mut io::stdout().lock(), &legs)?;
    Ok(())
}
