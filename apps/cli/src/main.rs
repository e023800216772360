//! Linkfolio CLI: turn a LinkedIn data export into a portfolio document.
//!
//! `linkfolio process` reads the export CSVs and writes the single JSON
//! document the site renders from; `linkfolio show` prints the derived
//! views the presentation layer consumes.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
