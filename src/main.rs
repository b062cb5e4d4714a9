//! # pawxml
//!
//! A command-line tool for inspecting PAW-XML atomic datasets.
//!
//! ## Usage
//!
//! ```bash
//! # Print every decoded field as `name = value`
//! pawxml dump Si.PBE.xml.gz
//!
//! # Export the decoded record as JSON
//! pawxml dump Si.PBE.xml.gz --format json
//!
//! # Short overview of the dataset
//! pawxml summary Si.PBE.xml.gz
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
