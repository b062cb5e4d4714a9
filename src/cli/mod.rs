use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

mod config;
mod dump;
mod summary;

/// pawxml - PAW-XML atomic dataset inspector
#[derive(Parser)]
#[command(name = "pawxml")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format of the dump command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name = value` line per field
    #[default]
    Text,
    /// The whole record as a JSON object
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a dataset and print every field
    Dump {
        /// Input PAW-XML file (gzip-compressed)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short = 'f', long, value_enum)]
        format: Option<OutputFormat>,

        /// Summarize arrays longer than this many values
        #[arg(long)]
        threshold: Option<usize>,

        /// Values shown at each end of a summarized array
        #[arg(long)]
        edge_items: Option<usize>,

        /// Print arrays in full, ignoring the threshold
        #[arg(long)]
        full: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Decode a dataset and print a short overview
    Summary {
        /// Input PAW-XML file (gzip-compressed)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Dump {
            file,
            format,
            threshold,
            edge_items,
            full,
            config,
        } => dump::run(file, format, threshold, edge_items, full, config),
        Commands::Summary { file } => summary::run(file),
    }
}
