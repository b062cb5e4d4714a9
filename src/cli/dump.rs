use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

use pawxml::dump::{to_json, write_dump, DumpOptions};

use super::config::Config;
use super::OutputFormat;

/// Decode a dataset and print every field
pub fn run(
    file: PathBuf,
    format: Option<OutputFormat>,
    threshold: Option<usize>,
    edge_items: Option<usize>,
    full: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    let settings = config.dump;

    let format = format.or(settings.format).unwrap_or_default();
    let options = if full {
        DumpOptions::full()
    } else {
        let defaults = DumpOptions::default();
        DumpOptions {
            threshold: threshold.or(settings.threshold).unwrap_or(defaults.threshold),
            edge_items: edge_items
                .or(settings.edge_items)
                .unwrap_or(defaults.edge_items),
        }
    };

    info!("Decoding {}", file.display());
    let dataset = pawxml::decode(&file)
        .with_context(|| format!("Failed to decode PAW dataset: {}", file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_dump(&dataset, &mut out, &options)?,
        OutputFormat::Json => {
            let json = to_json(&dataset, settings.pretty.unwrap_or(true))
                .context("Failed to serialize dataset as JSON")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;

    Ok(())
}
