//! # Craftmap
//!
//! Command line entry point: loads recipe and advancement files, computes
//! recipe progress and writes it out as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use craftmap_engine::{emit_records, log_summary, DataLoader, EngineConfig};
use craftmap_progress::{filter_by_type, TypeFilter};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "craftmap")]
#[command(about = "Infers recipe unlock and craftability progress from game data files")]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of recipe JSON files
    #[arg(short, long)]
    recipes: Option<PathBuf>,

    /// Directory of advancement JSON snapshots
    #[arg(short, long)]
    advancements: Option<PathBuf>,

    /// Recipe category to report, or `all`
    #[arg(short = 't', long = "type")]
    type_filter: Option<TypeFilter>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log a per-category summary
    #[arg(short, long)]
    summary: bool,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,
}

impl Args {
    /// Applies command line overrides on top of the loaded config.
    fn apply(self, config: &mut EngineConfig) {
        if let Some(recipes) = self.recipes {
            config.recipes_dir = recipes;
        }
        if let Some(advancements) = self.advancements {
            config.advancements_dir = advancements;
        }
        if let Some(type_filter) = self.type_filter {
            config.type_filter = type_filter;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        config.summary |= self.summary;
        if self.compact {
            config.pretty = false;
        }
    }
}

/// Main entry point.
fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, source) = match &args.config {
        Some(path) => EngineConfig::load_from(path),
        None => EngineConfig::load(),
    };
    args.apply(&mut config);

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("Invalid log filter")?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!("Craftmap v{}", env!("CARGO_PKG_VERSION"));
    source.log();

    let mut loader = DataLoader::from_config(&config);
    let records = loader
        .compute()
        .context("Failed to compute recipe progress")?;
    let records = filter_by_type(&records, config.type_filter);
    info!(
        "Reporting {} recipes for type {}",
        records.len(),
        config.type_filter
    );

    if config.summary {
        log_summary(&records);
    }

    emit_records(&records, config.output.as_deref(), config.pretty)
        .context("Failed to write progress records")?;

    Ok(())
}
