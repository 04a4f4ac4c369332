#![warn(clippy::unwrap_used)]
#![doc = include_str!("../README.md")]

mod amount;
mod batch;
mod category;
mod document;
mod error;
mod files;
mod payee;
mod record;
mod text;

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use color_eyre::eyre::{bail, eyre, Context};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use record::Transformer;

/// Converts Sydbank CSV export files to YNAB import files
#[derive(Debug, Parser)]
struct Args {
    /// Sydbank CSV export files, or directories containing them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Directory the YNAB files are written to
    #[arg(long, default_value = "csv/output")]
    output_dir: PathBuf,
    /// Prints the converted files instead of writing them
    #[arg(long)]
    dry_run: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let Args {
        inputs,
        output_dir,
        dry_run,
    } = Args::parse();

    let paths = files::collect_inputs(&inputs)?;
    if paths.is_empty() {
        bail!("No CSV files found in {inputs:?}");
    }

    let mut failures = 0;
    let mut sources = Vec::with_capacity(paths.len());
    let mut statements = Vec::with_capacity(paths.len());
    for path in &paths {
        match files::read_statement(path) {
            Ok(records) => {
                tracing::info!("Read {} records from {path:?}", records.len());
                sources.push(path);
                statements.push(records);
            }
            Err(err) => {
                tracing::warn!("{err:#}");
                failures += 1;
            }
        }
    }

    let documents = batch::run(
        &Transformer::default(),
        &statements,
        Local::now().naive_local(),
    );
    for (path, document) in sources.into_iter().zip(documents) {
        let written = document
            .with_context(|| format!("Could not convert {path:?}"))
            .and_then(|document| {
                if dry_run {
                    println!("{}\n{}", document.filename, document.text);
                    Ok(())
                } else {
                    let output = files::write_document(&output_dir, &document)?;
                    tracing::info!("Wrote {path:?} to {output:?}");
                    Ok(())
                }
            });
        if let Err(err) = written {
            tracing::warn!("{err:#}");
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(eyre!(
            "{failures} of {} files could not be converted",
            paths.len()
        ));
    }
    Ok(())
}
