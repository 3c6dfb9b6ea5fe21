use std::{
    io::{BufWriter, Write, stdout},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, error::ErrorKind};
use onebrc::{SEPARATOR, baseline};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Single-threaded reference implementation of the summary.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    #[arg(default_value = "measurements.txt")]
    input: PathBuf,
}

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stations = baseline::summarize_file(&args.input, SEPARATOR)
        .with_context(|| format!("Failed to summarize {}", args.input.display()))?;
    info!(stations = stations.len(), "Baseline finished");

    let mut writer = BufWriter::new(stdout().lock());
    writer
        .write_all(&baseline::render(&stations))
        .context("Failed to display results")?;
    writer.flush().context("Failed to display results")?;
    Ok(ExitCode::SUCCESS)
}
