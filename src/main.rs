use std::{
    io::{BufWriter, Write, stdout},
    num::NonZero,
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, error::ErrorKind};
use onebrc::{Config, MappedInput, aggregate, write_summary};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Per-station min/avg/max of a measurements file")]
struct Args {
    /// `<station>;<temperature>` records, one per line.
    #[arg(default_value = "measurements.txt")]
    input: PathBuf,
    /// Number of chunks and worker threads; defaults to the available cores.
    #[arg(long, env = "NUM_THREADS")]
    threads: Option<NonZero<usize>>,
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

    let config = Config::new(args.threads);
    info!(threads = config.threads.get(), input = %args.input.display(), "Starting");

    let input = MappedInput::open(&args.input)
        .with_context(|| format!("Failed to load measurements from {}", args.input.display()))?;
    let merged = aggregate(input.bytes(), &config)
        .context("One or more chunks could not be processed")?;

    let mut writer = BufWriter::new(stdout().lock());
    write_summary(&merged, &mut writer).context("Failed to display results")?;
    writer.flush().context("Failed to display results")?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_defaults_to_measurements_file() {
        let args = Args::try_parse_from(["onebrc", "--threads", "2"]).unwrap();
        assert_eq!(args.input, PathBuf::from("measurements.txt"));
        assert_eq!(args.threads, NonZero::new(2));
    }

    #[test]
    fn explicit_input_is_used() {
        let args = Args::try_parse_from(["onebrc", "data.txt", "--threads", "4"]).unwrap();
        assert_eq!(args.input, PathBuf::from("data.txt"));
    }

    #[test]
    fn second_positional_is_rejected() {
        let err = Args::try_parse_from(["onebrc", "a.txt", "b.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn zero_threads_is_rejected() {
        let err = Args::try_parse_from(["onebrc", "--threads", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
