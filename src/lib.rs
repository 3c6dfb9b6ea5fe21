//! Per-station min/avg/max over `<station>;<temperature>` records.
//!
//! The input is memory-mapped, split into line-aligned chunks, aggregated by
//! one worker per chunk and merged in chunk order before rendering.

use std::path::Path;

use tracing::info;

pub mod baseline;
mod chunk;
mod config;
mod dispatch;
mod error;
mod format;
mod input;
mod lines;
mod parse;
mod stats;
mod table;

pub use chunk::{Chunk, plan};
pub use config::{Config, EXPECTED_STATIONS, SEPARATOR};
pub use dispatch::{aggregate_chunk, run};
pub use error::{Error, Result};
pub use format::{render, write_summary};
pub use input::MappedInput;
pub use lines::Lines;
pub use parse::{parse_record, parse_temperature};
pub use stats::{Stats, Tenths};
pub use table::{StationTable, merge_all};

/// Plans, dispatches and merges the whole of `data`.
pub fn aggregate<'a>(data: &'a [u8], config: &Config) -> Result<StationTable<'a>> {
    let chunks = plan(data, config.threads);
    let tables = run(data, &chunks, config)?;
    let merged = merge_all(tables);
    info!(stations = merged.len(), "Merged chunk results");
    Ok(merged)
}

/// Maps the file at `path` and renders its summary line.
pub fn summarize(path: impl AsRef<Path>, config: &Config) -> Result<Vec<u8>> {
    let input = MappedInput::open(path)?;
    let merged = aggregate(input.bytes(), config)?;
    Ok(render(&merged))
}
