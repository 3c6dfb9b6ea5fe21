use rayon::{
    ThreadPoolBuilder,
    iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator},
};
use tracing::{debug, info};

use crate::{Chunk, Config, Lines, Result, StationTable, parse_record};

/// Aggregates one chunk of `data` into a fresh table.
pub fn aggregate_chunk<'a>(
    data: &'a [u8],
    chunk: Chunk,
    config: &Config,
) -> Result<StationTable<'a>> {
    let mut table = StationTable::with_capacity(config.expected_stations);
    let mut total = 0u64;
    for line in Lines::new(chunk.bytes(data)) {
        if line.is_empty() {
            continue;
        }
        let (station, temperature) = parse_record(line, config.separator)?;
        table.update(station, temperature);
        total += 1;
    }
    debug!(start = chunk.start, bytes = chunk.len(), lines = total, "Processed chunk");
    Ok(table)
}

/// Runs one worker per chunk and waits for all of them.
///
/// Tables come back in chunk order. The first failing chunk's error is
/// returned and no partial result is produced.
pub fn run<'a>(
    data: &'a [u8],
    chunks: &[Chunk],
    config: &Config,
) -> Result<Vec<StationTable<'a>>> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(chunks.len().max(1))
        .thread_name(|i| format!("onebrc-worker-{i}"))
        .build()?;
    info!(workers = pool.current_num_threads(), "Dispatching chunks");
    pool.install(|| {
        chunks
            .par_iter()
            .with_max_len(1)
            .map(|&chunk| aggregate_chunk(data, chunk, config))
            .collect::<Result<Vec<_>>>()
    })
}
