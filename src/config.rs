use std::{num::NonZero, thread::available_parallelism};

use tracing::warn;

/// Upper bound on distinct stations a well-formed input carries.
pub const EXPECTED_STATIONS: usize = 10_000;

pub const SEPARATOR: u8 = b';';

/// Tunables handed to the pipeline entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of chunks, and therefore of workers.
    pub threads: NonZero<usize>,
    pub separator: u8,
    /// Initial capacity of every per-worker station table.
    pub expected_stations: usize,
}

impl Config {
    /// Uses `threads` when given, otherwise the detected hardware parallelism.
    pub fn new(threads: Option<NonZero<usize>>) -> Self {
        let threads = threads.unwrap_or_else(|| {
            available_parallelism().unwrap_or_else(|err| {
                warn!(%err, "Unable to get number of cores, falling back to one worker");
                NonZero::<usize>::MIN
            })
        });
        Self {
            threads,
            separator: SEPARATOR,
            expected_stations: EXPECTED_STATIONS,
        }
    }

    pub fn with_threads(mut self, threads: NonZero<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_expected_stations(mut self, expected_stations: usize) -> Self {
        self.expected_stations = expected_stations;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
