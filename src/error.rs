use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to mmap {}", path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record {line:?}: {reason}")]
    Format { line: String, reason: &'static str },
    #[error("failed to build worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn format(line: &[u8], reason: &'static str) -> Self {
        Self::Format {
            line: String::from_utf8_lossy(line).into_owned(),
            reason,
        }
    }
}
