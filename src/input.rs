use std::{fs::File, path::Path};

use memmap2::Mmap;
use tracing::debug;

use crate::{Error, Result};

/// A read-only view of a whole file, mapped into memory.
///
/// The mapping and the descriptor are released together when the value is
/// dropped. Everything built from [`MappedInput::bytes`] borrows from it, so
/// no station table can outlive the mapping.
#[derive(Debug)]
pub struct MappedInput {
    // `None` for empty files, which cannot be mapped.
    map: Option<Mmap>,
    _file: File,
}

impl MappedInput {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let open_err = |source: std::io::Error| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;
        let len = file.metadata().map_err(open_err)?.len();
        if len == 0 {
            debug!(path = %path.display(), "Input is empty, skipping mmap");
            return Ok(Self {
                map: None,
                _file: file,
            });
        }
        // SAFETY: The file is opened read-only and is not modified while mapped.
        let map = unsafe { Mmap::map(&file) }.map_err(|source| Error::Map {
            path: path.to_path_buf(),
            source,
        })?;
        advise(&map);
        debug!(path = %path.display(), bytes = map.len(), "Mapped input");
        Ok(Self {
            map: Some(map),
            _file: file,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        self.map.as_deref().unwrap_or_default()
    }

    pub fn size(&self) -> usize {
        self.bytes().len()
    }
}

// Hints only: a refused advice never fails the run.
#[cfg(unix)]
fn advise(map: &Mmap) {
    use memmap2::Advice;

    #[cfg(target_os = "linux")]
    let advices: &[Advice] = &[Advice::Sequential, Advice::HugePage, Advice::WillNeed];
    #[cfg(not(target_os = "linux"))]
    let advices: &[Advice] = &[Advice::Sequential, Advice::WillNeed];

    for &advice in advices {
        if let Err(err) = map.advise(advice) {
            debug!(?advice, %err, "Kernel refused mmap advice");
        }
    }
}

#[cfg(not(unix))]
fn advise(_map: &Mmap) {}
