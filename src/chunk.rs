use std::{num::NonZero, ops::Range};

use memchr::memchr;

/// A line-aligned byte range `[start, end)` of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn bytes<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.range()]
    }
}

/// Splits `data` into exactly `parts` chunks that together cover it.
///
/// Every nominal boundary is moved forward to just past the next newline, so
/// no line straddles two chunks. When there are fewer lines than parts, the
/// trailing chunks come out empty.
pub fn plan(data: &[u8], parts: NonZero<usize>) -> Vec<Chunk> {
    let size = data.len();
    let parts = parts.get();
    let nominal = size.div_ceil(parts);
    let boundary = |i: usize| match i {
        0 => 0,
        i if i == parts => size,
        i => line_start_at_or_after(data, (i * nominal).min(size)),
    };
    (0..parts)
        .map(|i| Chunk {
            start: boundary(i),
            end: boundary(i + 1),
        })
        .collect()
}

fn line_start_at_or_after(data: &[u8], pos: usize) -> usize {
    if pos == 0 || pos >= data.len() || data[pos - 1] == b'\n' {
        return pos;
    }
    match memchr(b'\n', &data[pos..]) {
        Some(offset) => pos + offset + 1,
        None => data.len(),
    }
}
