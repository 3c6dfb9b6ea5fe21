use memchr::memchr;

/// Forward-only cursor over the lines of a chunk.
///
/// Yields each line without its `\n`. A final line with no terminating
/// newline is still yielded.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Lines<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { rest: data }
    }

    pub fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match memchr(b'\n', self.rest) {
            Some(idx) => {
                let (line, rest) = self.rest.split_at(idx);
                self.rest = &rest[1..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        Some(line)
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines() {
        let lines: Vec<_> = Lines::new(b"a;1.0\nb;2.0\n").collect();
        assert_eq!(lines, [&b"a;1.0"[..], b"b;2.0"]);
    }

    #[test]
    fn keeps_unterminated_last_line() {
        let lines: Vec<_> = Lines::new(b"a;1.0\nb;2.0").collect();
        assert_eq!(lines, [&b"a;1.0"[..], b"b;2.0"]);
    }

    #[test]
    fn empty_range_yields_nothing() {
        assert_eq!(Lines::new(b"").next_line(), None);
    }

    #[test]
    fn exhausted_scanner_stays_exhausted() {
        let mut lines = Lines::new(b"x;0.0\n");
        assert_eq!(lines.next_line(), Some(&b"x;0.0"[..]));
        assert_eq!(lines.next_line(), None);
        assert_eq!(lines.next_line(), None);
    }
}
