use std::fmt::{self, Display};

/// A fixed-point value with one implied decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenths(pub i64);

impl Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{}", abs / 10, abs % 10)
    }
}

/// Running min/sum/max/count of one station, all in tenths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    min: i16,
    max: i16,
    sum: i64,
    count: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            min: i16::MAX,
            max: i16::MIN,
            sum: 0,
            count: 0,
        }
    }
}

impl Stats {
    pub fn new(value: i16) -> Self {
        Self {
            min: value,
            max: value,
            sum: value.into(),
            count: 1,
        }
    }

    #[inline]
    pub fn update(&mut self, value: i16) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum = self.sum.saturating_add(i64::from(value));
        self.count = self.count.saturating_add(1);
    }

    pub fn merge(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum = self.sum.saturating_add(other.sum);
        self.count = self.count.saturating_add(other.count);
    }

    pub fn min(&self) -> Tenths {
        Tenths(self.min.into())
    }

    pub fn max(&self) -> Tenths {
        Tenths(self.max.into())
    }

    /// Mean in tenths, rounded half away from zero.
    pub fn avg(&self) -> Tenths {
        if self.count == 0 {
            return Tenths(0);
        }
        let count = i64::from(self.count);
        let rounded = (self.sum.unsigned_abs() * 2 + count as u64) / (2 * count as u64);
        let rounded = rounded as i64;
        Tenths(if self.sum < 0 { -rounded } else { rounded })
    }

    pub fn sum(&self) -> i64 {
        self.sum
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.min(), self.avg(), self.max())
    }
}
