//! Naive single-threaded reference used to check the parallel pipeline.
//!
//! Reads the file line by line through a buffered reader, owns every station
//! name, parses temperatures with the standard float parser and keeps its own
//! floating-point accumulator.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    min: f64,
    max: f64,
    sum: f64,
    count: usize,
}

impl Measurement {
    fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    fn update(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// Mean rounded half away from zero to one decimal.
    pub fn avg(&self) -> f64 {
        // The true sum is a whole number of tenths; recover it before dividing.
        let tenths = (self.sum * 10.0).round();
        (tenths / self.count as f64).round() / 10.0
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` turns a negative zero into a positive one.
        write!(
            f,
            "{:.1}/{:.1}/{:.1}",
            self.min + 0.0,
            self.avg() + 0.0,
            self.max + 0.0
        )
    }
}

pub fn summarize_file(
    path: impl AsRef<Path>,
    separator: u8,
) -> Result<BTreeMap<Vec<u8>, Measurement>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let mut stations = BTreeMap::<Vec<u8>, Measurement>::new();
    let mut line = Vec::with_capacity(128);
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let record = line.strip_suffix(b"\n").unwrap_or(&line);
        if record.is_empty() {
            continue;
        }
        let (station, value) = parse_line(record, separator)?;
        match stations.get_mut(station) {
            Some(measurement) => measurement.update(value),
            None => {
                stations.insert(station.to_vec(), Measurement::new(value));
            }
        }
    }
    Ok(stations)
}

/// Renders `{name=min/avg/max, ...}\n` in map order.
pub fn render(stations: &BTreeMap<Vec<u8>, Measurement>) -> Vec<u8> {
    let mut out = b"{".to_vec();
    for (i, (station, measurement)) in stations.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(b", ");
        }
        out.extend_from_slice(station);
        out.extend_from_slice(format!("={measurement}").as_bytes());
    }
    out.extend_from_slice(b"}\n");
    out
}

fn parse_line(line: &[u8], separator: u8) -> Result<(&[u8], f64)> {
    let idx = line
        .iter()
        .position(|&b| b == separator)
        .ok_or_else(|| Error::format(line, "no separator"))?;
    let value = std::str::from_utf8(&line[idx + 1..])
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| Error::format(line, "invalid number format"))?;
    Ok((&line[..idx], value))
}
