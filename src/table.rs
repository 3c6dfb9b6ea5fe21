use gxhash::{HashMap, HashMapExt};

use crate::Stats;

/// Per-station statistics keyed by names borrowed from the input.
///
/// Keys are never copied: they point into the mapped file, which ties every
/// table to the lifetime of its [`MappedInput`](crate::MappedInput).
#[derive(Debug, Clone, PartialEq)]
pub struct StationTable<'a> {
    stations: HashMap<&'a [u8], Stats>,
}

impl<'a> StationTable<'a> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stations: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn update(&mut self, name: &'a [u8], value: i16) {
        match self.stations.get_mut(name) {
            Some(stats) => stats.update(value),
            None => {
                self.stations.insert(name, Stats::new(value));
            }
        }
    }

    pub fn merge_stats(&mut self, name: &'a [u8], stats: &Stats) {
        self.stations
            .entry(name)
            .and_modify(|existing| existing.merge(stats))
            .or_insert(*stats);
    }

    /// Folds every station of `other` into this table.
    pub fn absorb(&mut self, other: StationTable<'a>) {
        for (name, stats) in other.stations {
            self.merge_stats(name, &stats);
        }
    }

    pub fn get(&self, name: &[u8]) -> Option<&Stats> {
        self.stations.get(name)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a [u8], &Stats)> {
        self.stations.iter().map(|(name, stats)| (*name, stats))
    }

    /// Entries ordered byte-wise by station name.
    pub fn sorted(&self) -> Vec<(&'a [u8], &Stats)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries
    }
}

impl Default for StationTable<'_> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

/// Merges per-chunk tables in the order given, into the first one.
pub fn merge_all<'a>(tables: impl IntoIterator<Item = StationTable<'a>>) -> StationTable<'a> {
    let mut tables = tables.into_iter();
    let Some(mut merged) = tables.next() else {
        return StationTable::default();
    };
    for table in tables {
        merged.absorb(table);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of<'a>(records: &[(&'a str, i16)]) -> StationTable<'a> {
        let mut table = StationTable::with_capacity(16);
        for &(name, value) in records {
            table.update(name.as_bytes(), value);
        }
        table
    }

    #[test]
    fn update_inserts_then_accumulates() {
        let table = table_of(&[("Hamburg", 120), ("Bulawayo", 89), ("Hamburg", -52)]);
        assert_eq!(table.len(), 2);
        let hamburg = table.get(b"Hamburg").unwrap();
        assert_eq!(hamburg.count(), 2);
        assert_eq!(hamburg.sum(), 68);
        assert!(table.get(b"Berlin").is_none());
    }

    #[test]
    fn lookup_by_borrowed_slice() {
        let table = table_of(&[("Oslo", 10)]);
        let owned = b"Oslo".to_vec();
        assert_eq!(table.get(&owned).map(Stats::count), Some(1));
    }

    #[test]
    fn merge_all_matches_single_table() {
        let records = [("a", 1), ("b", -2), ("a", 30), ("c", 999), ("b", -999), ("a", 0)];
        let whole = table_of(&records);
        let parts = [table_of(&records[..2]), table_of(&records[2..3]), table_of(&records[3..])];
        assert_eq!(merge_all(parts.clone()), whole);
        assert_eq!(merge_all(parts.into_iter().rev()), whole);
    }

    #[test]
    fn merge_all_of_nothing_is_empty() {
        assert!(merge_all(Vec::new()).is_empty());
    }

    #[test]
    fn sorted_orders_bytewise() {
        let table = table_of(&[("Zürich", 1), ("Abha", 2), ("Zagreb", 3)]);
        let names: Vec<_> = table.sorted().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, [&b"Abha"[..], b"Zagreb", "Zürich".as_bytes()]);
    }
}
