use std::io::{self, Write};

use crate::StationTable;

/// Renders `{name=min/avg/max, ...}\n` with stations in byte order.
pub fn render(table: &StationTable<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(table.len() * 32 + 3);
    out.push(b'{');
    for (i, (station, stats)) in table.sorted().into_iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(b", ");
        }
        out.extend_from_slice(station);
        out.push(b'=');
        out.extend_from_slice(stats.to_string().as_bytes());
    }
    out.extend_from_slice(b"}\n");
    out
}

pub fn write_summary(table: &StationTable<'_>, mut writer: impl Write) -> io::Result<()> {
    writer.write_all(&render(table))
}
