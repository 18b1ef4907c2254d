//! CSV output formatting for decomposed ranges.

use super::terminal::format_field;
use crate::RangeCidrs;
use std::io::{self, Write};

/// Write one `"begin","end","cidr"` row per block, with a header row.
pub fn write_csv<W: Write>(out: &mut W, results: &[RangeCidrs]) -> io::Result<()> {
    log::info!("#Start write_csv() ranges={}", results.len());
    writeln!(
        out,
        "{},{},{}",
        format_field("begin", 17),
        format_field("end", 17),
        format_field("cidr", 20)
    )?;
    for r in results {
        for cidr in &r.cidrs {
            writeln!(
                out,
                "{begin},{end},{cidr}",
                begin = format_field(&r.begin, 17),
                end = format_field(&r.end, 17),
                cidr = format_field(cidr, 20),
            )?;
        }
    }
    Ok(())
}
