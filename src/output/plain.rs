//! Plain output: one CIDR per line.

use super::terminal::range_header;
use crate::RangeCidrs;
use std::io::{self, Write};

/// Write each block on its own line.
///
/// With more than one range, every group gets a `#` header line so the output
/// can be fed back as comments.
pub fn write_plain<W: Write>(out: &mut W, results: &[RangeCidrs], color: bool) -> io::Result<()> {
    let headers = results.len() > 1;
    for r in results {
        if headers {
            writeln!(out, "{}", range_header(&r.begin, &r.end, r.cidrs.len(), color))?;
        }
        for cidr in &r.cidrs {
            writeln!(out, "{cidr}")?;
        }
    }
    Ok(())
}
