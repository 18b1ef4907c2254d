//! JSON output.

use crate::RangeCidrs;
use std::io::{self, Write};

/// Write all results as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, results: &[RangeCidrs]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)
}
