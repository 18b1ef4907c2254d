//! Output formatting for decomposed ranges.
//!
//! - [`plain`] - one CIDR per line
//! - [`csv`] - CSV rows with quoted fields
//! - [`json`] - JSON array
//! - [`terminal`] - shared field and header helpers

mod csv;
mod json;
mod plain;
mod terminal;

pub use csv::write_csv;
pub use json::write_json;
pub use plain::write_plain;
pub use terminal::{format_field, range_header};

use crate::RangeCidrs;
use clap::ValueEnum;
use std::io::{self, Write};

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Csv,
    Json,
}

/// Write `results` in the chosen format.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[RangeCidrs],
    format: OutputFormat,
    color: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, results, color),
        OutputFormat::Csv => write_csv(out, results),
        OutputFormat::Json => write_json(out, results),
    }
}
