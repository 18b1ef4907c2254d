// cargo watch -x 'fmt' -x 'test'

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, Endpoint};
pub use models::{Address, Cidr, Width};

use input::LineResult;
use processing::AddressRange;
use serde::Serialize;

/// The CIDR blocks found for one input range.
#[derive(Debug, Clone, Serialize)]
pub struct RangeCidrs {
    #[serde(skip)]
    pub line: usize,
    pub begin: String,
    pub end: String,
    pub cidrs: Vec<Cidr>,
}

/// Parse `begin` then `end`, reporting the first one that is not an address.
pub fn parse_range(begin: &str, end: &str) -> Result<AddressRange, CidrError> {
    let begin_addr: Address = begin.parse().map_err(|_| CidrError::Parse {
        kind: Endpoint::Begin,
        text: begin.to_string(),
    })?;
    let end_addr: Address = end.parse().map_err(|_| CidrError::Parse {
        kind: Endpoint::End,
        text: end.to_string(),
    })?;
    AddressRange::new(begin_addr, end_addr)
}

/// Convert the inclusive range `[begin, end]` into its CIDR blocks.
///
/// A `begin` greater than `end` is an empty range, not an error.
pub fn decompose_range_blocks(begin: &str, end: &str) -> Result<Vec<Cidr>, CidrError> {
    let range = parse_range(begin, end)?;
    if range.is_empty() {
        log::warn!("begin {begin} is after end {end}, range is empty");
    }
    range.decompose()
}

/// Convert the inclusive range `[begin, end]` into CIDR strings.
///
/// # Examples
/// ```
/// use ip_range_cidrs::decompose_range;
/// assert_eq!(
///     decompose_range("10.0.0.5", "10.0.0.7").unwrap(),
///     vec!["10.0.0.5/32", "10.0.0.6/31"]
/// );
/// assert!(decompose_range("10.0.0.9", "10.0.0.1").unwrap().is_empty());
/// ```
pub fn decompose_range(begin: &str, end: &str) -> Result<Vec<String>, CidrError> {
    let cidrs = decompose_range_blocks(begin, end)?;
    Ok(cidrs.iter().map(|c| c.to_string()).collect())
}

/// Decompose each line independently; one bad line does not stop the rest.
///
/// Lines that were already malformed pass through as their own error.
pub fn decompose_lines(lines: Vec<LineResult>) -> Vec<Result<RangeCidrs, CidrError>> {
    lines
        .into_iter()
        .map(|l| {
            let l = l?;
            let cidrs =
                decompose_range_blocks(&l.begin, &l.end).map_err(|e| e.at_line(l.line))?;
            Ok(RangeCidrs {
                line: l.line,
                begin: l.begin,
                end: l.end,
                cidrs,
            })
        })
        .collect()
}
