//! Reading address ranges in bulk.
//!
//! One range per line, written `BEGIN END`, `BEGIN - END` or `BEGIN,END`.
//! Blank lines and anything after `#` are ignored.

use crate::error::CidrError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A range as written on one input line, not yet parsed into addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeLine {
    /// 1-based line number in the source.
    pub line: usize,
    pub begin: String,
    pub end: String,
}

lazy_static! {
    static ref RE: Regex = Regex::new(r"^([0-9A-Za-z:.]+)\s*(?:-|,|\s)\s*([0-9A-Za-z:.]+)$")
        .expect("Invalid Regex?");
}

/// Split one line into its begin and end text.
///
/// `Ok(None)` for lines with nothing but whitespace or a comment.
pub fn parse_range_line(line: usize, text: &str) -> Result<Option<RangeLine>, CidrError> {
    let text = text.split('#').next().unwrap_or_default().trim();
    if text.is_empty() {
        return Ok(None);
    }
    let caps = RE.captures(text).ok_or_else(|| CidrError::Line {
        line,
        reason: format!("expected 'BEGIN END', got '{text}'"),
    })?;
    log::trace!("line {line}: {caps:?}");
    Ok(Some(RangeLine {
        line,
        begin: caps[1].to_string(),
        end: caps[2].to_string(),
    }))
}

/// One input line: a range, or the reason it is not one.
pub type LineResult = Result<RangeLine, CidrError>;

/// Read every range from `reader`.
///
/// Malformed lines come back as `Err` entries in place so the rest of the
/// batch still runs; only a read failure stops the whole call.
pub fn read_ranges<R: BufRead>(reader: R) -> Result<Vec<LineResult>, CidrError> {
    let mut ranges = Vec::new();
    for (i, text) in reader.lines().enumerate() {
        if let Some(range) = parse_range_line(i + 1, &text?).transpose() {
            ranges.push(range);
        }
    }
    log::debug!("read {} ranges", ranges.len());
    Ok(ranges)
}

/// Read ranges from a file, or from stdin when `path` is `-`.
pub fn read_ranges_file(path: &str) -> Result<Vec<LineResult>, CidrError> {
    if path == "-" {
        log::info!("Reading ranges from stdin");
        return read_ranges(io::stdin().lock());
    }
    if !Path::new(path).exists() {
        return Err(CidrError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("range file does not exist: {path}"),
        )));
    }
    log::info!("Reading ranges from file: {path}");
    read_ranges(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> (String, String) {
        let r = parse_range_line(1, text).unwrap().unwrap();
        (r.begin, r.end)
    }

    #[test]
    fn test_parse_range_line_separators() {
        let want = ("10.0.0.1".to_string(), "10.0.0.9".to_string());
        assert_eq!(split("10.0.0.1 10.0.0.9"), want);
        assert_eq!(split("10.0.0.1 - 10.0.0.9"), want);
        assert_eq!(split("10.0.0.1-10.0.0.9"), want);
        assert_eq!(split("10.0.0.1,10.0.0.9"), want);
        assert_eq!(split("  10.0.0.1\t10.0.0.9  # office"), want);
    }

    #[test]
    fn test_parse_range_line_ipv6() {
        assert_eq!(
            split("2408:874f:2000:100::fff - 2408:874f:2000:1ff:ffff:ffff:ffff:ffff"),
            (
                "2408:874f:2000:100::fff".to_string(),
                "2408:874f:2000:1ff:ffff:ffff:ffff:ffff".to_string()
            )
        );
    }

    #[test]
    fn test_parse_range_line_skips_blank_and_comment() {
        assert_eq!(parse_range_line(1, "").unwrap(), None);
        assert_eq!(parse_range_line(2, "   ").unwrap(), None);
        assert_eq!(parse_range_line(3, "# just a note").unwrap(), None);
    }

    #[test]
    fn test_parse_range_line_rejects_single_address() {
        let err = parse_range_line(7, "10.0.0.1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 7: expected 'BEGIN END', got '10.0.0.1'"
        );
        assert!(parse_range_line(8, "10.0.0.1 10.0.0.2 10.0.0.3").is_err());
    }

    #[test]
    fn test_parse_range_line_keeps_bad_addresses_for_later() {
        // address validation belongs to the decomposer, not the line splitter
        assert_eq!(
            split("192.268.1.288 192.268.1.289"),
            ("192.268.1.288".to_string(), "192.268.1.289".to_string())
        );
    }

    #[test]
    fn test_read_ranges_numbers_lines() {
        let text = "# header\n10.0.0.0 10.0.0.255\n\n::1 - ::ff\n";
        let ranges: Vec<RangeLine> = read_ranges(text.as_bytes())
            .unwrap()
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].line, 2);
        assert_eq!(ranges[1].line, 4);
        assert_eq!(ranges[1].begin, "::1");
    }

    #[test]
    fn test_read_ranges_keeps_lines_after_malformed_one() {
        let text = "10.0.0.1 10.0.0.3\nbogus\n10.0.0.8 - 10.0.0.15\n";
        let ranges = read_ranges(text.as_bytes()).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].as_ref().unwrap().end, "10.0.0.3");
        assert_eq!(
            ranges[1].as_ref().unwrap_err().to_string(),
            "line 2: expected 'BEGIN END', got 'bogus'"
        );
        assert_eq!(ranges[2].as_ref().unwrap().line, 3);
    }

    #[test]
    fn test_read_ranges_file_fixture() {
        let ranges = read_ranges_file("src/tests/test_data/ranges_01.txt")
            .expect("Error reading range fixture");
        assert_eq!(ranges.len(), 5);
        let first = ranges[0].as_ref().unwrap();
        assert_eq!(first.begin, "192.168.1.3");
        assert_eq!(first.end, "192.168.1.254");
    }

    #[test]
    fn test_read_ranges_file_missing() {
        let err = read_ranges_file("src/tests/test_data/does_not_exist.txt").unwrap_err();
        assert!(matches!(err, CidrError::Io(_)));
    }
}
