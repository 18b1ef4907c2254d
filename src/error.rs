//! Error types for range decomposition.

use std::fmt;
use thiserror::Error;

/// Which side of a range an address string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Begin,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Begin => write!(f, "begin"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CidrError {
    /// An address string is not a well-formed IPv4 or IPv6 address.
    #[error("invalid {kind} IP address: {text}")]
    Parse { kind: Endpoint, text: String },

    /// A bit primitive was called outside its contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("begin {begin} and end {end} are not the same address family")]
    MixedFamilies { begin: String, end: String },

    /// An input line that does not hold a range.
    #[error("line {line}: {reason}")]
    Line { line: usize, reason: String },

    /// A range on an input line that failed to decompose.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<CidrError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CidrError {
    /// Tag an error with the input line it came from.
    pub fn at_line(self, line: usize) -> CidrError {
        CidrError::AtLine {
            line,
            source: Box::new(self),
        }
    }

    /// The offending text of a parse failure, looking through line tags.
    pub fn parse_text(&self) -> Option<&str> {
        match self {
            CidrError::Parse { text, .. } => Some(text),
            CidrError::AtLine { source, .. } => source.parse_text(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = CidrError::Parse {
            kind: Endpoint::Begin,
            text: "192.268.1.288".to_string(),
        };
        assert_eq!(err.to_string(), "invalid begin IP address: 192.268.1.288");
        assert_eq!(err.parse_text(), Some("192.268.1.288"));
    }

    #[test]
    fn test_at_line_keeps_source() {
        use std::error::Error;

        let err = CidrError::Parse {
            kind: Endpoint::End,
            text: "10.0.0.300".to_string(),
        }
        .at_line(4);
        assert_eq!(err.to_string(), "line 4: invalid end IP address: 10.0.0.300");
        assert_eq!(err.parse_text(), Some("10.0.0.300"));
        let source = err.source().expect("line error should have a source");
        assert_eq!(source.to_string(), "invalid end IP address: 10.0.0.300");
    }

    #[test]
    fn test_non_parse_error_has_no_text() {
        let err = CidrError::InvalidInput("bit 33 out of range".into());
        assert_eq!(err.parse_text(), None);
        assert_eq!(err.to_string(), "invalid input: bit 33 out of range");
    }
}
