//! Checking a block list against the range it claims to cover.

use super::decompose::AddressRange;
use crate::models::{Address, Cidr};
use itertools::Itertools;
use std::fmt;

/// First property a block list breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverViolation {
    /// Blocks given for an empty range, or none for a non-empty one.
    WrongEmptiness { blocks: usize },
    /// A block's width differs from the range's.
    WidthMismatch { block: String },
    /// First block does not start at `begin`.
    BadStart { expected: Address, got: Address },
    /// Last block does not end at `end`.
    BadEnd { expected: Address, got: Address },
    /// Two neighbours leave a gap, overlap, or are out of order.
    NotContiguous { left: String, right: String },
    /// Two sibling blocks could be one.
    Mergeable { left: String, right: String },
}

impl fmt::Display for CoverViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoverViolation::WrongEmptiness { blocks } => {
                write!(f, "range emptiness disagrees with {blocks} blocks")
            }
            CoverViolation::WidthMismatch { block } => write!(f, "{block} has the wrong width"),
            CoverViolation::BadStart { expected, got } => {
                write!(f, "cover starts at {got}, expected {expected}")
            }
            CoverViolation::BadEnd { expected, got } => {
                write!(f, "cover ends at {got}, expected {expected}")
            }
            CoverViolation::NotContiguous { left, right } => {
                write!(f, "{left} and {right} are not adjacent")
            }
            CoverViolation::Mergeable { left, right } => {
                write!(f, "{left} and {right} could be merged")
            }
        }
    }
}

/// Check that `blocks` cover exactly `range`, in ascending order, with no
/// overlap and no mergeable sibling pair.
///
/// Block addresses are aligned by construction of [`Cidr`], so alignment is
/// not re-checked here.
pub fn verify_cover(range: &AddressRange, blocks: &[Cidr]) -> Result<(), CoverViolation> {
    if range.is_empty() || blocks.is_empty() {
        if range.is_empty() && blocks.is_empty() {
            return Ok(());
        }
        return Err(CoverViolation::WrongEmptiness {
            blocks: blocks.len(),
        });
    }

    let width = range.begin.width();
    for block in blocks {
        if block.addr().width() != width {
            return Err(CoverViolation::WidthMismatch {
                block: block.to_string(),
            });
        }
    }

    let (first, last) = (blocks[0], blocks[blocks.len() - 1]);
    if first.lo() != range.begin {
        return Err(CoverViolation::BadStart {
            expected: range.begin,
            got: first.lo(),
        });
    }
    if last.hi() != range.end {
        return Err(CoverViolation::BadEnd {
            expected: range.end,
            got: last.hi(),
        });
    }

    for (left, right) in blocks.iter().tuple_windows() {
        if left.hi().to_bits().checked_add(1) != Some(right.lo().to_bits()) {
            return Err(CoverViolation::NotContiguous {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
        if left.prefix() == right.prefix() && left.prefix() > 0 {
            let parent = Cidr::new(left.addr(), left.prefix() - 1)
                .unwrap_or_else(|e| panic!("Error widening {left}: {e}"));
            if parent.lo() == left.lo() && parent.hi() == right.hi() {
                return Err(CoverViolation::Mergeable {
                    left: left.to_string(),
                    right: right.to_string(),
                });
            }
        }
    }
    Ok(())
}
