//! Splitting an inclusive address range into the fewest CIDR blocks.
//!
//! The search walks the binary trie of the address space starting at the
//! first bit where `begin` and `end` differ. A node whose whole block fits in
//! the range is emitted; a node that overlaps it only partly is split into its
//! two children; a node that misses it entirely is dropped. Left children go
//! first, so blocks come out in ascending address order.

use crate::error::CidrError;
use crate::models::{Address, Cidr};

use super::bits::{
    compare_le, first_differing_bit, gen_max_address, gen_min_address, set_bit_one, set_bit_zero,
};

/// An inclusive `[begin, end]` range of one address width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressRange {
    pub begin: Address,
    pub end: Address,
}

impl AddressRange {
    /// Pair `begin` and `end`, which must share a width.
    ///
    /// `begin > end` is allowed and yields an empty range.
    pub fn new(begin: Address, end: Address) -> Result<AddressRange, CidrError> {
        if begin.width() != end.width() {
            return Err(CidrError::MixedFamilies {
                begin: begin.to_string(),
                end: end.to_string(),
            });
        }
        Ok(AddressRange { begin, end })
    }

    pub fn is_empty(&self) -> bool {
        self.begin > self.end
    }

    /// The minimal ordered list of blocks covering exactly this range.
    ///
    /// # Examples
    /// ```
    /// use ip_range_cidrs::processing::AddressRange;
    /// let range = AddressRange::new("10.0.0.5".parse().unwrap(), "10.0.0.7".parse().unwrap())
    ///     .unwrap();
    /// let cidrs: Vec<String> = range.decompose().unwrap().iter().map(|c| c.to_string()).collect();
    /// assert_eq!(cidrs, vec!["10.0.0.5/32", "10.0.0.6/31"]);
    /// ```
    pub fn decompose(&self) -> Result<Vec<Cidr>, CidrError> {
        if !compare_le(&self.begin, &self.end)? {
            log::debug!("empty range {} > {}", self.begin, self.end);
            return Ok(Vec::new());
        }

        let pos = match first_differing_bit(&self.begin, &self.end)? {
            Some(pos) => pos,
            None => return Ok(vec![Cidr::host(self.begin)]),
        };
        log::trace!("{} - {} first differ at bit {pos}", self.begin, self.end);

        let ip = self.begin;
        if self.contains_block(&ip, pos)? {
            return Ok(vec![Cidr::new(ip, pos)?]);
        }

        let mut out = Vec::new();
        self.descend(ip, pos, &mut out)?;
        log::debug!("{} - {} -> {} blocks", self.begin, self.end, out.len());
        Ok(out)
    }

    /// Visit both children of the node at depth `pos` that contains `ip`.
    fn descend(&self, ip: Address, pos: u8, out: &mut Vec<Cidr>) -> Result<(), CidrError> {
        if pos >= ip.width().bits() {
            return Ok(());
        }
        let left = set_bit_zero(&ip, pos)?;
        self.visit(left, pos + 1, out)?;
        let right = set_bit_one(&ip, pos)?;
        self.visit(right, pos + 1, out)
    }

    /// Emit the block of length `prefix` containing `ip`, or split it.
    fn visit(&self, ip: Address, prefix: u8, out: &mut Vec<Cidr>) -> Result<(), CidrError> {
        if self.contains_block(&ip, prefix)? {
            out.push(Cidr::new(ip, prefix)?);
            return Ok(());
        }
        if self.misses_block(&ip, prefix)? {
            return Ok(());
        }
        self.descend(ip, prefix, out)
    }

    /// Boundary test: the whole block lies inside the range.
    fn contains_block(&self, ip: &Address, prefix: u8) -> Result<bool, CidrError> {
        let min_addr = gen_min_address(ip, prefix)?;
        let max_addr = gen_max_address(ip, prefix)?;
        Ok(compare_le(&self.begin, &min_addr)? && compare_le(&max_addr, &self.end)?)
    }

    /// The whole block lies outside the range.
    fn misses_block(&self, ip: &Address, prefix: u8) -> Result<bool, CidrError> {
        let min_addr = gen_min_address(ip, prefix)?;
        let max_addr = gen_max_address(ip, prefix)?;
        Ok(!compare_le(&self.begin, &max_addr)? || !compare_le(&min_addr, &self.end)?)
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.begin, self.end)
    }
}
