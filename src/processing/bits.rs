//! Bit-level helpers over fixed-width addresses.
//!
//! Bit positions count from the most significant bit of the first octet, so
//! position `p` is also "the first `p` bits form the prefix". Every helper
//! returns a fresh [`Address`]; inputs are never modified.

use crate::error::CidrError;
use crate::models::Address;

/// `true` iff `a <= b` as big-endian unsigned integers.
///
/// # Examples
/// ```
/// use ip_range_cidrs::models::Address;
/// use ip_range_cidrs::processing::compare_le;
/// let a: Address = "1.1.1.0".parse().unwrap();
/// let b: Address = "1.1.1.1".parse().unwrap();
/// assert!(compare_le(&a, &b).unwrap());
/// assert!(!compare_le(&b, &a).unwrap());
/// ```
pub fn compare_le(a: &Address, b: &Address) -> Result<bool, CidrError> {
    same_width(a, b)?;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes()) {
        if x != y {
            return Ok(x < y);
        }
    }
    Ok(true)
}

/// Copy of `addr` with bit `pos` cleared.
pub fn set_bit_zero(addr: &Address, pos: u8) -> Result<Address, CidrError> {
    check_bit(addr, pos)?;
    let mut out = *addr;
    out.bytes_mut()[usize::from(pos >> 3)] &= !single_bit(pos);
    Ok(out)
}

/// Copy of `addr` with bit `pos` set.
pub fn set_bit_one(addr: &Address, pos: u8) -> Result<Address, CidrError> {
    check_bit(addr, pos)?;
    let mut out = *addr;
    out.bytes_mut()[usize::from(pos >> 3)] |= single_bit(pos);
    Ok(out)
}

/// Smallest address sharing the first `pos` bits with `addr`.
pub fn gen_min_address(addr: &Address, pos: u8) -> Result<Address, CidrError> {
    check_prefix(addr, pos)?;
    let mut out = *addr;
    let index = usize::from(pos >> 3);
    let bytes = out.bytes_mut();
    if index < bytes.len() {
        bytes[index] &= high_bits(pos % 8);
        bytes[index + 1..].fill(0x00);
    }
    Ok(out)
}

/// Largest address sharing the first `pos` bits with `addr`.
pub fn gen_max_address(addr: &Address, pos: u8) -> Result<Address, CidrError> {
    check_prefix(addr, pos)?;
    let mut out = *addr;
    let index = usize::from(pos >> 3);
    let bytes = out.bytes_mut();
    if index < bytes.len() {
        bytes[index] |= !high_bits(pos % 8);
        bytes[index + 1..].fill(0xff);
    }
    Ok(out)
}

/// Position of the most significant bit where `a` and `b` differ.
///
/// `None` when the addresses are equal.
pub fn first_differing_bit(a: &Address, b: &Address) -> Result<Option<u8>, CidrError> {
    same_width(a, b)?;
    let found = a
        .as_bytes()
        .iter()
        .zip(b.as_bytes())
        .enumerate()
        .find(|(_, (x, y))| x != y)
        .map(|(i, (x, y))| 8 * i as u8 + (x ^ y).leading_zeros() as u8);
    Ok(found)
}

/// Byte with only the bit for `pos` set.
fn single_bit(pos: u8) -> u8 {
    0x80 >> (pos % 8)
}

/// Byte with the top `n` bits set, `n` in `0..8`.
fn high_bits(n: u8) -> u8 {
    (0xff_u16 << (8 - n)) as u8
}

fn same_width(a: &Address, b: &Address) -> Result<(), CidrError> {
    if a.width() != b.width() {
        return Err(CidrError::InvalidInput(format!(
            "cannot compare {a} with {b}: widths differ"
        )));
    }
    Ok(())
}

fn check_bit(addr: &Address, pos: u8) -> Result<(), CidrError> {
    if pos >= addr.width().bits() {
        return Err(CidrError::InvalidInput(format!(
            "bit {pos} out of range for {addr}"
        )));
    }
    Ok(())
}

fn check_prefix(addr: &Address, pos: u8) -> Result<(), CidrError> {
    if pos > addr.width().bits() {
        return Err(CidrError::InvalidInput(format!(
            "prefix length {pos} too long for {addr}"
        )));
    }
    Ok(())
}
