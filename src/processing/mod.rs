//! Range decomposition logic.
//!
//! - [`bits`] - bit-level address helpers
//! - [`decompose`] - range to CIDR list search
//! - [`verify`] - checking a CIDR list against its range

mod bits;
mod decompose;
mod verify;

// Re-export public functions
pub use bits::{
    compare_le, first_differing_bit, gen_max_address, gen_min_address, set_bit_one, set_bit_zero,
};
pub use decompose::AddressRange;
pub use verify::{verify_cover, CoverViolation};
