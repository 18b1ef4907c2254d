//! CIDR blocks.

use super::address::Address;
use crate::error::CidrError;
use crate::processing::{gen_max_address, gen_min_address};
use serde::Serialize;

/// A network address with its prefix length.
///
/// Host bits of `addr` are always zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cidr {
    addr: Address,
    prefix: u8,
}

impl Cidr {
    /// Block of length `prefix` containing `addr`.
    ///
    /// # Examples
    /// ```
    /// use ip_range_cidrs::models::Cidr;
    /// let cidr = Cidr::new("192.168.1.42".parse().unwrap(), 24).unwrap();
    /// assert_eq!(cidr.to_string(), "192.168.1.0/24");
    /// ```
    pub fn new(addr: Address, prefix: u8) -> Result<Cidr, CidrError> {
        let addr = gen_min_address(&addr, prefix)?;
        Ok(Cidr { addr, prefix })
    }

    /// Single-host block for `addr`.
    pub fn host(addr: Address) -> Cidr {
        Cidr {
            addr,
            prefix: addr.width().bits(),
        }
    }

    pub fn addr(&self) -> Address {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Lowest (network) address in the block.
    pub fn lo(&self) -> Address {
        self.addr
    }

    /// Highest address in the block.
    pub fn hi(&self) -> Address {
        gen_max_address(&self.addr, self.prefix)
            .unwrap_or_else(|e| panic!("Error calculating maximum address for {}: {}", self, e))
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}
