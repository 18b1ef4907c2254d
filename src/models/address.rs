//! Fixed-width IP addresses.
//!
//! An [`Address`] is the octets of an IPv4 or IPv6 address read as one
//! big-endian unsigned integer. Parsing and formatting go through the
//! standard library so the text forms match the usual dotted-decimal and
//! compressed colon-hex conventions.

use std::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family, by its width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    V4,
    V6,
}

impl Width {
    /// Number of octets in an address of this width.
    pub const fn bytes(self) -> usize {
        match self {
            Width::V4 => 4,
            Width::V6 => 16,
        }
    }

    /// Number of bits, which is also the host prefix length.
    pub const fn bits(self) -> u8 {
        match self {
            Width::V4 => 32,
            Width::V6 => 128,
        }
    }
}

/// An IPv4 or IPv6 address as a fixed-width byte string.
///
/// Only the first `width.bytes()` octets are meaningful; the rest stay zero so
/// the derived ordering matches big-endian order within one width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    width: Width,
    octets: [u8; 16],
}

impl Address {
    /// The all-zero address of the given width.
    pub const fn zero(width: Width) -> Address {
        Address {
            width,
            octets: [0; 16],
        }
    }

    /// Build an address of `width` from the low bits of `bits`.
    pub fn from_bits(width: Width, bits: u128) -> Address {
        match width {
            Width::V4 => Address::from(Ipv4Addr::from(bits as u32)),
            Width::V6 => Address::from(Ipv6Addr::from(bits)),
        }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.octets[..self.width.bytes()]
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        let len = self.width.bytes();
        &mut self.octets[..len]
    }

    /// The address as an unsigned integer.
    pub fn to_bits(&self) -> u128 {
        self.as_bytes()
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | u128::from(b))
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        match self.width {
            Width::V4 => {
                let [a, b, c, d, ..] = self.octets;
                IpAddr::V4(Ipv4Addr::new(a, b, c, d))
            }
            Width::V6 => IpAddr::V6(Ipv6Addr::from(self.octets)),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Address {
        let mut out = Address::zero(Width::V4);
        out.octets[..4].copy_from_slice(&addr.octets());
        out
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Address {
        Address {
            width: Width::V6,
            octets: addr.octets(),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Address {
        match addr {
            IpAddr::V4(v4) => Address::from(v4),
            IpAddr::V6(v6) => Address::from(v6),
        }
    }
}

impl FromStr for Address {
    type Err = AddrParseError;

    /// The width follows the parsed family: dotted-decimal text gives a
    /// 4-byte address, anything else a 16-byte one.
    fn from_str(s: &str) -> Result<Address, AddrParseError> {
        s.parse::<IpAddr>().map(Address::from)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_ip_addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_width_follows_family() {
        let v4: Address = "10.0.0.5".parse().unwrap();
        assert_eq!(v4.width(), Width::V4);
        assert_eq!(v4.as_bytes(), &[10, 0, 0, 5]);

        let v6: Address = "2408:874f:2000:100::fff".parse().unwrap();
        assert_eq!(v6.width(), Width::V6);
        assert_eq!(v6.as_bytes().len(), 16);
        assert_eq!(v6.as_bytes()[14..], [0x0f, 0xff]);
    }

    #[test]
    fn test_parse_rejects_bad_text() {
        assert!("192.268.1.288".parse::<Address>().is_err());
        assert!("".parse::<Address>().is_err());
        assert!("10.0.0".parse::<Address>().is_err());
        assert!("2408:::1".parse::<Address>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for text in [
            "0.0.0.0",
            "192.168.1.254",
            "255.255.255.255",
            "::",
            "::1",
            "2408:874f:2000:100::1000",
            "2408:874f:2000:100:0:1::",
            "fe80::1:2:3:4",
        ] {
            let addr: Address = text.parse().unwrap();
            assert_eq!(addr.to_string(), text);
        }
    }

    #[test]
    fn test_bits_conversion() {
        let addr: Address = "192.168.1.3".parse().unwrap();
        assert_eq!(addr.to_bits(), 0xC0A8_0103);
        assert_eq!(Address::from_bits(Width::V4, 0xC0A8_0103), addr);

        let v6: Address = "::1:0".parse().unwrap();
        assert_eq!(v6.to_bits(), 0x1_0000);
        assert_eq!(
            Address::from_bits(Width::V6, u128::MAX).to_string(),
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"
        );
    }

    #[test]
    fn test_ordering_within_width() {
        let a: Address = "10.0.0.255".parse().unwrap();
        let b: Address = "10.0.1.0".parse().unwrap();
        assert!(a < b);
        assert!(b >= a);
    }
}
