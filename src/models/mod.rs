//! Address and CIDR value types.
//!
//! - [`Address`] - fixed-width IPv4/IPv6 address with its text codec
//! - [`Width`] - address family by bit width
//! - [`Cidr`] - network address plus prefix length

mod address;
mod cidr;

pub use address::{Address, Width};
pub use cidr::Cidr;
