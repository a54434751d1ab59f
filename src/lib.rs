//! IPv4 address range and CIDR network algebra
//!
//! - [Address] is a single IPv4 address;
//! - [AddressRange] is an arbitrary inclusive span of addresses;
//! - [Network] is a CIDR block derived from an address and prefix length.
//!
//! Both ranges and networks implement [AddressSet], providing containment, subset, superset and
//! overlap checks together with lazy enumeration of addresses.
//!
//! ## Features
//!
//! - `serde` - Enables (de)serialization of all types using their textual form.

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

mod parser;
pub use parser::{parse_ip, ParseError};
mod error;
pub use error::Error;
pub mod base;
pub use base::{AddressSet, Addresses};
pub mod addr;
pub use addr::Address;
pub mod range;
pub use range::{AddressRange, Networks};
pub mod network;
pub use network::Network;
#[cfg(feature = "serde")]
mod serde_impl;

#[inline]
///Parses [Network](network/struct.Network.html) from the input `text`
///
///Unlike [Network::parse_cidr], missing prefix is accepted and assumed to be 32, making `text`
///a single address network.
pub const fn parse_network(text: &str) -> Result<Network, ParseError> {
    match parse_ip(text) {
        Ok((addr, None)) => Ok(Network::new_single(addr)),
        Ok((addr, Some(prefix))) => Ok(Network::new_unchecked(addr, prefix)),
        Err(error) => Err(error),
    }
}
