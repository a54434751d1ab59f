//!Error module

use crate::addr::Address;
use crate::parser::ParseError;
use crate::range::AddressRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
///Errors constructing or combining addresses, ranges and networks
pub enum Error {
    ///Malformed address or CIDR text
    #[error(transparent)]
    Format(#[from] ParseError),
    ///First address of the range is greater than the last one
    #[error("Range is inverted: first address {first} is greater than last address {last}")]
    RangeInversion {
        ///Supplied first address
        first: Address,
        ///Supplied last address
        last: Address,
    },
    ///Prefix length is outside of `1..=32`
    #[error("Prefix length '{0}' is outside of allowed range 1..=32")]
    PrefixLengthOutOfRange(u8),
    ///Range is requested to contain zero addresses
    #[error("Address count must be at least 1")]
    ZeroCount,
    ///Result would leave `0.0.0.0..=255.255.255.255`
    #[error("Result is outside of address space 0.0.0.0..=255.255.255.255")]
    Overflow,
    ///Ranges are separated by at least one address and cannot be merged
    #[error("Ranges {0} and {1} are separated by a gap")]
    Disjoint(AddressRange, AddressRange),
}
