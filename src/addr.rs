//!IPv4 address module

use core::{fmt, net, str};

use crate::error::Error;
use crate::parser::{self, ParseError};

///Number of bits within IPv4 address
pub const BITS_LEN: u8 = 32;

#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
///IPv4 address
///
///Stored as single 32-bit value where octet 0 (first printed) is the most significant byte,
///hence ordering of addresses is the same as lexicographic ordering of their octets.
pub struct Address(u32);

impl Address {
    ///Lowest possible address `0.0.0.0`
    pub const MIN: Self = Self(0);
    ///Highest possible address `255.255.255.255`
    pub const MAX: Self = Self(u32::MAX);

    #[inline]
    ///Creates address from four octets in printed order
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self((a as u32) << 24 | (b as u32) << 16 | (c as u32) << 8 | d as u32)
    }

    #[inline(always)]
    ///Wraps 32-bit integer as address
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline(always)]
    ///Returns address as 32-bit integer
    pub const fn to_bits(&self) -> u32 {
        self.0
    }

    #[inline]
    ///Returns octet by `idx`, where `0` is the first printed octet
    ///
    ///Returns `None` if `idx` is greater than 3
    pub const fn octet(&self, idx: usize) -> Option<u8> {
        if idx < 4 {
            Some((self.0 >> (24 - idx as u32 * 8)) as u8)
        } else {
            None
        }
    }

    #[inline]
    ///Returns all four octets in printed order
    pub const fn octets(&self) -> [u8; 4] {
        [(self.0 >> 24) as u8, (self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    #[inline]
    ///Parses dotted-quad text such as `192.168.1.10`
    ///
    ///Exactly four decimal octets within `0..=255` are accepted.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse_addr(text).inspect_err(|error| log::trace!("Rejected address '{text}': {error}"))
    }

    #[inline]
    ///Parses dotted-quad text, returning `None` on malformed input
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    #[inline]
    ///Returns address `n` positions after `self`, or `None` if it would be past `255.255.255.255`
    pub const fn checked_increment(&self, n: u32) -> Option<Self> {
        match self.0.checked_add(n) {
            Some(bits) => Some(Self(bits)),
            None => None,
        }
    }

    #[inline]
    ///Returns address `n` positions before `self`, or `None` if it would be before `0.0.0.0`
    pub const fn checked_decrement(&self, n: u32) -> Option<Self> {
        match self.0.checked_sub(n) {
            Some(bits) => Some(Self(bits)),
            None => None,
        }
    }

    ///Returns address `n` positions after `self`
    ///
    ///Fails with [Error::Overflow] instead of wrapping around.
    pub fn increment(&self, n: u32) -> Result<Self, Error> {
        self.checked_increment(n).ok_or_else(|| {
            log::trace!("{self} + {n} overflows address space");
            Error::Overflow
        })
    }

    ///Returns address `n` positions before `self`
    ///
    ///Fails with [Error::Overflow] instead of wrapping around.
    pub fn decrement(&self, n: u32) -> Result<Self, Error> {
        self.checked_decrement(n).ok_or_else(|| {
            log::trace!("{self} - {n} underflows address space");
            Error::Overflow
        })
    }
}

impl fmt::Display for Address {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        fmt.write_fmt(format_args!("{a}.{b}.{c}.{d}"))
    }
}

impl fmt::Debug for Address {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, fmt)
    }
}

impl str::FromStr for Address {
    type Err = ParseError;

    #[inline(always)]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl From<u32> for Address {
    #[inline(always)]
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<Address> for u32 {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<[u8; 4]> for Address {
    #[inline(always)]
    fn from([a, b, c, d]: [u8; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<Address> for [u8; 4] {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        addr.octets()
    }
}

impl From<net::Ipv4Addr> for Address {
    #[inline(always)]
    fn from(addr: net::Ipv4Addr) -> Self {
        Self(addr.to_bits())
    }
}

impl From<Address> for net::Ipv4Addr {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        net::Ipv4Addr::from_bits(addr.0)
    }
}
