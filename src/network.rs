//!CIDR network module

use core::{fmt, str};

use crate::addr::{Address, BITS_LEN};
use crate::error::Error;
use crate::parser::{self, ParseError};
use crate::range::AddressRange;

#[inline]
///Computes network mask with `prefix` highest bits set
///
///Prefix `0` yields empty mask while prefix above 32 saturates to full mask
pub const fn mask(prefix: u8) -> u32 {
    match prefix {
        0 => 0,
        prefix => u32::MAX << (BITS_LEN.saturating_sub(prefix)),
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///CIDR block of addresses
///
///Keeps address exactly as supplied, while the block itself always starts at address with all host bits cleared.
///Equality and ordering consider the supplied address, use [bounds](crate::base::AddressSet::bounds) to compare blocks.
pub struct Network {
    addr: Address,
    prefix: u8,
}

impl Network {
    #[inline]
    ///Constructs network from `addr` and `prefix`
    ///
    ///Fails with [Error::PrefixLengthOutOfRange] unless `prefix` is within `1..=32`
    pub const fn new(addr: Address, prefix: u8) -> Result<Self, Error> {
        if prefix == 0 || prefix > BITS_LEN {
            Err(Error::PrefixLengthOutOfRange(prefix))
        } else {
            Ok(Self { addr, prefix })
        }
    }

    #[inline(always)]
    ///Constructs network consisting of single `addr`, i.e. with prefix 32
    pub const fn new_single(addr: Address) -> Self {
        Self { addr, prefix: BITS_LEN }
    }

    #[inline(always)]
    pub(crate) const fn new_unchecked(addr: Address, prefix: u8) -> Self {
        Self { addr, prefix }
    }

    #[inline]
    ///Parses CIDR text such as `192.168.1.10/24`
    ///
    ///Prefix must be decimal within `1..=32`
    pub fn parse_cidr(text: &str) -> Result<Self, ParseError> {
        match parser::parse_cidr(text) {
            Ok((addr, prefix)) => Ok(Self { addr, prefix }),
            Err(error) => {
                log::trace!("Rejected CIDR '{text}': {error}");
                Err(error)
            },
        }
    }

    #[inline]
    ///Parses CIDR text, returning `None` on malformed input
    pub fn try_parse_cidr(text: &str) -> Option<Self> {
        Self::parse_cidr(text).ok()
    }

    #[inline(always)]
    ///Returns address as it was supplied, including any host bits
    pub const fn original_address(&self) -> Address {
        self.addr
    }

    #[inline(always)]
    ///Returns prefix length
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    #[inline(always)]
    ///Returns network mask
    pub const fn mask(&self) -> Address {
        Address::from_bits(mask(self.prefix))
    }

    #[inline(always)]
    ///Returns host mask, the inverse of network mask
    pub const fn hostmask(&self) -> Address {
        Address::from_bits(!mask(self.prefix))
    }

    #[inline]
    ///Returns network address, which is the lowest address within the block
    pub const fn first(&self) -> Address {
        Address::from_bits(self.addr.to_bits() & mask(self.prefix))
    }

    #[inline]
    ///Returns broadcast address, which is the highest address within the block
    pub const fn last(&self) -> Address {
        Address::from_bits(self.addr.to_bits() | !mask(self.prefix))
    }

    #[inline]
    ///Checks whether supplied address has no host bits set
    pub const fn is_aligned(&self) -> bool {
        self.addr.to_bits() == self.first().to_bits()
    }

    #[inline]
    ///Returns the same block with supplied address replaced by network address
    pub const fn normalized(&self) -> Self {
        Self {
            addr: self.first(),
            prefix: self.prefix,
        }
    }

    #[inline]
    ///Returns block bounds as plain range
    pub const fn range(&self) -> AddressRange {
        AddressRange::new_unchecked(self.first(), self.last())
    }

    #[inline]
    ///Attempts to fetch address by `idx` within the block
    pub const fn get(&self, idx: u32) -> Option<Address> {
        if idx as u64 >= self.count() {
            return None;
        }

        Some(Address::from_bits(self.first().to_bits() + idx))
    }
}

crate::base::impl_address_set!(Network);

impl fmt::Display for Network {
    ///Writes `first/prefix`
    ///
    ///Alternate form `{:#}` writes supplied address instead of network address.
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix;
        let addr = match fmt.alternate() {
            true => self.addr,
            false => self.first(),
        };
        fmt.write_fmt(format_args!("{addr}/{prefix}"))
    }
}

impl str::FromStr for Network {
    type Err = ParseError;

    #[inline(always)]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_cidr(text)
    }
}

impl From<Address> for Network {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        Self::new_single(addr)
    }
}
