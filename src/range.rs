//!Address range module

use core::iter::FusedIterator;
use core::{cmp, fmt, str};

use crate::addr::{Address, BITS_LEN};
use crate::base::AddressSet;
use crate::error::Error;
use crate::network::Network;
use crate::parser::ParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///Inclusive range of addresses `[first, last]`
///
///Range is never empty: `first` is never greater than `last`, so the smallest range is a single address.
pub struct AddressRange {
    first: Address,
    last: Address,
}

impl AddressRange {
    #[inline]
    ///Constructs range from its inclusive bounds
    ///
    ///Fails with [Error::RangeInversion] if `first` is greater than `last`
    pub const fn new(first: Address, last: Address) -> Result<Self, Error> {
        if first.to_bits() > last.to_bits() {
            Err(Error::RangeInversion { first, last })
        } else {
            Ok(Self { first, last })
        }
    }

    #[inline(always)]
    pub(crate) const fn new_unchecked(first: Address, last: Address) -> Self {
        Self { first, last }
    }

    #[inline(always)]
    ///Constructs range consisting of single `addr`
    pub const fn single(addr: Address) -> Self {
        Self { first: addr, last: addr }
    }

    ///Constructs range of `count` addresses starting with `first`
    ///
    ///Fails with [Error::ZeroCount] if `count` is zero, and with [Error::Overflow] if the range would
    ///end past `255.255.255.255`
    pub const fn from_first_count(first: Address, count: u64) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::ZeroCount);
        }

        match (first.to_bits() as u64).checked_add(count - 1) {
            Some(last) if last <= u32::MAX as u64 => Ok(Self {
                first,
                last: Address::from_bits(last as u32),
            }),
            _ => Err(Error::Overflow),
        }
    }

    ///Constructs range of `count` addresses ending with `last`
    ///
    ///Fails with [Error::ZeroCount] if `count` is zero, and with [Error::Overflow] if the range would
    ///start before `0.0.0.0`
    pub const fn from_count_last(count: u64, last: Address) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::ZeroCount);
        }

        match (last.to_bits() as u64).checked_sub(count - 1) {
            Some(first) => Ok(Self {
                first: Address::from_bits(first as u32),
                last,
            }),
            None => Err(Error::Overflow),
        }
    }

    #[inline(always)]
    ///Returns lowest address within the range
    pub const fn first(&self) -> Address {
        self.first
    }

    #[inline(always)]
    ///Returns highest address within the range
    pub const fn last(&self) -> Address {
        self.last
    }

    ///Attempts to merge `self` with `other` into single range
    ///
    ///Succeeds when ranges overlap or are adjacent (no address lies between them), returning
    ///range from the lowest to the highest address of both.
    ///Returns `None` when there is a gap between the ranges.
    pub fn try_merge<S: AddressSet + ?Sized>(&self, other: &S) -> Option<Self> {
        //Widened so that adjacency at 255.255.255.255 cannot overflow
        let first = self.first.to_bits() as u64;
        let last = self.last.to_bits() as u64;
        let other_first = other.first().to_bits() as u64;
        let other_last = other.last().to_bits() as u64;

        if first <= other_last + 1 && other_first <= last + 1 {
            Some(Self {
                first: cmp::min(self.first, other.first()),
                last: cmp::max(self.last, other.last()),
            })
        } else {
            log::trace!("{self} cannot be merged with {}", other.bounds());
            None
        }
    }

    #[inline]
    ///Merges `self` with `other` into single range
    ///
    ///Fails with [Error::Disjoint] when there is a gap between the ranges.
    pub fn merge<S: AddressSet + ?Sized>(&self, other: &S) -> Result<Self, Error> {
        self.try_merge(other).ok_or_else(|| Error::Disjoint(*self, other.bounds()))
    }

    #[inline]
    ///Returns iterator over the smallest ascending sequence of CIDR blocks covering the range exactly
    pub const fn networks(&self) -> Networks {
        Networks {
            front: self.first.to_bits() as u64,
            back: (self.last.to_bits() as u64) + 1,
        }
    }
}

crate::base::impl_address_set!(AddressRange);

impl fmt::Display for AddressRange {
    #[inline]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { first, last } = self;
        fmt.write_fmt(format_args!("{first}-{last}"))
    }
}

impl str::FromStr for AddressRange {
    type Err = Error;

    ///Parses range in form `first-last`, such as `10.0.0.1-10.0.0.20`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parse = || -> Result<Self, Error> {
            let (first, last) = text.split_once('-').ok_or(ParseError::MissingDash)?;
            Self::new(Address::parse(first)?, Address::parse(last)?)
        };
        parse().inspect_err(|error| log::trace!("Rejected range '{text}': {error}"))
    }
}

impl From<Address> for AddressRange {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        Self::single(addr)
    }
}

impl From<Network> for AddressRange {
    #[inline(always)]
    fn from(network: Network) -> Self {
        network.range()
    }
}

#[derive(Clone, Debug)]
///Lazy iterator over CIDR blocks covering a range
///
///Every yielded block is the largest one aligned on the current position that still fits within
///the remaining range, hence blocks are produced in ascending order and never overlap.
pub struct Networks {
    front: u64,
    //One past the last address to cover
    back: u64,
}

impl Iterator for Networks {
    type Item = Network;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        //Prefix 0 is not valid network, so whole address space is split in halves
        let aligned_bits = cmp::min(self.front.trailing_zeros(), BITS_LEN as u32 - 1);
        let remaining = self.back - self.front;
        let fitting_bits = u64::BITS - 1 - remaining.leading_zeros();
        let host_bits = cmp::min(aligned_bits, fitting_bits);

        let network = Network::new_unchecked(Address::from_bits(self.front as u32), (BITS_LEN as u32 - host_bits) as u8);
        self.front += 1u64 << host_bits;
        Some(network)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front < self.back {
            //Each power of two is used at most twice
            (1, Some(2 * BITS_LEN as usize))
        } else {
            (0, Some(0))
        }
    }
}

impl FusedIterator for Networks {}
