//! Base module

use core::iter::FusedIterator;

use crate::addr::Address;
use crate::range::AddressRange;

#[inline]
///Returns number of addresses within inclusive `[first, last]`, assuming `first <= last`
pub(crate) const fn count(first: Address, last: Address) -> u64 {
    (last.to_bits() as u64) - (first.to_bits() as u64) + 1
}

//Takes first and last yielded elements as bounds
fn sequence_bounds<I: IntoIterator<Item = Address>>(sequence: I) -> Option<(Address, Address)> {
    let mut sequence = sequence.into_iter();
    let first = sequence.next()?;
    let last = sequence.last().unwrap_or(first);
    Some((first, last))
}

///Read-only set of consecutive addresses
///
///Implemented by both [AddressRange](../range/struct.AddressRange.html) and
///[Network](../network/struct.Network.html), so code operating over a set of addresses
///does not need to distinguish arbitrary ranges from CIDR blocks.
pub trait AddressSet {
    ///Returns lowest address within the set
    fn first(&self) -> Address;
    ///Returns highest address within the set
    fn last(&self) -> Address;

    #[inline]
    ///Returns number of addresses within the set
    ///
    ///Set spanning whole address space reports `4294967296`
    fn count(&self) -> u64 {
        count(self.first(), self.last())
    }

    #[inline]
    ///Checks if a given `addr` is contained within `self`
    fn contains(&self, addr: Address) -> bool {
        self.first() <= addr && addr <= self.last()
    }

    #[inline]
    ///Checks if `self` and `other` have at least one address in common
    fn overlaps<S: AddressSet + ?Sized>(&self, other: &S) -> bool {
        self.first() <= other.last() && other.first() <= self.last()
    }

    #[inline]
    ///Checks if every address of `self` is within `other`
    fn is_subset_of<S: AddressSet + ?Sized>(&self, other: &S) -> bool {
        other.first() <= self.first() && self.last() <= other.last()
    }

    #[inline]
    ///Checks if every address of `other` is within `self`
    fn is_superset_of<S: AddressSet + ?Sized>(&self, other: &S) -> bool {
        self.first() <= other.first() && other.last() <= self.last()
    }

    ///Checks if `self` lies within bounds of `sequence`
    ///
    ///**Restriction**: only the first and the last yielded addresses are inspected and taken as
    ///bounds of the sequence. The answer is correct only when `sequence` is sorted and
    ///gap-free; any other sequence is treated as if it covered everything between its first and
    ///last elements.
    ///
    ///Empty sequence has no bounds, therefore it is never a superset of `self`.
    fn is_subset_of_sequence<I: IntoIterator<Item = Address>>(&self, sequence: I) -> bool {
        match sequence_bounds(sequence) {
            Some((first, last)) => first <= self.first() && self.last() <= last,
            None => false,
        }
    }

    ///Checks if bounds of `sequence` lie within `self`
    ///
    ///**Restriction**: only the first and the last yielded addresses are inspected and taken as
    ///bounds of the sequence. The answer is correct only when `sequence` is sorted and
    ///gap-free; addresses between first and last elements are never checked.
    ///
    ///Empty sequence is a subset of any set.
    fn is_superset_of_sequence<I: IntoIterator<Item = Address>>(&self, sequence: I) -> bool {
        match sequence_bounds(sequence) {
            Some((first, last)) => self.first() <= first && last <= self.last(),
            None => true,
        }
    }

    #[inline]
    ///Returns bounds of `self` as plain range
    fn bounds(&self) -> AddressRange {
        AddressRange::new_unchecked(self.first(), self.last())
    }

    #[inline]
    ///Returns fresh ascending iterator over every address within `self`
    fn iter(&self) -> Addresses {
        Addresses::new(self.first(), self.last())
    }
}

#[derive(Clone, Debug)]
///Lazy iterator over consecutive addresses
///
///Holds only its two cursors, so whole address space can be traversed in constant memory.
pub struct Addresses {
    //Next address to yield from the front
    front: u64,
    //One past the next address to yield from the back
    back: u64,
}

impl Addresses {
    #[inline(always)]
    pub(crate) const fn new(first: Address, last: Address) -> Self {
        Self {
            front: first.to_bits() as u64,
            back: (last.to_bits() as u64) + 1,
        }
    }

    #[inline(always)]
    ///Returns number of addresses not yet yielded
    pub const fn remaining(&self) -> u64 {
        self.back - self.front
    }
}

impl Iterator for Addresses {
    type Item = Address;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let addr = Address::from_bits(self.front as u32);
            self.front += 1;
            Some(addr)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n as u64).min(self.back);
        self.next()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Addresses {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(Address::from_bits(self.back as u32))
        } else {
            None
        }
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.back = self.back.saturating_sub(n as u64).max(self.front);
        self.next_back()
    }
}

impl FusedIterator for Addresses {}

macro_rules! impl_address_set {
    ($typ:ty) => {
        impl $crate::base::AddressSet for $typ {
            #[inline(always)]
            fn first(&self) -> $crate::addr::Address {
                <$typ>::first(self)
            }

            #[inline(always)]
            fn last(&self) -> $crate::addr::Address {
                <$typ>::last(self)
            }
        }

        impl $typ {
            #[inline(always)]
            ///Returns number of addresses, which is `4294967296` for whole address space
            pub const fn count(&self) -> u64 {
                $crate::base::count(self.first(), self.last())
            }

            #[inline(always)]
            ///Checks if a given `addr` is contained within `self`
            pub const fn contains(&self, addr: $crate::addr::Address) -> bool {
                let addr = addr.to_bits();
                self.first().to_bits() <= addr && addr <= self.last().to_bits()
            }

            #[inline(always)]
            ///Checks if `self` and `other` have at least one address in common
            pub fn overlaps<S: $crate::base::AddressSet + ?Sized>(&self, other: &S) -> bool {
                $crate::base::AddressSet::overlaps(self, other)
            }

            #[inline(always)]
            ///Checks if every address of `self` is within `other`
            pub fn is_subset_of<S: $crate::base::AddressSet + ?Sized>(&self, other: &S) -> bool {
                $crate::base::AddressSet::is_subset_of(self, other)
            }

            #[inline(always)]
            ///Checks if every address of `other` is within `self`
            pub fn is_superset_of<S: $crate::base::AddressSet + ?Sized>(&self, other: &S) -> bool {
                $crate::base::AddressSet::is_superset_of(self, other)
            }

            #[inline(always)]
            ///Checks if `self` lies within first and last addresses yielded by `sequence`
            ///
            ///See [AddressSet::is_subset_of_sequence](crate::base::AddressSet::is_subset_of_sequence)
            ///for restriction: only sorted gap-free sequences give correct answer.
            pub fn is_subset_of_sequence<I: IntoIterator<Item = $crate::addr::Address>>(&self, sequence: I) -> bool {
                $crate::base::AddressSet::is_subset_of_sequence(self, sequence)
            }

            #[inline(always)]
            ///Checks if first and last addresses yielded by `sequence` lie within `self`
            ///
            ///See [AddressSet::is_superset_of_sequence](crate::base::AddressSet::is_superset_of_sequence)
            ///for restriction: only sorted gap-free sequences give correct answer.
            pub fn is_superset_of_sequence<I: IntoIterator<Item = $crate::addr::Address>>(&self, sequence: I) -> bool {
                $crate::base::AddressSet::is_superset_of_sequence(self, sequence)
            }

            #[inline(always)]
            ///Returns fresh ascending iterator over every address within `self`
            pub const fn iter(&self) -> $crate::base::Addresses {
                $crate::base::Addresses::new(self.first(), self.last())
            }
        }

        impl IntoIterator for $typ {
            type Item = $crate::addr::Address;
            type IntoIter = $crate::base::Addresses;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl IntoIterator for &$typ {
            type Item = $crate::addr::Address;
            type IntoIter = $crate::base::Addresses;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    }
}

pub(super) use impl_address_set;
