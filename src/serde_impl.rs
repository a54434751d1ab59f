use core::{fmt, marker, str};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Address, AddressRange, Network};

struct TextVisitor<T> {
    expecting: &'static str,
    _value: marker::PhantomData<T>,
}

impl<T> TextVisitor<T> {
    const fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _value: marker::PhantomData,
        }
    }
}

impl<T: str::FromStr> de::Visitor<'_> for TextVisitor<T> where T::Err: fmt::Display {
    type Value = T;

    #[inline(always)]
    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        text.parse().map_err(E::custom)
    }
}

impl Serialize for Address {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TextVisitor::new("IPv4 address such as 10.0.0.1"))
    }
}

impl Serialize for AddressRange {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AddressRange {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TextVisitor::new("IPv4 address range such as 10.0.0.1-10.0.0.20"))
    }
}

//Supplied address is written so that host bits survive round trip
impl Serialize for Network {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{self:#}"))
    }
}

impl<'de> Deserialize<'de> for Network {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TextVisitor::new("IPv4 CIDR such as 10.0.0.0/24"))
    }
}
