//! Serde support: range sets travel as their pattern text.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::range::RangeValue;
use crate::set::RangeSet;

impl<T> Serialize for RangeSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserialises by compiling the pattern in typed mode with the registered
/// adapter for `T`.
impl<'de, T: RangeValue> Deserialize<'de> for RangeSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PatternVisitor(PhantomData))
    }
}

struct PatternVisitor<T>(PhantomData<fn() -> T>);

impl<T: RangeValue> Visitor<'_> for PatternVisitor<T> {
    type Value = RangeSet<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a range pattern such as `1..5,7..`")
    }

    fn visit_str<E: de::Error>(self, pattern: &str) -> Result<Self::Value, E> {
        RangeSet::new(pattern).map_err(E::custom)
    }
}
