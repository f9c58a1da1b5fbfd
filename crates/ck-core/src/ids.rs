//! Strongly typed identifier wrappers.
//!
//! Customers are numbered from 1 in allocation order; counters are numbered
//! from 1 with counter 1 permanently reserved for express traffic.  Both
//! wrappers are `Copy + Ord + Hash` so they can be used as map keys and sort
//! keys without ceremony, and both `Display` as the noun used in event lines
//! ("Customer 7", "Counter 2").

use std::fmt;

/// Identity of one customer, unique within a simulation run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerId(pub u32);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer {}", self.0)
    }
}

/// 1-based identity of a checkout counter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterId(pub u32);

impl CounterId {
    /// The reserved express lane.
    pub const EXPRESS: CounterId = CounterId(1);

    /// Zero-based position in the controller's counter array.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn from_index(index: usize) -> CounterId {
        CounterId(index as u32 + 1)
    }

    /// True for the reserved express lane.
    #[inline]
    pub fn is_express(self) -> bool {
        self == CounterId::EXPRESS
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter {}", self.0)
    }
}
