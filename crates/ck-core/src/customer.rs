//! The customer model: class tag, immutable customer record, id allocation.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::ids::CustomerId;
use crate::time::SimSeconds;

/// Simulated service seconds charged per item in the cart.
pub const PROCESSING_SECS_PER_ITEM: u64 = 2;

/// Customer class, dispatched on by routing and reporting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CustomerClass {
    /// Routed to whichever non-reserved counter has the shortest queue.
    Regular,
    /// Always routed to the reserved counter 1.
    Express,
}

impl CustomerClass {
    #[inline]
    pub fn is_express(self) -> bool {
        matches!(self, CustomerClass::Express)
    }
}

impl fmt::Display for CustomerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CustomerClass::Regular => "Regular",
            CustomerClass::Express => "Express",
        })
    }
}

/// Class and cart size of one customer to generate, in arrival order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerSpec {
    pub class: CustomerClass,
    pub items: u32,
}

/// An immutable customer record.
///
/// Created once by an arrival generator and never modified afterwards; the
/// service duration is derived from the cart size at creation and never
/// recomputed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Customer {
    id:              CustomerId,
    class:           CustomerClass,
    arrival_time:    SimSeconds,
    items:           u32,
    processing_time: SimSeconds,
}

impl Customer {
    pub fn new(
        id:           CustomerId,
        class:        CustomerClass,
        arrival_time: SimSeconds,
        items:        u32,
    ) -> Self {
        Self {
            id,
            class,
            arrival_time,
            items,
            processing_time: SimSeconds(u64::from(items) * PROCESSING_SECS_PER_ITEM),
        }
    }

    #[inline]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    #[inline]
    pub fn class(&self) -> CustomerClass {
        self.class
    }

    /// Schedule timestamp (offset from simulation start) stamped by the
    /// generator.
    #[inline]
    pub fn arrival_time(&self) -> SimSeconds {
        self.arrival_time
    }

    #[inline]
    pub fn items(&self) -> u32 {
        self.items
    }

    /// Simulated service duration: [`PROCESSING_SECS_PER_ITEM`] per item.
    #[inline]
    pub fn processing_time(&self) -> SimSeconds {
        self.processing_time
    }
}

/// Monotonic customer-id allocator.
///
/// Scoped to one simulation instance so concurrent simulations (e.g. in
/// tests) never share id space.  `next` is race-free under concurrent
/// allocation from both generator threads; an id is never reused or
/// duplicated within one allocator's lifetime.
#[derive(Debug)]
pub struct IdAllocator {
    next_id: AtomicU32,
}

impl IdAllocator {
    /// Start numbering at 1.
    pub fn new() -> Self {
        Self { next_id: AtomicU32::new(1) }
    }

    /// Allocate the next id.
    #[inline]
    pub fn next(&self) -> CustomerId {
        CustomerId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
