//! Run configuration.

use crate::time::{Pacing, SimSeconds};

/// Top-level simulation configuration.
///
/// Constructed by the application (CLI flags, a scenario file, a test
/// helper) and handed to the sim builder, which validates it against the
/// customer load before any thread starts.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of checkout counters.  Counter 1 is reserved for express
    /// traffic, so any regular customers require at least 2.
    pub counters: u32,

    /// Pause between successive arrivals within one customer class.
    pub arrival_rate: SimSeconds,

    /// Wall-clock pacing for service and inter-arrival pauses.
    pub pacing: Pacing,
}

impl SimConfig {
    /// Configuration with the default real-time pacing.
    pub fn new(counters: u32, arrival_rate: SimSeconds) -> Self {
        Self {
            counters,
            arrival_rate,
            pacing: Pacing::default(),
        }
    }
}
