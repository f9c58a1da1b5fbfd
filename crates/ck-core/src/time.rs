//! Simulated time and its mapping to wall-clock waiting.
//!
//! # Design
//!
//! Every duration in the engine — arrival rate, per-customer service time,
//! accumulated service totals — is an integer number of simulated seconds
//! ([`SimSeconds`]), so all schedule arithmetic is exact.  How long a
//! simulated second takes in wall time is a run-wide [`Pacing`] choice:
//! `RealTime` reproduces the classic sleep-per-second behavior, `Scaled`
//! compresses it, and `Instant` never sleeps at all (what the test suites
//! use).  Routing decisions, per-queue ordering, and all statistics are
//! identical under every pacing.

use std::fmt;
use std::thread;
use std::time::Duration;

/// Idle-worker poll interval at real-time pacing, in milliseconds.
const POLL_MILLIS: u64 = 100;

// ── SimSeconds ────────────────────────────────────────────────────────────────

/// A duration (or timestamp offset from simulation start) in whole simulated
/// seconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSeconds(pub u64);

impl SimSeconds {
    pub const ZERO: SimSeconds = SimSeconds(0);

    #[inline]
    pub fn as_secs(self) -> u64 {
        self.0
    }
}

impl std::ops::Add for SimSeconds {
    type Output = SimSeconds;
    #[inline]
    fn add(self, rhs: SimSeconds) -> SimSeconds {
        SimSeconds(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for SimSeconds {
    #[inline]
    fn add_assign(&mut self, rhs: SimSeconds) {
        self.0 += rhs.0;
    }
}

impl std::ops::Mul<u64> for SimSeconds {
    type Output = SimSeconds;
    #[inline]
    fn mul(self, rhs: u64) -> SimSeconds {
        SimSeconds(self.0 * rhs)
    }
}

impl fmt::Display for SimSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

// ── Pacing ────────────────────────────────────────────────────────────────────

/// How simulated seconds map to wall-clock waiting.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pacing {
    /// One simulated second takes one wall second.
    RealTime,
    /// One simulated second takes the given number of wall milliseconds.
    Scaled { millis_per_sim_sec: u64 },
    /// No waiting: every pause returns immediately.
    Instant,
}

impl Pacing {
    /// Wall-clock duration of `d` simulated seconds under this pacing.
    pub fn wall(self, d: SimSeconds) -> Duration {
        match self {
            Pacing::RealTime => Duration::from_secs(d.0),
            Pacing::Scaled { millis_per_sim_sec } => {
                Duration::from_millis(d.0 * millis_per_sim_sec)
            }
            Pacing::Instant => Duration::ZERO,
        }
    }

    /// Bounded wait used by an idle worker between shutdown re-checks.
    ///
    /// Scales with the pacing but never reaches zero, so `Instant` runs
    /// cannot busy-spin.
    pub fn poll_interval(self) -> Duration {
        match self {
            Pacing::RealTime => Duration::from_millis(POLL_MILLIS),
            Pacing::Scaled { millis_per_sim_sec } => {
                Duration::from_millis((millis_per_sim_sec * POLL_MILLIS / 1_000).max(1))
            }
            Pacing::Instant => Duration::from_millis(1),
        }
    }

    /// Block the calling thread for `d` simulated seconds of wall time.
    pub fn pause(self, d: SimSeconds) {
        let wall = self.wall(d);
        if !wall.is_zero() {
            thread::sleep(wall);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::RealTime
    }
}
