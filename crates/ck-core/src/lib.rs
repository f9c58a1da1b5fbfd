//! `ck-core` — foundational types for the checkout queue simulator.
//!
//! This crate is a dependency of every other `ck-*` crate.  It intentionally
//! has no required external dependencies (optional `serde` only).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `CustomerId`, `CounterId`                                  |
//! | [`customer`] | `CustomerClass`, `Customer`, `CustomerSpec`, `IdAllocator` |
//! | [`time`]     | `SimSeconds`, `Pacing`                                     |
//! | [`config`]   | `SimConfig`                                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public value types. |

pub mod config;
pub mod customer;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use customer::{Customer, CustomerClass, CustomerSpec, IdAllocator, PROCESSING_SECS_PER_ITEM};
pub use ids::{CounterId, CustomerId};
pub use time::{Pacing, SimSeconds};
