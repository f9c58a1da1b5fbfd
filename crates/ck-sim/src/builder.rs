//! Fluent builder for a validated [`Simulation`].

use ck_core::{CustomerClass, CustomerSpec, SimConfig};

use crate::error::{SimError, SimResult};
use crate::sim::{SimShared, Simulation};

/// Builder for [`Simulation`].
///
/// # Required input
///
/// - [`SimConfig`] — counter count, arrival rate, pacing.
///
/// # Customer input
///
/// Either per-class cart-size lists ([`regular`][Self::regular] /
/// [`express`][Self::express]) or a mixed [`CustomerSpec`] sequence
/// ([`customers`][Self::customers]), which is partitioned by class with
/// arrival order preserved within each class.  Calls append, so the two
/// styles can be combined.
///
/// # Example
///
/// ```rust,ignore
/// let report = SimBuilder::new(SimConfig::new(3, SimSeconds(1)))
///     .regular(vec![3, 5])
///     .express(vec![1])
///     .build()?
///     .run(&NoopObserver);
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    regular: Vec<u32>,
    express: Vec<u32>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            regular: Vec::new(),
            express: Vec::new(),
        }
    }

    /// Append regular customers, given as items-per-cart in arrival order.
    pub fn regular(mut self, items: Vec<u32>) -> Self {
        self.regular.extend(items);
        self
    }

    /// Append express customers, given as items-per-cart in arrival order.
    pub fn express(mut self, items: Vec<u32>) -> Self {
        self.express.extend(items);
        self
    }

    /// Append a mixed sequence, partitioned by class with per-class order
    /// preserved.
    pub fn customers(mut self, specs: &[CustomerSpec]) -> Self {
        for spec in specs {
            match spec.class {
                CustomerClass::Regular => self.regular.push(spec.items),
                CustomerClass::Express => self.express.push(spec.items),
            }
        }
        self
    }

    /// Validate the configuration and return a ready-to-run [`Simulation`].
    ///
    /// # Errors
    ///
    /// - [`SimError::NoCounters`] when no counters are configured.
    /// - [`SimError::NoRegularLane`] when regular customers exist but the
    ///   reserved express lane is the only counter.
    pub fn build(self) -> SimResult<Simulation> {
        if self.config.counters == 0 {
            return Err(SimError::NoCounters);
        }
        if !self.regular.is_empty() && self.config.counters < 2 {
            return Err(SimError::NoRegularLane {
                customers: self.regular.len(),
                counters:  self.config.counters,
            });
        }

        Ok(Simulation {
            shared:  SimShared::new(self.config),
            regular: self.regular,
            express: self.express,
        })
    }
}
