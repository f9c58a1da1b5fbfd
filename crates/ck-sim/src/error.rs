use thiserror::Error;

/// Configuration errors, surfaced by [`SimBuilder::build`][crate::SimBuilder]
/// before any thread starts.  A built [`Simulation`][crate::Simulation]
/// cannot fail at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("counter count must be at least 1")]
    NoCounters,

    #[error(
        "{customers} regular customer(s) but only {counters} counter(s); \
         counter 1 is reserved for express traffic"
    )]
    NoRegularLane { customers: usize, counters: u32 },
}

pub type SimResult<T> = Result<T, SimError>;
