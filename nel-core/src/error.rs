//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum NelError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// A schedule was given no reward to choose from.
    #[error("Schedule requires at least one reward")]
    EmptySchedule,

    /// A periodic schedule was given a period of zero steps.
    #[error("Schedule period must be positive")]
    ZeroPeriod,

    /// Switch steps of a piecewise schedule are not strictly increasing.
    #[error("Schedule switch at step {next} does not follow step {prev}")]
    UnsortedSchedule {
        /// Start step of the preceding switch.
        prev: u64,

        /// Start step of the offending switch.
        next: u64,
    },
}
