//! Types and traits for recording rewards observed during a simulation.
//!
//! # Core Components
//!
//! * [`Record`] - A container of key-value pairs
//! * [`RecordValue`] - The values that can be stored in a [`Record`]
//! * [`Recorder`] - A destination of records
//! * [`BufferedRecorder`] - A recorder that keeps records in memory
//! * [`NullRecorder`] - A recorder that discards all records
//!
//! # Basic Usage
//!
//! ```rust
//! use nel_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(1.0));
//! record.insert("reward", RecordValue::Scalar(-0.1));
//! record.insert("reward_def", RecordValue::String("Action[value: -0.10]".into()));
//! assert_eq!(record.get_scalar("reward").unwrap(), -0.1);
//! ```
//!
//! [`RewardTracker`](crate::RewardTracker) and
//! [`Reward::evaluate_with_record`](crate::Reward::evaluate_with_record)
//! produce records in this format.
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
