#![warn(missing_docs)]
//! Compositional reward scoring for never-ending agent simulations.
//!
//! A simulation engine produces, at each step, the state of an agent before
//! and after the step. This crate scores such an [`AgentTransition`] with a
//! [`Reward`] expression and lets the active expression change with the step
//! counter through a [`RewardSchedule`].
//!
//! ```rust
//! use nel_core::{AgentState, AgentTransition, FixedSchedule, Reward, RewardSchedule};
//!
//! let schedule = FixedSchedule::new(Reward::collect("gem", 10.0));
//!
//! let prev = AgentState::empty();
//! let curr = AgentState::from_items([("gem", 1)]);
//! let reward = schedule
//!     .reward_for_step(0)
//!     .evaluate(&AgentTransition::new(&prev, &curr));
//! assert_eq!(reward, 10.0);
//! ```
pub mod error;
pub mod record;

mod base;
pub use base::{AgentState, AgentTransition, Item};

mod reward;
pub use reward::Reward;

mod schedule;
pub use schedule::{
    CyclicSchedule, FixedSchedule, PiecewiseSchedule, RandomSchedule, RewardSchedule,
    ScheduleConfig,
};

mod tracker;
pub use tracker::RewardTracker;
