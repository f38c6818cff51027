//! Step-indexed selection of the active reward.
//!
//! A [`RewardSchedule`] maps the step counter of the simulation to the
//! [`Reward`] that scores that step. All schedules here are pure functions of
//! the step index: they read no clock and keep no mutable state.
mod config;
mod cyclic;
mod fixed;
mod piecewise;
mod random;
pub use config::ScheduleConfig;
pub use cyclic::CyclicSchedule;
pub use fixed::FixedSchedule;
pub use piecewise::PiecewiseSchedule;
pub use random::RandomSchedule;

use crate::{Item, Reward};

/// Selects the reward that scores a given simulation step.
pub trait RewardSchedule<I: Item> {
    /// Returns the reward active at `step`.
    ///
    /// Defined for every step, `0` and `u64::MAX` included.
    fn reward_for_step(&self, step: u64) -> &Reward<I>;
}

impl<I, S> RewardSchedule<I> for Box<S>
where
    I: Item,
    S: RewardSchedule<I> + ?Sized,
{
    fn reward_for_step(&self, step: u64) -> &Reward<I> {
        (**self).reward_for_step(step)
    }
}

impl<I, S> RewardSchedule<I> for &S
where
    I: Item,
    S: RewardSchedule<I> + ?Sized,
{
    fn reward_for_step(&self, step: u64) -> &Reward<I> {
        (**self).reward_for_step(step)
    }
}

/// Index of the block of `period` steps that contains `step`, modulo `len`.
fn block_index(step: u64, period: u64, len: usize) -> usize {
    ((step / period) % len as u64) as usize
}
