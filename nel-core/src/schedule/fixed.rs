//! Fixed schedule.
use super::RewardSchedule;
use crate::{Item, Reward};
use serde::{Deserialize, Serialize};

/// A schedule that returns the same reward at every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedSchedule<I> {
    reward: Reward<I>,
}

impl<I: Item> FixedSchedule<I> {
    /// Constructs the schedule.
    pub fn new(reward: Reward<I>) -> Self {
        Self { reward }
    }

    /// Returns the wrapped reward.
    pub fn into_inner(self) -> Reward<I> {
        self.reward
    }
}

impl<I: Item> From<Reward<I>> for FixedSchedule<I> {
    fn from(reward: Reward<I>) -> Self {
        Self::new(reward)
    }
}

impl<I: Item> RewardSchedule<I> for FixedSchedule<I> {
    fn reward_for_step(&self, _step: u64) -> &Reward<I> {
        &self.reward
    }
}
