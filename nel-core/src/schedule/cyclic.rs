//! Cyclic schedule.
use super::{block_index, RewardSchedule};
use crate::{error::NelError, Item, Reward};
use log::debug;

/// A schedule that rotates through a list of rewards.
///
/// Each reward stays active for `period` steps, then the next one takes over.
/// After the last reward the cycle starts again from the first.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicSchedule<I> {
    rewards: Vec<Reward<I>>,
    period: u64,
}

impl<I: Item> CyclicSchedule<I> {
    /// Constructs the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`NelError::EmptySchedule`] if `rewards` is empty and
    /// [`NelError::ZeroPeriod`] if `period` is zero.
    pub fn new(rewards: Vec<Reward<I>>, period: u64) -> Result<Self, NelError> {
        if rewards.is_empty() {
            return Err(NelError::EmptySchedule);
        }
        if period == 0 {
            return Err(NelError::ZeroPeriod);
        }
        debug!(
            "Cyclic reward schedule over {} rewards, period {}",
            rewards.len(),
            period
        );

        Ok(Self { rewards, period })
    }

    /// Number of steps each reward stays active.
    pub fn period(&self) -> u64 {
        self.period
    }
}

impl<I: Item> RewardSchedule<I> for CyclicSchedule<I> {
    fn reward_for_step(&self, step: u64) -> &Reward<I> {
        &self.rewards[block_index(step, self.period, self.rewards.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation() {
        let rewards = vec![
            Reward::collect("jellybean", 1.0),
            Reward::collect("onion", 1.0),
        ];
        let schedule = CyclicSchedule::new(rewards.clone(), 3).unwrap();

        let picked: Vec<_> = (0..12).map(|s| schedule.reward_for_step(s)).collect();
        for (step, reward) in picked.into_iter().enumerate() {
            assert_eq!(reward, &rewards[(step / 3) % 2]);
        }
        // u64::MAX / 3 is odd
        assert_eq!(schedule.reward_for_step(u64::MAX), &rewards[1]);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            CyclicSchedule::<&str>::new(vec![], 1).unwrap_err(),
            NelError::EmptySchedule
        );
        assert_eq!(
            CyclicSchedule::new(vec![Reward::<&str>::action(1.0)], 0).unwrap_err(),
            NelError::ZeroPeriod
        );
    }
}
