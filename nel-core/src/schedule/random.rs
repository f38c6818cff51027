//! Randomized schedule.
use super::RewardSchedule;
use crate::{error::NelError, Item, Reward};
use log::debug;

/// A schedule that draws the active reward at random for each block of steps.
///
/// Steps are grouped into blocks of `period` steps. The reward of a block is
/// drawn with a generator seeded from `seed` and the block index, so the
/// same `(seed, step)` always yields the same reward.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSchedule<I> {
    rewards: Vec<Reward<I>>,
    period: u64,
    seed: u64,
}

impl<I: Item> RandomSchedule<I> {
    /// Constructs the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`NelError::EmptySchedule`] if `rewards` is empty and
    /// [`NelError::ZeroPeriod`] if `period` is zero.
    pub fn new(rewards: Vec<Reward<I>>, period: u64, seed: u64) -> Result<Self, NelError> {
        if rewards.is_empty() {
            return Err(NelError::EmptySchedule);
        }
        if period == 0 {
            return Err(NelError::ZeroPeriod);
        }
        debug!(
            "Random reward schedule over {} rewards, period {}, seed {}",
            rewards.len(),
            period,
            seed
        );

        Ok(Self {
            rewards,
            period,
            seed,
        })
    }

    fn draw(&self, block: u64) -> usize {
        // Spread consecutive blocks over the seed space.
        let rng = fastrand::Rng::with_seed(self.seed ^ block.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        rng.usize(..self.rewards.len())
    }
}

impl<I: Item> RewardSchedule<I> for RandomSchedule<I> {
    fn reward_for_step(&self, step: u64) -> &Reward<I> {
        &self.rewards[self.draw(step / self.period)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewards() -> Vec<Reward<&'static str>> {
        (0..4).map(|i| Reward::action(i as f32)).collect()
    }

    #[test]
    fn test_deterministic() {
        let s1 = RandomSchedule::new(rewards(), 5, 42).unwrap();
        let s2 = RandomSchedule::new(rewards(), 5, 42).unwrap();

        for step in (0..200).chain([u64::MAX - 1, u64::MAX]) {
            assert_eq!(s1.reward_for_step(step), s2.reward_for_step(step));
            assert_eq!(s1.reward_for_step(step), s1.reward_for_step(step));
        }
    }

    #[test]
    fn test_constant_within_block() {
        let schedule = RandomSchedule::new(rewards(), 10, 7).unwrap();

        for block in 0..20u64 {
            let first = schedule.reward_for_step(block * 10);
            for offset in 1..10 {
                assert_eq!(schedule.reward_for_step(block * 10 + offset), first);
            }
        }
    }

    #[test]
    fn test_draws_from_all_rewards() {
        let schedule = RandomSchedule::new(rewards(), 1, 0).unwrap();
        let rewards = rewards();

        for reward in rewards.iter() {
            assert!((0..1000).any(|s| schedule.reward_for_step(s) == reward));
        }
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            RandomSchedule::<&str>::new(vec![], 1, 0).unwrap_err(),
            NelError::EmptySchedule
        );
        assert_eq!(
            RandomSchedule::new(rewards(), 0, 0).unwrap_err(),
            NelError::ZeroPeriod
        );
    }
}
