//! Piecewise-constant schedule.
use super::RewardSchedule;
use crate::{error::NelError, Item, Reward};
use log::debug;

/// A schedule that switches to a new reward at given steps.
///
/// The initial reward is active until the first switch. Each switch
/// `(start, reward)` is active from `start` up to the next switch.
///
/// ```rust
/// use nel_core::{PiecewiseSchedule, Reward, RewardSchedule};
///
/// let schedule = PiecewiseSchedule::new(
///     Reward::collect("gem", 1.0),
///     vec![(100, Reward::collect("gem", -1.0))],
/// )
/// .unwrap();
/// assert_eq!(schedule.reward_for_step(99), &Reward::collect("gem", 1.0));
/// assert_eq!(schedule.reward_for_step(100), &Reward::collect("gem", -1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseSchedule<I> {
    initial: Reward<I>,
    switches: Vec<(u64, Reward<I>)>,
}

impl<I: Item> PiecewiseSchedule<I> {
    /// Constructs the schedule.
    ///
    /// # Errors
    ///
    /// Returns [`NelError::UnsortedSchedule`] if the start steps of `switches`
    /// are not strictly increasing.
    pub fn new(initial: Reward<I>, switches: Vec<(u64, Reward<I>)>) -> Result<Self, NelError> {
        for pair in switches.windows(2) {
            let (prev, next) = (pair[0].0, pair[1].0);
            if next <= prev {
                return Err(NelError::UnsortedSchedule { prev, next });
            }
        }
        debug!("Piecewise reward schedule with {} switches", switches.len());

        Ok(Self { initial, switches })
    }

    /// Returns the number of switches.
    pub fn n_switches(&self) -> usize {
        self.switches.len()
    }
}

impl<I: Item> RewardSchedule<I> for PiecewiseSchedule<I> {
    fn reward_for_step(&self, step: u64) -> &Reward<I> {
        match self.switches.partition_point(|(start, _)| *start <= step) {
            0 => &self.initial,
            ix => &self.switches[ix - 1].1,
        }
    }
}
