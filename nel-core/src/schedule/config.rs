//! Configuration of reward schedules.
use super::{CyclicSchedule, FixedSchedule, PiecewiseSchedule, RandomSchedule, RewardSchedule};
use crate::{error::NelError, Item, Reward};
use anyhow::Result;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Declarative form of a [`RewardSchedule`].
///
/// Serialized as an externally tagged enum, e.g.
///
/// ```yaml
/// piecewise:
///   initial:
///     collect:
///       item: jellybean
///       value: 1.0
///   switches:
///     - - 100000
///       - combined:
///           - action: -0.01
///           - collect:
///               item: onion
///               value: 1.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleConfig<I> {
    /// See [`FixedSchedule`].
    Fixed {
        /// Reward of every step.
        reward: Reward<I>,
    },

    /// See [`PiecewiseSchedule`].
    Piecewise {
        /// Reward before the first switch.
        initial: Reward<I>,

        /// `(start step, reward)` pairs in increasing order of start step.
        #[serde(default = "Vec::new")]
        switches: Vec<(u64, Reward<I>)>,
    },

    /// See [`CyclicSchedule`].
    Cyclic {
        /// Rewards in the order of rotation.
        rewards: Vec<Reward<I>>,

        /// Number of steps each reward stays active.
        period: u64,
    },

    /// See [`RandomSchedule`].
    Random {
        /// Candidate rewards.
        rewards: Vec<Reward<I>>,

        /// Number of steps between two draws.
        period: u64,

        /// Random seed.
        seed: u64,
    },
}

impl<I: Item> From<Reward<I>> for ScheduleConfig<I> {
    fn from(reward: Reward<I>) -> Self {
        Self::Fixed { reward }
    }
}

impl<I: Item + 'static> ScheduleConfig<I> {
    /// Validates the configuration and builds the schedule.
    pub fn build(self) -> Result<Box<dyn RewardSchedule<I>>, NelError> {
        let schedule: Box<dyn RewardSchedule<I>> = match self {
            Self::Fixed { reward } => Box::new(FixedSchedule::new(reward)),
            Self::Piecewise { initial, switches } => {
                Box::new(PiecewiseSchedule::new(initial, switches)?)
            }
            Self::Cyclic { rewards, period } => Box::new(CyclicSchedule::new(rewards, period)?),
            Self::Random {
                rewards,
                period,
                seed,
            } => Box::new(RandomSchedule::new(rewards, period, seed)?),
        };
        Ok(schedule)
    }
}

impl<I: Item + Serialize + DeserializeOwned> ScheduleConfig<I> {
    /// Constructs [`ScheduleConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`ScheduleConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
