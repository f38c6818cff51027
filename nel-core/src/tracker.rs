//! Per-step reward bookkeeping for a simulation loop.
use crate::{
    record::{Record, RecordValue, Recorder},
    AgentTransition, Item, Reward, RewardSchedule,
};
use log::{info, trace};
use std::marker::PhantomData;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Scores the transitions of one agent with a [`RewardSchedule`].
///
/// The simulation engine calls [`RewardTracker::observe`] once per step with
/// the step counter and the transition that step produced:
///
/// ```mermaid
/// graph LR
///     Engine -->|step| RewardSchedule
///     RewardSchedule -->|Reward| RewardTracker
///     Engine -->|AgentTransition| RewardTracker
///     RewardTracker -->|Record| Recorder
/// ```
///
/// The tracker keeps the running return and the last active reward, so that
/// a change of the reward definition is logged once. The schedule itself is
/// only queried.
pub struct RewardTracker<I, S>
where
    I: Item,
    S: RewardSchedule<I>,
{
    schedule: S,
    active: Option<Reward<I>>,
    total: f32,
    n_steps: u64,
    phantom: PhantomData<I>,
}

impl<I, S> RewardTracker<I, S>
where
    I: Item,
    S: RewardSchedule<I>,
{
    /// Constructs a tracker over `schedule`.
    pub fn new(schedule: S) -> Self {
        Self {
            schedule,
            active: None,
            total: 0.0,
            n_steps: 0,
            phantom: PhantomData,
        }
    }

    /// Scores the transition produced at `step`.
    ///
    /// Returns the record of [`Reward::evaluate_with_record`] extended with
    /// `step`, `return` (the running sum of rewards) and `reward_def` (the
    /// description of the active reward).
    ///
    /// `step` is stored as an `f32` scalar like every other record value, so
    /// it is exact only up to 2^24; use the `step` argument itself where an
    /// exact index matters.
    pub fn observe(&mut self, step: u64, transition: &AgentTransition<'_, I>) -> Record {
        self.score(step, transition).1
    }

    /// Scores the transition produced at `step` and writes the record to
    /// `recorder`.
    pub fn observe_with_recorder<R: Recorder>(
        &mut self,
        step: u64,
        transition: &AgentTransition<'_, I>,
        recorder: &mut R,
    ) -> f32 {
        let (reward, record) = self.score(step, transition);
        recorder.write(record);
        reward
    }

    /// Sum of the rewards observed since construction or the last reset.
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Number of observed steps since construction or the last reset.
    pub fn n_steps(&self) -> u64 {
        self.n_steps
    }

    /// The schedule this tracker queries.
    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    /// Clears the running return and the step count.
    pub fn reset(&mut self) {
        self.total = 0.0;
        self.n_steps = 0;
        self.active = None;
    }

    fn score(&mut self, step: u64, transition: &AgentTransition<'_, I>) -> (f32, Record) {
        let reward = self.schedule.reward_for_step(step);
        if self.active.as_ref() != Some(reward) {
            info!("Reward at step {}: {}", step, reward);
            self.active = Some(reward.clone());
        }

        let (r, record) = reward.evaluate_with_record(transition);
        self.total += r;
        self.n_steps += 1;
        trace!("step = {}, reward = {}, return = {}", step, r, self.total);

        let record = record.merge(Record::from_slice(&[
            ("step", RecordValue::Scalar(step as _)),
            ("return", RecordValue::Scalar(self.total)),
            ("reward_def", reward.describe_as_record_value()),
        ]));
        (r, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record::BufferedRecorder, AgentState, FixedSchedule, PiecewiseSchedule};
    use test_log::test;

    #[test]
    fn test_accumulates_return() {
        let schedule = FixedSchedule::new(Reward::action(-0.5) + Reward::collect("gem", 2.0));
        let mut tracker = RewardTracker::new(schedule);

        let s0 = AgentState::empty();
        let s1 = AgentState::from_items([("gem", 1)]);
        let s2 = AgentState::from_items([("gem", 1)]);

        let record = tracker.observe(0, &AgentTransition::new(&s0, &s1));
        assert_eq!(record.get_scalar("reward").unwrap(), 1.5);
        assert_eq!(record.get_scalar("step").unwrap(), 0.0);
        assert_eq!(record.get_scalar("collect/gem").unwrap(), 2.0);

        let record = tracker.observe(1, &AgentTransition::new(&s1, &s2));
        assert_eq!(record.get_scalar("reward").unwrap(), -0.5);
        assert_eq!(record.get_scalar("return").unwrap(), 1.0);
        assert_eq!(
            record.get_string("reward_def").unwrap(),
            "(Action[value: -0.50] ∧ Collect[item: gem, value: 2.00])"
        );
        assert_eq!(tracker.total(), 1.0);
        assert_eq!(tracker.n_steps(), 2);

        tracker.reset();
        assert_eq!(tracker.total(), 0.0);
        assert_eq!(tracker.n_steps(), 0);
    }

    #[test]
    fn test_follows_schedule() {
        let schedule = PiecewiseSchedule::new(
            Reward::collect("gem", 1.0),
            vec![(2, Reward::collect("gem", -1.0))],
        )
        .unwrap();
        let mut tracker = RewardTracker::new(schedule);
        let mut recorder = BufferedRecorder::new();

        let states: Vec<_> = (0..5u64)
            .map(|n| AgentState::from_items([("gem", n)]))
            .collect();
        let rewards: Vec<f32> = states
            .windows(2)
            .enumerate()
            .map(|(step, w)| {
                let t = AgentTransition::new(&w[0], &w[1]);
                tracker.observe_with_recorder(step as u64, &t, &mut recorder)
            })
            .collect();

        assert_eq!(rewards, vec![1.0, 1.0, -1.0, -1.0]);
        assert_eq!(tracker.total(), 0.0);
        assert_eq!(recorder.len(), 4);
        let defs: Vec<_> = recorder
            .iter()
            .map(|r| r.get_string("reward_def").unwrap())
            .collect();
        assert_eq!(defs[1], "Collect[item: gem, value: 1.00]");
        assert_eq!(defs[2], "Collect[item: gem, value: -1.00]");
    }

    #[test]
    fn test_record_fields_at_large_step() {
        let mut tracker = RewardTracker::new(FixedSchedule::new(Reward::collect("gem", 1.0)));
        let prev = AgentState::from_items([("gem", 1u64 << 24)]);
        let curr = AgentState::from_items([("gem", (1u64 << 24) + 1)]);

        let step = (1u64 << 24) + 1;
        let record = tracker.observe(step, &AgentTransition::new(&prev, &curr));
        assert_eq!(record.len(), 5);
        assert_eq!(record.get_scalar("reward").unwrap(), 1.0);
        assert_eq!(record.get_scalar("collect/gem").unwrap(), 1.0);
        assert_eq!(record.get_scalar("return").unwrap(), 1.0);
        // the scalar step is rounded to the nearest f32
        assert_eq!(record.get_scalar("step").unwrap(), (1u64 << 24) as f32);
        assert_eq!(
            record.get_string("reward_def").unwrap(),
            "Collect[item: gem, value: 1.00]"
        );
    }
}
