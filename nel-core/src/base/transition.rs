//! Agent transition.
use super::{AgentState, Item};

/// The before/after snapshots of one agent for one simulation step.
///
/// Both states are borrowed from the simulation engine, which owns them. A
/// transition is created once per step, evaluated, and dropped.
#[derive(Debug)]
pub struct AgentTransition<'a, I: Item> {
    previous: &'a AgentState<I>,
    current: &'a AgentState<I>,
}

// Derived impls would require `I: Clone + Copy`.
impl<'a, I: Item> Clone for AgentTransition<'a, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, I: Item> Copy for AgentTransition<'a, I> {}

impl<'a, I: Item> AgentTransition<'a, I> {
    /// Constructs a transition from the state before and after a step.
    pub fn new(previous: &'a AgentState<I>, current: &'a AgentState<I>) -> Self {
        Self { previous, current }
    }

    /// State before the step.
    pub fn previous(&self) -> &'a AgentState<I> {
        self.previous
    }

    /// State after the step.
    pub fn current(&self) -> &'a AgentState<I> {
        self.current
    }

    /// Signed change in the held count of `item` over the step.
    ///
    /// The difference is taken on the integer counts and rounded to `f32`
    /// once, so a one-unit change is exact at any count.
    #[inline]
    pub fn delta(&self, item: &I) -> f32 {
        let (prev, curr) = (self.previous.count(item), self.current.count(item));
        if curr >= prev {
            (curr - prev) as f32
        } else {
            -((prev - curr) as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_signed() {
        let prev = AgentState::from_items([("gold", 5), ("gem", 1)]);
        let curr = AgentState::from_items([("gold", 2), ("silver", 4)]);
        let t = AgentTransition::new(&prev, &curr);

        assert_eq!(t.delta(&"gold"), -3.0);
        assert_eq!(t.delta(&"silver"), 4.0);
        assert_eq!(t.delta(&"gem"), -1.0);
        assert_eq!(t.delta(&"wood"), 0.0);
    }

    #[test]
    fn test_delta_exact_for_large_counts() {
        let base = (1u64 << 24) + 1;
        let prev = AgentState::from_items([("gold", base), ("gem", u64::MAX)]);
        let curr = AgentState::from_items([("gold", base - 1), ("gem", u64::MAX - 3)]);
        let t = AgentTransition::new(&prev, &curr);
        assert_eq!(t.delta(&"gold"), -1.0);
        assert_eq!(t.delta(&"gem"), -3.0);

        let curr = AgentState::from_items([("gold", base + 1)]);
        let t = AgentTransition::new(&prev, &curr);
        assert_eq!(t.delta(&"gold"), 1.0);
        assert_eq!(t.delta(&"gem"), -(u64::MAX as f32));
    }
}
