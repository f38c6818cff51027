//! Reward expressions.
use crate::{
    record::{Record, RecordValue},
    AgentTransition, Item,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    iter::Sum,
    ops::Add,
};

/// Describes how a transition is scored.
///
/// A reward is a binary tree whose leaves are [`Reward::Action`] and
/// [`Reward::Collect`] terms and whose inner nodes are [`Reward::Combined`]
/// sums. Every node owns its children, so a tree can't refer to itself.
///
/// ```rust
/// use nel_core::{AgentState, AgentTransition, Reward};
///
/// let prev = AgentState::from_items([("gold", 1)]);
/// let curr = AgentState::from_items([("gold", 3), ("silver", 1)]);
/// let t = AgentTransition::new(&prev, &curr);
///
/// let reward = Reward::action(-0.1) + Reward::collect("gold", 1.5);
/// assert!((reward.evaluate(&t) - 2.9).abs() < 1e-6);
/// ```
///
/// Equality is structural: two trees that always evaluate to the same value
/// but are shaped differently compare unequal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reward<I> {
    /// A fixed value, independent of the transition.
    Action(f32),

    /// A per-unit value scaled by the change in the held count of `item`.
    Collect {
        /// Collected item.
        item: I,

        /// Reward per unit gained. A loss yields the negated value per unit.
        value: f32,
    },

    /// The sum of two rewards evaluated on the same transition.
    Combined(Box<Reward<I>>, Box<Reward<I>>),
}

impl<I: Item> Reward<I> {
    /// Constructs a reward that is `value` for every transition.
    pub fn action(value: f32) -> Self {
        Self::Action(value)
    }

    /// Constructs a reward of `value` per unit of `item` gained.
    pub fn collect(item: I, value: f32) -> Self {
        Self::Collect { item, value }
    }

    /// Constructs the sum of two rewards.
    ///
    /// Also available as `a + b`.
    pub fn combine(a: Self, b: Self) -> Self {
        Self::Combined(Box::new(a), Box::new(b))
    }

    /// Scores a transition.
    ///
    /// Total and free of side effects. Non-finite values are propagated as
    /// they are.
    pub fn evaluate(&self, transition: &AgentTransition<'_, I>) -> f32 {
        match self {
            Self::Action(value) => *value,
            Self::Collect { item, value } => *value * transition.delta(item),
            Self::Combined(left, right) => {
                left.evaluate(transition) + right.evaluate(transition)
            }
        }
    }

    /// Scores a transition and breaks the result down by term.
    ///
    /// The returned record has the total under `reward`, the sum of the
    /// action terms under `action` and, for each collected item, the sum of
    /// its terms under `collect/<item>`.
    pub fn evaluate_with_record(&self, transition: &AgentTransition<'_, I>) -> (f32, Record) {
        let reward = self.evaluate(transition);
        let mut record = Record::from_scalar("reward", reward);

        self.for_each_leaf(&mut |leaf| match leaf {
            Self::Action(value) => record.accumulate("action", *value),
            Self::Collect { item, value } => {
                record.accumulate(format!("collect/{}", item), *value * transition.delta(item))
            }
            Self::Combined(..) => {}
        });

        (reward, record)
    }

    /// Returns a human-readable description of the tree.
    ///
    /// Same as the [`Display`] output.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Returns the description wrapped in a [`RecordValue`].
    pub fn describe_as_record_value(&self) -> RecordValue {
        RecordValue::String(self.describe())
    }

    /// Returns the number of action and collect terms.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Combined(left, right) => left.n_leaves() + right.n_leaves(),
            _ => 1,
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Combined(left, right) => 1 + left.depth().max(right.depth()),
            _ => 1,
        }
    }

    fn for_each_leaf<F: FnMut(&Self)>(&self, f: &mut F) {
        match self {
            Self::Combined(left, right) => {
                left.for_each_leaf(f);
                right.for_each_leaf(f);
            }
            leaf => f(leaf),
        }
    }
}

impl<I: Item> Display for Reward<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action(value) => write!(f, "Action[value: {:.2}]", value),
            Self::Collect { item, value } => {
                write!(f, "Collect[item: {}, value: {:.2}]", item, value)
            }
            Self::Combined(left, right) => write!(f, "({} ∧ {})", left, right),
        }
    }
}

impl<I: Item> Add for Reward<I> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::combine(self, rhs)
    }
}

/// Folds rewards from left to right. An empty sequence yields `Action(0.0)`.
impl<I: Item> Sum for Reward<I> {
    fn sum<T: Iterator<Item = Self>>(mut iter: T) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, Self::combine),
            None => Self::action(0.0),
        }
    }
}
