//! Agent state.
use super::Item;
use std::{
    collections::{hash_map::Iter, HashMap},
    iter::FromIterator,
};

/// A snapshot of an agent at one simulation step.
///
/// Holds the number of units of each [`Item`] the agent carries. Items that
/// are not in the mapping are held zero times.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentState<I: Item> {
    items: HashMap<I, u64>,
}

impl<I: Item> Default for AgentState<I> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<I: Item> AgentState<I> {
    /// Constructs a state holding no item.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructs a state from `(item, count)` pairs.
    ///
    /// If an item appears more than once, the last count is kept.
    pub fn from_items(items: impl IntoIterator<Item = (I, u64)>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Returns the number of units of `item` held in this state.
    ///
    /// An absent item counts as `0`.
    #[inline]
    pub fn count(&self, item: &I) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Returns an iterator over the held items and their counts.
    pub fn iter(&self) -> Iter<'_, I, u64> {
        self.items.iter()
    }

    /// Returns the number of distinct items in the mapping.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the mapping has no entry.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<I: Item> FromIterator<(I, u64)> for AgentState<I> {
    fn from_iter<T: IntoIterator<Item = (I, u64)>>(iter: T) -> Self {
        Self::from_items(iter)
    }
}

impl<I: Item> From<HashMap<I, u64>> for AgentState<I> {
    fn from(items: HashMap<I, u64>) -> Self {
        Self { items }
    }
}
