//! Item.
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Identity of a collectible category.
///
/// Items are defined by the simulation engine and only read here, as keys of
/// the held-count mapping in [`AgentState`](crate::AgentState). [`Display`] is
/// used when describing a [`Reward`](crate::Reward).
///
/// The trait is implemented for every type with the required bounds, so an
/// engine-side enum, a [`String`] or a `&'static str` can be used directly.
pub trait Item: Clone + Eq + Ord + Hash + Debug + Display {}

impl<T> Item for T where T: Clone + Eq + Ord + Hash + Debug + Display {}
