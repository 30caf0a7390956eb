//! Strategy entity
//!
//! [`Strategy`] is the unit of composition: either a single [`Leaf`] or a
//! flattened [`OneOf`] over leaves.

use super::leaf::Leaf;
use super::one_of::{OneOf, distinct_non_empty, one_of};
use std::fmt;
use std::ops::BitOr;
use std::slice;
use std::sync::Arc;

/// A way to produce values of type `T`
///
/// Leaves are reference counted, so cloning a strategy is cheap and the
/// clone shares its leaves with the original.
///
/// # Example
///
/// ```
/// use disjunct_domain::Strategy;
///
/// let s = Strategy::just(1) | Strategy::just(2) | Strategy::sampled_from([3, 4]);
/// assert!(s.is_one_of());
/// assert_eq!(s.to_string(), "one_of(just(1), just(2), sampled_from([3, 4]))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy<T> {
    /// A strategy with no children
    Leaf(Arc<Leaf<T>>),
    /// A flattened disjunction of leaves
    OneOf(OneOf<T>),
}

impl<T> Strategy<T> {
    /// Wrap a leaf into a strategy
    pub fn from_leaf(leaf: Leaf<T>) -> Self {
        Strategy::Leaf(Arc::new(leaf))
    }

    /// A strategy that always produces `value`
    pub fn just(value: T) -> Self {
        Self::from_leaf(Leaf::Just(value))
    }

    /// A strategy that produces one of `values`
    ///
    /// No values collapse to [`Strategy::nothing`] and a single value
    /// collapses to [`Strategy::just`].
    pub fn sampled_from(values: impl IntoIterator<Item = T>) -> Self {
        let mut values: Vec<T> = values.into_iter().collect();
        match values.len() {
            0 => Self::nothing(),
            1 => match values.pop() {
                Some(value) => Self::just(value),
                None => Self::nothing(),
            },
            _ => Self::from_leaf(Leaf::SampledFrom(values)),
        }
    }

    /// A strategy that never produces anything
    pub fn nothing() -> Self {
        Self::from_leaf(Leaf::Nothing)
    }

    /// An externally defined strategy, identified by its repr
    pub fn named(name: impl Into<String>) -> Self {
        Self::from_leaf(Leaf::Named(name.into()))
    }

    /// Check if this strategy is a disjunction
    pub fn is_one_of(&self) -> bool {
        matches!(self, Strategy::OneOf(_))
    }

    /// The disjunction behind this strategy, if it is one
    pub fn as_one_of(&self) -> Option<&OneOf<T>> {
        match self {
            Strategy::OneOf(disjunction) => Some(disjunction),
            Strategy::Leaf(_) => None,
        }
    }

    /// The flattened leaves of this strategy
    ///
    /// A leaf yields itself; a disjunction yields its `original_strategies`.
    pub fn leaves(&self) -> &[Arc<Leaf<T>>] {
        match self {
            Strategy::Leaf(leaf) => slice::from_ref(leaf),
            Strategy::OneOf(disjunction) => disjunction.original_strategies(),
        }
    }

    /// Whether this strategy can never produce a value
    pub fn is_empty(&self) -> bool {
        self.leaves().iter().all(|leaf| leaf.is_empty())
    }

    /// Distinct, non-empty alternatives of this strategy
    pub fn branches(&self) -> Vec<Arc<Leaf<T>>>
    where
        T: PartialEq,
    {
        distinct_non_empty(self.leaves())
    }
}

impl<T> From<Leaf<T>> for Strategy<T> {
    fn from(leaf: Leaf<T>) -> Self {
        Self::from_leaf(leaf)
    }
}

impl<T> From<OneOf<T>> for Strategy<T> {
    fn from(disjunction: OneOf<T>) -> Self {
        Strategy::OneOf(disjunction)
    }
}

impl<T> BitOr for Strategy<T> {
    type Output = Strategy<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        one_of([self, rhs])
    }
}

impl<T: fmt::Debug> fmt::Display for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Leaf(leaf) => fmt::Display::fmt(leaf, f),
            Strategy::OneOf(disjunction) => fmt::Display::fmt(disjunction, f),
        }
    }
}
