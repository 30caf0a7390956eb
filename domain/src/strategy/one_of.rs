//! Disjunction strategies and the flattening normalizer
//!
//! A [`OneOf`] represents "produce a value from one of these alternatives".
//! Its alternatives are kept flat: nesting a disjunction inside another
//! inlines the inner leaves at the position the inner disjunction occupied.
//!
//! ```text
//! one_of(one_of(just(1), just(2)), one_of(just(3), one_of(just(4), just(5))), just(6))
//!                           ↓ construction
//! one_of(just(1), just(2), just(3), just(4), just(5), just(6))
//! ```

use super::entities::Strategy;
use super::leaf::Leaf;
use crate::core::error::DomainError;
use std::fmt;
use std::sync::Arc;

/// Flatten an ordered sequence of strategies into their leaves
///
/// Leaves are appended as they are met. A disjunction contributes its own
/// `original_strategies` in order and is never appended itself. Every
/// [`OneOf`] is flat from the moment it is built, so inlining one level
/// inlines the whole subtree, however deep the original nesting was.
///
/// Leaves are neither deduplicated nor reordered.
pub fn flatten<T>(children: impl IntoIterator<Item = Strategy<T>>) -> Vec<Arc<Leaf<T>>> {
    let mut flat = Vec::new();
    for child in children {
        match child {
            Strategy::Leaf(leaf) => flat.push(leaf),
            Strategy::OneOf(nested) => flat.extend(nested.original_strategies),
        }
    }
    flat
}

/// Combine strategies into one that picks among all of their alternatives
///
/// - no children gives `nothing()`
/// - a single child is returned as is
/// - otherwise the children are flattened into a [`OneOf`]
///
/// # Example
///
/// ```
/// use disjunct_domain::{Strategy, one_of};
///
/// let s = one_of([one_of([Strategy::just(1), Strategy::just(2)]), Strategy::just(3)]);
/// assert_eq!(s.to_string(), "one_of(just(1), just(2), just(3))");
/// assert_eq!(s.leaves().len(), 3);
/// ```
pub fn one_of<T>(children: impl IntoIterator<Item = Strategy<T>>) -> Strategy<T> {
    let mut children: Vec<Strategy<T>> = children.into_iter().collect();
    match children.len() {
        0 => Strategy::nothing(),
        1 => children.remove(0),
        _ => Strategy::OneOf(OneOf {
            original_strategies: flatten(children),
        }),
    }
}

/// A strategy that picks one of several leaf alternatives
///
/// # Example
///
/// ```
/// use disjunct_domain::{OneOf, Strategy};
///
/// let inner = OneOf::new([Strategy::just(1), Strategy::just(2)]).unwrap();
/// let outer = OneOf::new([Strategy::OneOf(inner), Strategy::just(3)]).unwrap();
///
/// let values: Vec<_> = outer
///     .original_strategies()
///     .iter()
///     .filter_map(|leaf| leaf.value().copied())
///     .collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf<T> {
    original_strategies: Vec<Arc<Leaf<T>>>,
}

impl<T> OneOf<T> {
    /// Build a disjunction, flattening any nested disjunctions among `children`
    pub fn new(children: impl IntoIterator<Item = Strategy<T>>) -> Result<Self, DomainError> {
        let original_strategies = flatten(children);
        if original_strategies.is_empty() {
            return Err(DomainError::EmptyDisjunction);
        }
        Ok(Self {
            original_strategies,
        })
    }

    /// The flattened alternatives, in their original left-to-right order
    pub fn original_strategies(&self) -> &[Arc<Leaf<T>>] {
        &self.original_strategies
    }

    /// Whether none of the alternatives can produce a value
    pub fn is_empty(&self) -> bool {
        self.original_strategies.iter().all(|leaf| leaf.is_empty())
    }

    /// The alternatives a generator would choose among
    ///
    /// Empty leaves are dropped and equal leaves collapse onto their first
    /// occurrence. `original_strategies` is left untouched.
    pub fn element_strategies(&self) -> Vec<Arc<Leaf<T>>>
    where
        T: PartialEq,
    {
        distinct_non_empty(&self.original_strategies)
    }
}

pub(crate) fn distinct_non_empty<T: PartialEq>(leaves: &[Arc<Leaf<T>>]) -> Vec<Arc<Leaf<T>>> {
    let mut distinct: Vec<Arc<Leaf<T>>> = Vec::with_capacity(leaves.len());
    for leaf in leaves {
        if leaf.is_empty() || distinct.iter().any(|seen| seen == leaf) {
            continue;
        }
        distinct.push(Arc::clone(leaf));
    }
    distinct
}

impl<T: fmt::Debug> fmt::Display for OneOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alternatives: Vec<String> = self
            .original_strategies
            .iter()
            .map(|leaf| leaf.to_string())
            .collect();
        write!(f, "one_of({})", alternatives.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(disjunction: &OneOf<i32>) -> Vec<i32> {
        disjunction
            .original_strategies()
            .iter()
            .map(|leaf| *leaf.value().expect("just leaf"))
            .collect()
    }

    fn just_all(values: &[i32]) -> Vec<Strategy<i32>> {
        values.iter().copied().map(Strategy::just).collect()
    }

    #[test]
    fn test_flattens_single_level() {
        let s1 = one_of(just_all(&[1, 2]));
        let s2 = Strategy::just(3);
        let s = OneOf::new([s1, s2]).unwrap();

        assert_eq!(s.original_strategies().len(), 3);
        assert_eq!(values(&s), vec![1, 2, 3]);
    }

    #[test]
    fn test_flattens_multiple_levels() {
        let s1 = one_of(just_all(&[1, 2]));
        let s2 = one_of([Strategy::just(3), one_of(just_all(&[4, 5]))]);
        let s3 = one_of([s1, s2]);
        let s = OneOf::new([s3, Strategy::just(6)]).unwrap();

        assert_eq!(s.original_strategies().len(), 6);
        assert_eq!(values(&s), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_maintains_order() {
        let s1 = one_of(just_all(&[1, 2]));
        let s2 = one_of(just_all(&[3, 4]));
        let s = OneOf::new([s1, s2]).unwrap();

        assert_eq!(s.original_strategies().len(), 4);
        assert_eq!(values(&s), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reflattening_flat_disjunction_is_identity() {
        let flat = OneOf::new(just_all(&[1, 2, 3])).unwrap();
        let again = OneOf::new([Strategy::OneOf(flat.clone())]).unwrap();
        assert_eq!(again, flat);
    }

    #[test]
    fn test_leaf_identity_is_preserved() {
        let shared = Strategy::just(7);
        let Strategy::Leaf(leaf) = &shared else {
            panic!("expected a leaf");
        };
        let leaf = Arc::clone(leaf);

        let inner = one_of([shared.clone(), Strategy::just(8)]);
        let outer = OneOf::new([inner, shared]).unwrap();

        let alternatives = outer.original_strategies();
        assert!(Arc::ptr_eq(&alternatives[0], &leaf));
        assert!(Arc::ptr_eq(&alternatives[2], &leaf));
        assert_eq!(alternatives[0].value(), Some(&7));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let s = OneOf::new(just_all(&[1, 1, 2, 1])).unwrap();
        assert_eq!(values(&s), vec![1, 1, 2, 1]);
    }

    #[test]
    fn test_empty_children_rejected() {
        let result = OneOf::<i32>::new(Vec::new());
        assert_eq!(result, Err(DomainError::EmptyDisjunction));
    }

    #[test]
    fn test_flatten_is_total() {
        assert!(flatten(Vec::<Strategy<i32>>::new()).is_empty());
        assert_eq!(flatten(just_all(&[4])).len(), 1);
    }

    #[test]
    fn test_element_strategies_dedupe_and_drop_empty() {
        let s = OneOf::new([
            Strategy::just(1),
            Strategy::nothing(),
            Strategy::just(2),
            Strategy::just(1),
            Strategy::from_leaf(Leaf::SampledFrom(Vec::new())),
        ])
        .unwrap();

        let elements: Vec<String> =
            s.element_strategies().iter().map(|l| l.to_string()).collect();
        assert_eq!(elements, vec!["just(1)", "just(2)"]);
        assert_eq!(s.original_strategies().len(), 5);
    }

    #[test]
    fn test_is_empty_only_when_every_leaf_is_empty() {
        let empty = OneOf::<i32>::new([
            Strategy::nothing(),
            Strategy::from_leaf(Leaf::SampledFrom(Vec::new())),
        ])
        .unwrap();
        assert!(empty.is_empty());

        let not_empty = OneOf::new([Strategy::nothing(), Strategy::just(1)]).unwrap();
        assert!(!not_empty.is_empty());
    }

    #[test]
    fn test_display() {
        let s = OneOf::new([
            one_of(just_all(&[1, 2])),
            Strategy::named("integers()"),
        ])
        .unwrap();
        assert_eq!(s.to_string(), "one_of(just(1), just(2), integers())");
    }
}
