//! Leaf strategies
//!
//! A leaf produces values directly and never carries children. Leaves are
//! immutable once built, so the same leaf can sit in any number of
//! disjunctions at once.

use std::fmt;

/// A strategy that produces values without delegating to other strategies
///
/// # Example
///
/// ```
/// use disjunct_domain::Leaf;
///
/// let leaf = Leaf::Just(3);
/// assert_eq!(leaf.value(), Some(&3));
/// assert_eq!(leaf.to_string(), "just(3)");
/// assert!(Leaf::<i32>::Nothing.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf<T> {
    /// Always produces the given value
    Just(T),
    /// Produces one of the given values
    SampledFrom(Vec<T>),
    /// Produces nothing at all
    Nothing,
    /// An externally defined strategy known only by its repr (e.g. `integers()`)
    Named(String),
}

impl<T> Leaf<T> {
    /// The value a `just` leaf produces
    pub fn value(&self) -> Option<&T> {
        match self {
            Leaf::Just(value) => Some(value),
            _ => None,
        }
    }

    /// Whether this leaf can never produce a value
    pub fn is_empty(&self) -> bool {
        match self {
            Leaf::Nothing => true,
            Leaf::SampledFrom(values) => values.is_empty(),
            Leaf::Just(_) | Leaf::Named(_) => false,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Leaf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Just(value) => write!(f, "just({:?})", value),
            Leaf::SampledFrom(values) => {
                let items: Vec<String> = values.iter().map(|v| format!("{:?}", v)).collect();
                write!(f, "sampled_from([{}])", items.join(", "))
            }
            Leaf::Nothing => write!(f, "nothing()"),
            Leaf::Named(name) => write!(f, "{}", name),
        }
    }
}
