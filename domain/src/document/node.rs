//! Strategy document tree
//!
//! A serializable description of a strategy. Documents are validated and then
//! built bottom-up through the same combinators library callers use, so a
//! nested `one_of` in a document is flattened exactly like one built in code.

use super::literal::Literal;
use crate::core::error::DomainError;
use crate::strategy::{Strategy, one_of};
use serde::{Deserialize, Serialize};

/// Default nesting limit for documents
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A top-level strategy document
///
/// # Example
///
/// ```
/// use disjunct_domain::StrategyDocument;
///
/// let doc: StrategyDocument = serde_json::from_str(r#"{
///     "strategy": {
///         "kind": "one_of",
///         "children": [
///             {"kind": "one_of", "children": [
///                 {"kind": "just", "value": 1},
///                 {"kind": "just", "value": 2}
///             ]},
///             {"kind": "named", "name": "integers()"}
///         ]
///     }
/// }"#).unwrap();
///
/// let strategy = doc.strategy.build();
/// assert_eq!(strategy.to_string(), "one_of(just(1), just(2), integers())");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDocument {
    pub strategy: StrategyNode,
}

/// One node of a strategy description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyNode {
    Just { value: Literal },
    SampledFrom { values: Vec<Literal> },
    Nothing,
    Named { name: String },
    OneOf { children: Vec<StrategyNode> },
}

impl StrategyNode {
    /// Nesting depth of the tree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        match self {
            StrategyNode::OneOf { children } => {
                1 + children.iter().map(StrategyNode::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Number of leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            StrategyNode::OneOf { children } => {
                children.iter().map(StrategyNode::leaf_count).sum()
            }
            _ => 1,
        }
    }

    /// Check the tree before building it
    pub fn validate(&self, max_depth: usize) -> Result<(), DomainError> {
        let depth = self.depth();
        if depth > max_depth {
            return Err(DomainError::DepthExceeded {
                depth,
                max: max_depth,
            });
        }
        self.validate_node()
    }

    fn validate_node(&self) -> Result<(), DomainError> {
        match self {
            StrategyNode::OneOf { children } => {
                if children.is_empty() {
                    return Err(DomainError::EmptyDisjunction);
                }
                children.iter().try_for_each(StrategyNode::validate_node)
            }
            StrategyNode::Named { name } if name.trim().is_empty() => {
                Err(DomainError::InvalidArgument(
                    "named strategy requires a non-empty name".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Build the described strategy
    pub fn build(&self) -> Strategy<Literal> {
        match self {
            StrategyNode::Just { value } => Strategy::just(value.clone()),
            StrategyNode::SampledFrom { values } => Strategy::sampled_from(values.iter().cloned()),
            StrategyNode::Nothing => Strategy::nothing(),
            StrategyNode::Named { name } => Strategy::named(name.trim()),
            StrategyNode::OneOf { children } => one_of(children.iter().map(StrategyNode::build)),
        }
    }
}
