//! Value objects describing a normalized strategy

use super::entities::Strategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a strategy after its disjunctions have been flattened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Repr of the normalized strategy
    pub repr: String,
    /// Nesting depth of the strategy as it was described
    pub input_depth: usize,
    /// Number of leaves in the description
    pub input_leaf_count: usize,
    /// Repr of every flattened alternative, in order
    pub alternatives: Vec<String>,
    /// Distinct non-empty alternatives (only when requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    /// Whether the strategy can never produce a value
    pub is_empty: bool,
}

impl NormalizationReport {
    /// Build a report for an already constructed strategy
    pub fn new<T>(strategy: &Strategy<T>, input_depth: usize, input_leaf_count: usize) -> Self
    where
        T: fmt::Debug,
    {
        Self {
            repr: strategy.to_string(),
            input_depth,
            input_leaf_count,
            alternatives: strategy.leaves().iter().map(|leaf| leaf.to_string()).collect(),
            branches: None,
            is_empty: strategy.is_empty(),
        }
    }

    /// Attach the distinct branches of `strategy`
    pub fn with_branches<T>(mut self, strategy: &Strategy<T>) -> Self
    where
        T: fmt::Debug + PartialEq,
    {
        self.branches = Some(
            strategy
                .branches()
                .iter()
                .map(|leaf| leaf.to_string())
                .collect(),
        );
        self
    }

    /// Number of flattened alternatives
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::one_of;

    #[test]
    fn test_report_from_nested_strategy() {
        let s = one_of([
            one_of([Strategy::just(1), Strategy::just(2)]),
            Strategy::just(1),
        ]);
        let report = NormalizationReport::new(&s, 3, 3);

        assert_eq!(report.repr, "one_of(just(1), just(2), just(1))");
        assert_eq!(report.alternatives, vec!["just(1)", "just(2)", "just(1)"]);
        assert_eq!(report.alternative_count(), 3);
        assert!(report.branches.is_none());
        assert!(!report.is_empty);
    }

    #[test]
    fn test_with_branches() {
        let s = Strategy::just(1) | Strategy::just(1) | Strategy::nothing();
        let report = NormalizationReport::new(&s, 2, 3).with_branches(&s);
        assert_eq!(report.branches, Some(vec!["just(1)".to_string()]));
    }

    #[test]
    fn test_serialize_skips_missing_branches() {
        let report = NormalizationReport::new(&Strategy::just(1), 1, 1);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("branches").is_none());
        assert_eq!(json["alternatives"][0], "just(1)");
    }
}
