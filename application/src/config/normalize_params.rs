//! Normalization parameters — use case control.
//!
//! [`NormalizeParams`] groups the static parameters that control
//! [`NormalizeStrategyUseCase`](crate::use_cases::normalize_strategy::NormalizeStrategyUseCase).
//! These are application-layer concerns, not domain policy.

use disjunct_domain::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Normalization control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeParams {
    /// Deepest document nesting accepted before building.
    pub max_depth: usize,
    /// Include the distinct, non-empty branches in the report.
    pub show_branches: bool,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            show_branches: false,
        }
    }
}

impl NormalizeParams {
    // ==================== Builder Methods ====================

    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    pub fn with_branches(mut self, show: bool) -> Self {
        self.show_branches = show;
        self
    }
}
