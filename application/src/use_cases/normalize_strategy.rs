//! Normalize Strategy use case
//!
//! Loads a strategy document, validates it, builds it (flattening every
//! nested `one_of`) and reports the resulting alternatives.

use crate::config::NormalizeParams;
use crate::ports::strategy_source::{StrategySourceError, StrategySourcePort};
use disjunct_domain::{DomainError, NormalizationReport};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during normalization
#[derive(Error, Debug)]
pub enum NormalizeStrategyError {
    #[error("Source error: {0}")]
    Source(#[from] StrategySourceError),

    #[error("Invalid strategy document: {0}")]
    Invalid(#[from] DomainError),
}

/// Input for the NormalizeStrategy use case
#[derive(Debug, Clone)]
pub struct NormalizeStrategyInput {
    /// Where the document lives, as understood by the source port
    pub location: String,
    /// Normalization parameters
    pub params: NormalizeParams,
}

impl NormalizeStrategyInput {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            params: NormalizeParams::default(),
        }
    }

    pub fn with_params(mut self, params: NormalizeParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for normalizing a strategy document
pub struct NormalizeStrategyUseCase<S: StrategySourcePort> {
    source: Arc<S>,
}

impl<S: StrategySourcePort> NormalizeStrategyUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case
    pub fn execute(
        &self,
        input: NormalizeStrategyInput,
    ) -> Result<NormalizationReport, NormalizeStrategyError> {
        info!("Normalizing strategy document {}", input.location);

        let document = self.source.load(&input.location)?;
        let root = &document.strategy;

        let input_depth = root.depth();
        let input_leaf_count = root.leaf_count();
        debug!(
            "Loaded document: depth {}, {} leaves",
            input_depth, input_leaf_count
        );

        if let Err(e) = root.validate(input.params.max_depth) {
            warn!("Rejecting {}: {}", input.location, e);
            return Err(e.into());
        }

        let strategy = root.build();
        let mut report = NormalizationReport::new(&strategy, input_depth, input_leaf_count);
        if input.params.show_branches {
            report = report.with_branches(&strategy);
        }

        info!(
            "Flattened {} leaves into {} alternatives",
            input_leaf_count,
            report.alternative_count()
        );
        if report.is_empty {
            warn!("Strategy {} can never produce a value", report.repr);
        }

        Ok(report)
    }
}
