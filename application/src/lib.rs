//! Application layer for disjunct
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::NormalizeParams;
pub use ports::strategy_source::{InMemoryStrategySource, StrategySourceError, StrategySourcePort};
pub use use_cases::normalize_strategy::{
    NormalizeStrategyError, NormalizeStrategyInput, NormalizeStrategyUseCase,
};
