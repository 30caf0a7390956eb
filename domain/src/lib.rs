//! Domain layer for disjunct
//!
//! This crate contains strategies, the disjunction normalizer and the
//! serializable strategy documents. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Strategy
//!
//! A description of how values are produced, either a **leaf** (`just`,
//! `sampled_from`, `nothing`, or a named external strategy) or a **one_of**
//! disjunction over leaves.
//!
//! ## Flattening
//!
//! Disjunctions are normalized when they are constructed: nested `one_of`
//! strategies are inlined in their original left-to-right position, so
//! `original_strategies` never contains another disjunction.

pub mod config;
pub mod core;
pub mod document;
pub mod strategy;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::error::DomainError;
pub use document::{DEFAULT_MAX_DEPTH, Literal, StrategyDocument, StrategyNode};
pub use strategy::{Leaf, NormalizationReport, OneOf, Strategy, flatten, one_of};
