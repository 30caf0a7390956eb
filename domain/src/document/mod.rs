//! Serializable strategy descriptions

pub mod literal;
pub mod node;

pub use literal::Literal;
pub use node::{DEFAULT_MAX_DEPTH, StrategyDocument, StrategyNode};
