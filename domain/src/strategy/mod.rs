//! Strategy domain
//!
//! Strategies describe how values are produced; this crate only composes
//! them and never generates values itself.
//!
//! # Core Concepts
//!
//! ## Leaf
//! A strategy with no children (`just(1)`, `sampled_from([1, 2])`,
//! `nothing()`, or an externally defined strategy such as `integers()`).
//!
//! ## OneOf (Disjunction)
//! "Pick one of these alternatives". Disjunctions are flattened when they are
//! built, so `original_strategies` only ever contains leaves:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  one_of(A, one_of(B, one_of(C, D)), E)                       │
//! │                                                              │
//! │        one_of                                                │
//! │       /   |    \                                             │
//! │      A  one_of   E          ──▶   one_of(A, B, C, D, E)      │
//! │         /    \                                               │
//! │        B   one_of                                            │
//! │            /   \                                             │
//! │           C     D                                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod entities;
pub mod leaf;
pub mod one_of;
pub mod value_objects;

// Re-export main types
pub use entities::Strategy;
pub use leaf::Leaf;
pub use one_of::{OneOf, flatten, one_of};
pub use value_objects::NormalizationReport;
