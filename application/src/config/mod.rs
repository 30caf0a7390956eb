//! Application-level configuration.
//!
//! - [`NormalizeParams`] — normalization control (depth guard, branch reporting)

pub mod normalize_params;

pub use normalize_params::NormalizeParams;
