//! Strategy document sources

mod file_source;

pub use file_source::{DocumentFormat, FileStrategySource};
