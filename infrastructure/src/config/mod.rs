//! Configuration file loading for disjunct
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DISJUNCT_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./disjunct.toml` or `./.disjunct.toml`
//! 4. Global config: `disjunct/config.toml` under the platform config directory
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileNormalizeConfig, FileOutputConfig};
pub use loader::ConfigLoader;
