//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use disjunct_application::NormalizeParams;
use disjunct_domain::{DEFAULT_MAX_DEPTH, OutputFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("normalize.max_depth cannot be 0")]
    InvalidMaxDepth,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw normalization configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNormalizeConfig {
    /// Deepest document nesting accepted
    pub max_depth: usize,
    /// Report distinct branches alongside the alternatives
    pub show_branches: bool,
}

impl Default for FileNormalizeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            show_branches: false,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Normalization settings
    pub normalize: FileNormalizeConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.normalize.max_depth == 0 {
            return Err(ConfigValidationError::InvalidMaxDepth);
        }
        Ok(())
    }

    /// Convert the `[normalize]` section into use case parameters
    pub fn normalize_params(&self) -> NormalizeParams {
        NormalizeParams::default()
            .with_max_depth(self.normalize.max_depth)
            .with_branches(self.normalize.show_branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "json"
color = false

[normalize]
max_depth = 12
show_branches = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.normalize.max_depth, 12);
        assert!(config.normalize.show_branches);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
format = "repr"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Repr));
        // Defaults should apply
        assert!(config.output.color);
        assert_eq!(config.normalize.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!config.normalize.show_branches);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert_eq!(config.normalize.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_max_depth() {
        let toml_str = r#"
[normalize]
max_depth = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxDepth)
        ));
    }

    #[test]
    fn test_normalize_params() {
        let toml_str = r#"
[normalize]
max_depth = 7
show_branches = true
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.normalize_params();
        assert_eq!(params.max_depth, 7);
        assert!(params.show_branches);
    }
}
