//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for normalization reports
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable report with every alternative listed (default)
    #[default]
    Text,
    /// Only the repr of the normalized strategy
    Repr,
    /// JSON output
    Json,
}
