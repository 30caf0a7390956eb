//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for normalization reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with every flattened alternative
    Text,
    /// Only the repr of the normalized strategy
    Repr,
    /// JSON output
    Json,
}

impl From<OutputFormat> for disjunct_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Repr => Self::Repr,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for disjunct
#[derive(Parser, Debug)]
#[command(name = "disjunct")]
#[command(
    author,
    version,
    about = "Flatten nested one_of strategies into a single list of alternatives"
)]
#[command(long_about = r#"
disjunct reads a strategy document (JSON or TOML) and normalizes it:
every nested one_of is inlined, in its original left-to-right position,
into a single flat list of leaf alternatives.

Configuration files are loaded from (in priority order):
1. DISJUNCT_* environment variables
2. --config <path>       Explicit config file
3. ./disjunct.toml       Project-level config
4. ~/.config/disjunct/config.toml   Global config

Example:
  disjunct strategy.toml
  disjunct -o repr strategy.json
  disjunct --branches -o json strategy.toml
"#)]
pub struct Cli {
    /// Strategy document to normalize (not required with --show-config)
    pub file: Option<PathBuf>,

    /// Output format (defaults to the configured format, else text)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Also report distinct, non-empty branches
    #[arg(long)]
    pub branches: bool,

    /// Deepest document nesting accepted
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
