//! CLI entrypoint for disjunct
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use disjunct_application::{NormalizeStrategyInput, NormalizeStrategyUseCase};
use disjunct_domain::OutputFormat;
use disjunct_infrastructure::{ConfigLoader, FileStrategySource};
use disjunct_presentation::{Cli, ConsoleFormatter, OutputFormatter};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let file = match cli.file {
        Some(file) => file,
        None => bail!(
            "A strategy document is required. Use --show-config to inspect configuration."
        ),
    };

    // Command-line flags take precedence over configuration
    let mut params = config.normalize_params();
    if cli.branches {
        params = params.with_branches(true);
    }
    if let Some(max_depth) = cli.max_depth {
        if max_depth == 0 {
            bail!("--max-depth must be at least 1");
        }
        params = params.with_max_depth(max_depth);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let source = Arc::new(FileStrategySource::new());
    let use_case = NormalizeStrategyUseCase::new(source);

    info!("Starting disjunct on {}", file.display());
    let input = NormalizeStrategyInput::new(file.to_string_lossy()).with_params(params);
    let report = use_case
        .execute(input)
        .with_context(|| format!("Failed to normalize {}", file.display()))?;

    println!("{}", ConsoleFormatter.render(format, &report));

    Ok(())
}
