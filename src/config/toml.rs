//! TOML configuration file parsing
//!
//! Example file:
//!
//! ```toml
//! seed = 42
//! start = 0.0
//! format = "lines"
//!
//! [poisson]
//! scale = 0.5
//!
//! [bimodal]
//! mean1 = -2.0
//! mean2 = 2.0
//! stddev = 0.4
//! ```

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<FileConfig> {
    let config: FileConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with file configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, file: FileConfig) -> Result<TimelineConfig> {
    let distribution: DistributionKind = cli.distribution.parse()?;

    let mut config = TimelineConfig::new(distribution, cli.duration, cli.instances);

    // File layer
    if let Some(seed) = file.seed {
        config.seed = seed;
    }
    if let Some(start) = file.start {
        config.start = start;
    }
    if let Some(format) = file.format {
        config.format = format;
    }
    if let Some(sorted) = file.sorted {
        config.sorted = sorted;
    }
    if let Some(summary) = file.summary {
        config.summary = summary;
    }
    config.poisson = file.poisson;
    config.gamma = file.gamma;
    config.normal = file.normal;
    config.bimodal = file.bimodal;

    // CLI layer
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(start) = cli.start {
        config.start = start;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.sorted {
        config.sorted = true;
    }
    if cli.summary {
        config.summary = true;
    }

    // Shape overrides
    if let Some(scale) = cli.scale {
        config.poisson.scale = scale;
    }
    if let Some(t0) = cli.t0 {
        config.poisson.t0 = t0;
    }
    if let Some(shape) = cli.shape {
        config.gamma.shape = shape;
    }
    if let Some(mean) = cli.mean {
        config.normal.mean = mean;
    }
    if let Some(mean1) = cli.mean1 {
        config.bimodal.mean1 = mean1;
    }
    if let Some(mean2) = cli.mean2 {
        config.bimodal.mean2 = mean2;
    }
    if let Some(stddev) = cli.stddev {
        match distribution {
            DistributionKind::Bimodal => config.bimodal.stddev = stddev,
            _ => config.normal.stddev = stddev,
        }
    }

    Ok(config)
}

/// Resolve the run configuration from the CLI and its optional config file
pub fn load_config(cli: &Cli) -> Result<TimelineConfig> {
    let file = match &cli.config {
        Some(path) => parse_toml_file(path)?,
        None => FileConfig::default(),
    };

    merge_cli_with_config(cli, file)
}
