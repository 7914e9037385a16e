//! CLI argument parsing using clap

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// timeline - synthetic arrival times for scheduler load tests
///
/// Prints INSTANCES arrival timestamps in [START, START + DURATION] as one
/// comma-separated line.
#[derive(Parser, Debug)]
#[command(name = "timeline")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Arrival distribution: poisson, uniform, gamma, normal, or bimodal
    #[arg(value_name = "DISTRIBUTION")]
    pub distribution: String,

    /// Window length in seconds
    #[arg(value_name = "DURATION")]
    pub duration: f64,

    /// Number of arrivals to generate
    #[arg(value_name = "INSTANCES")]
    pub instances: usize,

    /// Window start in seconds (default 0)
    #[arg(long)]
    pub start: Option<f64>,

    /// Random seed (default 123456789)
    #[arg(long, env = "TIMELINE_SEED")]
    pub seed: Option<u64>,

    /// TOML file with defaults and shape parameters
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Sort arrivals ascending before printing
    #[arg(long)]
    pub sorted: bool,

    /// Print a timeline summary to stderr
    #[arg(long)]
    pub summary: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    // === Shape Parameters ===
    /// Poisson mean gap between arrivals (1 / rate)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Poisson origin of the accumulated arrival times
    #[arg(long)]
    pub t0: Option<f64>,

    /// Gamma shape
    #[arg(long)]
    pub shape: Option<f64>,

    /// Normal mean
    #[arg(long)]
    pub mean: Option<f64>,

    /// Standard deviation (normal or bimodal)
    #[arg(long)]
    pub stddev: Option<f64>,

    /// Bimodal mean of the first burst
    #[arg(long)]
    pub mean1: Option<f64>,

    /// Bimodal mean of the second burst
    #[arg(long)]
    pub mean2: Option<f64>,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["timeline", "poisson", "10", "5"]).unwrap();
        assert_eq!(cli.distribution, "poisson");
        assert_eq!(cli.duration, 10.0);
        assert_eq!(cli.instances, 5);
        assert!(cli.config.is_none());
        assert!(!cli.sorted);
    }

    #[test]
    fn test_unknown_distribution_is_accepted_by_parser() {
        // Name checking happens when the config is resolved, not in clap
        let cli = Cli::try_parse_from(["timeline", "exponential", "10", "5"]).unwrap();
        assert_eq!(cli.distribution, "exponential");
    }

    #[test]
    fn test_shape_flags_accept_negative_values() {
        let cli = Cli::try_parse_from([
            "timeline", "bimodal", "60", "10", "--mean1", "-2.5", "--mean2", "3", "--stddev", "0.4",
        ])
        .unwrap();
        assert_eq!(cli.mean1, Some(-2.5));
        assert_eq!(cli.mean2, Some(3.0));
        assert_eq!(cli.stddev, Some(0.4));
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["timeline", "uniform", "60", "10", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_missing_instances_is_error() {
        assert!(Cli::try_parse_from(["timeline", "uniform", "60"]).is_err());
    }
}
