//! timeline CLI entry point

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::time::Instant;
use timeline::config::{cli::Cli, toml::load_config, validator::validate_config};
use timeline::generator::ArrivalTimeGenerator;
use timeline::output::{text, write_timeline};
use timeline::stats::TimelineSummary;
use timeline::util::logging::init_logging;
use tracing::debug;

fn main() -> Result<()> {
    let main_start = Instant::now();

    // Parse CLI arguments
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    // Resolve and validate configuration before producing any output
    let config = load_config(&cli)?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!(config = %config, "resolved configuration");

    let window = config.window()?;
    let mut generator = ArrivalTimeGenerator::with_seed(config.seed);
    let mut timeline = generator.generate(&config.spec(), config.instances, window)?;
    if config.sorted {
        timeline.sort();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_timeline(&mut out, &timeline, &config).context("Failed to write timeline")?;

    if config.summary {
        let summary = TimelineSummary::from_timeline(&timeline, config.instances)?;
        let mut err = io::stderr().lock();
        text::print_summary(&mut err, &summary).context("Failed to write summary")?;
        err.flush()?;
    }

    debug!(
        elapsed_ms = main_start.elapsed().as_secs_f64() * 1000.0,
        "done"
    );
    Ok(())
}
