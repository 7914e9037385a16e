//! Timeline output
//!
//! The generated timeline is the program's only payload and always goes to
//! stdout. Diagnostics and the optional summary go to stderr.
//!
//! # Formats
//!
//! - **csv** (default): one line, comma-separated, six decimal places
//! - **lines**: one timestamp per line, six decimal places
//! - **json**: timestamps plus the distribution, seed, and window

pub mod json;
pub mod text;

use crate::config::TimelineConfig;
use crate::generator::ArrivalTimeSequence;
use crate::Result;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::io::Write;

/// Output format for the generated timeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single comma-separated line
    #[default]
    Csv,
    /// One timestamp per line
    Lines,
    /// Pretty-printed JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Lines => write!(f, "lines"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Write the timeline in the configured format
pub fn write_timeline<W: Write>(
    out: &mut W,
    timeline: &ArrivalTimeSequence,
    config: &TimelineConfig,
) -> Result<()> {
    match config.format {
        OutputFormat::Csv => text::write_csv(out, &timeline.times)?,
        OutputFormat::Lines => text::write_lines(out, &timeline.times)?,
        OutputFormat::Json => json::write_json_output(out, timeline, config)?,
    }
    out.flush()?;
    Ok(())
}
