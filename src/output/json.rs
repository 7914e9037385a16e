//! JSON output formatting
//!
//! Emits the timeline together with everything needed to regenerate it:
//! distribution parameters, seed, window, and requested count.

use crate::config::TimelineConfig;
use crate::distribution::DistributionSpec;
use crate::generator::ArrivalTimeSequence;
use crate::Result;
use serde::Serialize;
use std::io::Write;

/// JSON document for one generated timeline
#[derive(Debug, Clone, Serialize)]
pub struct JsonTimeline {
    pub distribution: DistributionSpec,
    pub seed: u64,
    pub start: f64,
    pub end: f64,
    /// Instances requested
    pub instances: usize,
    /// Arrivals produced (differs from `instances` only for odd bimodal counts)
    pub count: usize,
    pub sorted: bool,
    pub times: Vec<f64>,
}

impl JsonTimeline {
    pub fn new(timeline: &ArrivalTimeSequence, config: &TimelineConfig) -> Self {
        Self {
            distribution: timeline.spec,
            seed: config.seed,
            start: timeline.window.start,
            end: timeline.window.end,
            instances: config.instances,
            count: timeline.len(),
            sorted: config.sorted,
            times: timeline.times.clone(),
        }
    }
}

/// Write the timeline as pretty-printed JSON followed by a newline
pub fn write_json_output<W: Write>(
    out: &mut W,
    timeline: &ArrivalTimeSequence,
    config: &TimelineConfig,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonTimeline::new(timeline, config))?;
    writeln!(out)?;
    Ok(())
}
