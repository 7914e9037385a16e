//! Timeline statistics
//!
//! Summarizes a generated timeline the way a load test will experience it:
//! how many arrivals, how they are spaced, and the busiest second.
//!
//! # Example
//!
//! ```
//! use timeline::distribution::{DistributionKind, DistributionSpec, TimeWindow};
//! use timeline::generator::ArrivalTimeGenerator;
//! use timeline::stats::TimelineSummary;
//!
//! let spec = DistributionSpec::with_defaults(DistributionKind::Normal);
//! let timeline = ArrivalTimeGenerator::new()
//!     .generate(&spec, 100, TimeWindow::new(0.0, 60.0).unwrap())
//!     .unwrap();
//!
//! let summary = TimelineSummary::from_timeline(&timeline, 100).unwrap();
//! assert_eq!(summary.count, 100);
//! assert!(summary.peak_per_second >= 2);
//! ```

pub mod histogram;

use crate::distribution::DistributionSpec;
use crate::generator::ArrivalTimeSequence;
use crate::Result;
use histogram::GapHistogram;
use std::collections::BTreeMap;

/// Inter-arrival gap percentiles, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapPercentiles {
    pub p50: f64,
    pub p90: f64,
    pub p99: f64,
}

/// Summary of one generated timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSummary {
    pub distribution: DistributionSpec,
    pub requested: usize,
    pub count: usize,
    pub window_start: f64,
    pub window_end: f64,
    /// First and last arrival in output order
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    /// Mean gap between consecutive arrivals (0 for a single arrival)
    pub mean_gap: f64,
    /// None when there are fewer than two arrivals
    pub gap_percentiles: Option<GapPercentiles>,
    /// Most arrivals falling in any one-second bucket
    pub peak_per_second: usize,
    /// Start of the busiest second (earliest on ties)
    pub peak_second: i64,
}

impl TimelineSummary {
    /// Summarize `timeline`; `requested` is the instance count asked for
    pub fn from_timeline(timeline: &ArrivalTimeSequence, requested: usize) -> Result<Self> {
        let sorted = timeline.sorted_times();
        let count = sorted.len();
        if count == 0 {
            anyhow::bail!("cannot summarize an empty timeline");
        }

        let first = timeline.times[0];
        let last = timeline.times[count - 1];
        let min = sorted[0];
        let max = sorted[count - 1];
        let mean_gap = if count > 1 {
            (max - min) / (count - 1) as f64
        } else {
            0.0
        };

        let mut gaps = GapHistogram::new()?;
        for pair in sorted.windows(2) {
            gaps.record(pair[1] - pair[0]);
        }
        let gap_percentiles = match (
            gaps.percentile(50.0),
            gaps.percentile(90.0),
            gaps.percentile(99.0),
        ) {
            (Some(p50), Some(p90), Some(p99)) => Some(GapPercentiles { p50, p90, p99 }),
            _ => None,
        };

        let (peak_second, peak_per_second) = busiest_second(&sorted);

        Ok(Self {
            distribution: timeline.spec,
            requested,
            count,
            window_start: timeline.window.start,
            window_end: timeline.window.end,
            first,
            last,
            min,
            max,
            mean_gap,
            gap_percentiles,
            peak_per_second,
            peak_second,
        })
    }
}

/// Busiest one-second bucket as (second, arrivals)
fn busiest_second(times: &[f64]) -> (i64, usize) {
    let mut buckets: BTreeMap<i64, usize> = BTreeMap::new();
    for &t in times {
        *buckets.entry(t.floor() as i64).or_insert(0) += 1;
    }

    let mut peak = (0, 0);
    for (second, count) in buckets {
        if count > peak.1 {
            peak = (second, count);
        }
    }
    peak
}
