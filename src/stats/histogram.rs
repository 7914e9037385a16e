//! Inter-arrival gap histogram using HdrHistogram
//!
//! Gaps are recorded in microseconds with 3 significant digits, so
//! percentiles are accurate to within 0.1% of the true gap.
//!
//! # Example
//!
//! ```
//! use timeline::stats::histogram::GapHistogram;
//!
//! let mut hist = GapHistogram::new().unwrap();
//! hist.record(0.5);
//! hist.record(1.5);
//!
//! let p50 = hist.percentile(50.0).unwrap();
//! assert!((p50 - 0.5).abs() < 0.001);
//! ```

use crate::Result;
use hdrhistogram::Histogram;

/// Largest gap tracked: one week, in microseconds
const MAX_GAP_US: u64 = 7 * 24 * 3600 * 1_000_000;

/// Histogram of gaps between consecutive arrivals
#[derive(Debug)]
pub struct GapHistogram {
    histogram: Histogram<u64>,
}

impl GapHistogram {
    /// Create an empty histogram covering 1us to one week
    pub fn new() -> Result<Self> {
        let histogram = Histogram::new_with_bounds(1, MAX_GAP_US, 3)
            .map_err(|e| anyhow::anyhow!("Failed to create gap histogram: {}", e))?;

        Ok(Self { histogram })
    }

    /// Record a gap given in seconds
    ///
    /// Values are clamped to the tracked range; gaps shorter than 1us
    /// (including simultaneous arrivals) count as 1us.
    #[inline]
    pub fn record(&mut self, gap_secs: f64) {
        let micros = (gap_secs * 1_000_000.0).round();
        let value = if micros.is_finite() {
            (micros.max(1.0) as u64).min(MAX_GAP_US)
        } else {
            MAX_GAP_US
        };
        let _ = self.histogram.record(value);
    }

    /// Gap at `percentile` (0.0 - 100.0), in seconds
    pub fn percentile(&self, percentile: f64) -> Option<f64> {
        if self.histogram.len() == 0 {
            return None;
        }
        Some(self.histogram.value_at_percentile(percentile) as f64 / 1_000_000.0)
    }

    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.len() == 0
    }
}
