//! Bimodal arrivals
//!
//! Two bursts of arrivals: the first half of the samples comes from
//! Normal(mean1, stddev), the second half from Normal(mean2, stddev). The two
//! groups are concatenated in that order (not interleaved), shifted so the
//! overall minimum is zero, and stretched over the window.
//!
//! # Odd instance counts
//!
//! Each component draws `round(n / 2)` samples with ties rounded to even, so
//! the total is `2 * round(n / 2)`. For odd `n` this differs from `n` by one
//! (n = 3 gives 4, n = 5 gives 4). A single instance rounds to zero samples
//! per component and is rejected.

use super::normal::normal;
use super::{
    require_finite, require_positive, rescale_to_window, shift_to_zero, ArrivalDistribution,
    TimeWindow,
};
use crate::error::TimelineError;
use rand::RngCore;
use rand_distr::{Distribution, Normal};

pub const DEFAULT_MEAN1: f64 = -1.0;
pub const DEFAULT_MEAN2: f64 = 1.0;
pub const DEFAULT_STDDEV: f64 = 0.3;

/// Samples drawn per component for `n` requested instances
///
/// `n / 2` rounded half to even.
pub fn component_size(n: usize) -> usize {
    let half = n / 2;
    if n % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

/// Two-burst arrival times
#[derive(Debug, Clone)]
pub struct BimodalArrivals {
    first: Normal<f64>,
    second: Normal<f64>,
}

impl BimodalArrivals {
    pub fn new(mean1: f64, mean2: f64, stddev: f64) -> Result<Self, TimelineError> {
        let mean1 = require_finite("mean1", mean1)?;
        let mean2 = require_finite("mean2", mean2)?;
        let stddev = require_positive("stddev", stddev)?;

        Ok(Self {
            first: normal(mean1, stddev)?,
            second: normal(mean2, stddev)?,
        })
    }
}

impl ArrivalDistribution for BimodalArrivals {
    fn arrival_times(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
        window: &TimeWindow,
    ) -> Result<Vec<f64>, TimelineError> {
        let half = component_size(n);
        if half == 0 {
            return Err(TimelineError::parameter(
                "instances",
                format!("bimodal needs at least 2 instances, got {}", n),
            ));
        }

        let mut times = Vec::with_capacity(2 * half);
        for _ in 0..half {
            times.push(self.first.sample(rng));
        }
        for _ in 0..half {
            times.push(self.second.sample(rng));
        }

        shift_to_zero(&mut times);
        rescale_to_window(&mut times, window);
        Ok(times)
    }
}
