//! Normal (Gaussian) arrivals
//!
//! A single burst of arrivals. Samples from Normal(mean, stddev) are shifted
//! so the earliest is at zero, then stretched over the window: the earliest
//! arrival lands on `start` and the latest on `end`.
//!
//! Because of that min/max normalization the mean only matters through the
//! random stream; the burst shape comes from the sample spread itself.

use super::{
    rescale_to_window, require_finite, require_positive, shift_to_zero, ArrivalDistribution,
    TimeWindow,
};
use crate::error::TimelineError;
use rand::RngCore;
use rand_distr::{Distribution, Normal};

pub const DEFAULT_MEAN: f64 = 0.0;
pub const DEFAULT_STDDEV: f64 = 0.2;

/// Normal-shaped arrival times
#[derive(Debug, Clone)]
pub struct NormalArrivals {
    dist: Normal<f64>,
}

impl NormalArrivals {
    pub fn new(mean: f64, stddev: f64) -> Result<Self, TimelineError> {
        let mean = require_finite("mean", mean)?;
        let stddev = require_positive("stddev", stddev)?;

        Ok(Self {
            dist: normal(mean, stddev)?,
        })
    }
}

/// Build a normal sampler, mapping rand_distr's error onto ours
pub(crate) fn normal(mean: f64, stddev: f64) -> Result<Normal<f64>, TimelineError> {
    Normal::new(mean, stddev).map_err(|e| TimelineError::parameter("stddev", e.to_string()))
}

impl ArrivalDistribution for NormalArrivals {
    fn arrival_times(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
        window: &TimeWindow,
    ) -> Result<Vec<f64>, TimelineError> {
        let mut times = Vec::with_capacity(n);
        for _ in 0..n {
            times.push(self.dist.sample(rng));
        }

        shift_to_zero(&mut times);
        rescale_to_window(&mut times, window);
        Ok(times)
    }
}
