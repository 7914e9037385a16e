//! Gamma arrivals
//!
//! Samples from Gamma(shape, 1.0) and stretches them so the largest sample
//! lands on the window end. The minimum is not subtracted: Gamma support
//! starts at zero, so the earliest arrival sits slightly after `start`.
//!
//! With the default shape of 2.0 arrivals ramp up quickly, peak early in the
//! window, and trail off with a long tail.

use super::{rescale_to_window, require_positive, ArrivalDistribution, TimeWindow};
use crate::error::TimelineError;
use rand::RngCore;
use rand_distr::{Distribution, Gamma};

pub const DEFAULT_SHAPE: f64 = 2.0;

/// Gamma-shaped arrival times
#[derive(Debug, Clone)]
pub struct GammaArrivals {
    dist: Gamma<f64>,
}

impl GammaArrivals {
    pub fn new(shape: f64) -> Result<Self, TimelineError> {
        let shape = require_positive("shape", shape)?;
        let dist = Gamma::new(shape, 1.0)
            .map_err(|e| TimelineError::parameter("shape", e.to_string()))?;

        Ok(Self { dist })
    }
}

impl ArrivalDistribution for GammaArrivals {
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

        rescale_to_window(&mut times, window);
        Ok(times)
    }
}
