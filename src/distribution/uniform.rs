//! Uniform arrivals
//!
//! Every instant of the window is equally likely. Samples are drawn directly
//! from `[start, end)`, so no rescaling is applied and the last arrival does
//! not, in general, coincide with `end`.

use super::{ArrivalDistribution, TimeWindow};
use crate::error::TimelineError;
use rand::RngCore;
use rand_distr::{Distribution, Uniform};

/// Uniform arrival times
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformArrivals;

impl ArrivalDistribution for UniformArrivals {
    fn arrival_times(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
        window: &TimeWindow,
    ) -> Result<Vec<f64>, TimelineError> {
        let dist = Uniform::new(window.start, window.end);
        let mut times = Vec::with_capacity(n);
        for _ in 0..n {
            times.push(dist.sample(rng));
        }
        Ok(times)
    }
}
