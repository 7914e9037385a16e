//! Poisson-process arrivals
//!
//! Arrivals of independent requests form a Poisson process: the gaps between
//! consecutive arrivals are exponentially distributed. This module draws `n`
//! gaps with mean `scale`, accumulates them from `t0`, and stretches the
//! resulting timeline so the last arrival lands on the window end.
//!
//! Note this samples inter-arrival *gaps*, not arrival counts per interval.
//!
//! # Parameters
//!
//! - **scale**: Mean gap between arrivals (1 / rate), default 1.0
//! - **t0**: Origin of the running sum, default 0.0, never negative
//!
//! Since the output is rescaled to the window, `scale` only changes the
//! result through `t0`: the ratio `t0 / scale` sets how far from `start` the
//! first arrivals sit.

use super::{
    rescale_to_window, require_non_negative, require_positive, ArrivalDistribution, TimeWindow,
};
use crate::error::TimelineError;
use rand::RngCore;
use rand_distr::{Distribution, Exp};

pub const DEFAULT_SCALE: f64 = 1.0;

/// Poisson-process arrival times
#[derive(Debug, Clone)]
pub struct PoissonArrivals {
    gaps: Exp<f64>,
    t0: f64,
}

impl PoissonArrivals {
    pub fn new(scale: f64, t0: f64) -> Result<Self, TimelineError> {
        let scale = require_positive("scale", scale)?;
        let t0 = require_non_negative("t0", t0)?;
        let gaps = Exp::new(1.0 / scale)
            .map_err(|e| TimelineError::parameter("scale", e.to_string()))?;

        Ok(Self { gaps, t0 })
    }
}

impl ArrivalDistribution for PoissonArrivals {
    fn arrival_times(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
        window: &TimeWindow,
    ) -> Result<Vec<f64>, TimelineError> {
        let mut times = Vec::with_capacity(n);
        let mut t = self.t0;
        for _ in 0..n {
            t += self.gaps.sample(rng);
            times.push(t);
        }

        rescale_to_window(&mut times, window);
        Ok(times)
    }
}
