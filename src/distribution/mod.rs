//! Arrival-time distributions
//!
//! This module provides the statistical shapes used to place synthetic job
//! arrivals inside a time window. Each shape draws raw samples from a seeded
//! random source and then maps them onto the window.
//!
//! # Distributions
//!
//! - **Poisson**: Exponential inter-arrival gaps, accumulated (a Poisson process)
//! - **Uniform**: Arrivals spread evenly over the window
//! - **Gamma**: Skewed burst early in the window with a long tail
//! - **Normal**: Single burst centered in the window
//! - **Bimodal**: Two bursts, one per normal component
//!
//! # Window Mapping
//!
//! Except for Uniform, raw samples are mapped with
//! `t * ((end - start) / max(raw)) + start`, so the latest arrival always lands
//! on `end`. Normal and Bimodal first subtract the minimum so the earliest
//! arrival lands on `start`.
//!
//! # Example
//!
//! ```
//! use timeline::distribution::{ArrivalDistribution, TimeWindow, poisson::PoissonArrivals};
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(123456789);
//! let poisson = PoissonArrivals::new(1.0, 0.0).unwrap();
//! let times = poisson.arrival_times(5, &mut rng, &TimeWindow::new(0.0, 10.0).unwrap()).unwrap();
//! assert_eq!(times.len(), 5);
//! assert!((times[4] - 10.0).abs() < 1e-9);
//! ```

use crate::error::TimelineError;
use rand::RngCore;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub mod bimodal;
pub mod gamma;
pub mod normal;
pub mod poisson;
pub mod uniform;

/// Arrival distribution trait
///
/// Implementations produce `n` arrival timestamps inside `window` using the
/// caller's random source. Random numbers are consumed sequentially, so the
/// same seed always yields the same timestamps.
pub trait ArrivalDistribution {
    /// Generate arrival timestamps
    ///
    /// Returns one timestamp per arrival, in generation order. The number of
    /// timestamps is `n` for every shape except Bimodal (see
    /// [`bimodal::component_size`]).
    fn arrival_times(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
        window: &TimeWindow,
    ) -> Result<Vec<f64>, TimelineError>;
}

/// Distribution selector, parsed from its exact lowercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Poisson,
    Uniform,
    Gamma,
    Normal,
    Bimodal,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 5] = [
        DistributionKind::Poisson,
        DistributionKind::Uniform,
        DistributionKind::Gamma,
        DistributionKind::Normal,
        DistributionKind::Bimodal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::Poisson => "poisson",
            DistributionKind::Uniform => "uniform",
            DistributionKind::Gamma => "gamma",
            DistributionKind::Normal => "normal",
            DistributionKind::Bimodal => "bimodal",
        }
    }
}

impl FromStr for DistributionKind {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TimelineError::InvalidDistribution(s.to_string()))
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distribution with its shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DistributionSpec {
    /// `scale` is the mean gap between arrivals (1 / rate)
    Poisson { scale: f64, t0: f64 },
    Uniform,
    Gamma { shape: f64 },
    Normal { mean: f64, stddev: f64 },
    Bimodal { mean1: f64, mean2: f64, stddev: f64 },
}

impl DistributionSpec {
    /// Spec with the default shape parameters for `kind`
    pub fn with_defaults(kind: DistributionKind) -> Self {
        match kind {
            DistributionKind::Poisson => DistributionSpec::Poisson {
                scale: poisson::DEFAULT_SCALE,
                t0: 0.0,
            },
            DistributionKind::Uniform => DistributionSpec::Uniform,
            DistributionKind::Gamma => DistributionSpec::Gamma {
                shape: gamma::DEFAULT_SHAPE,
            },
            DistributionKind::Normal => DistributionSpec::Normal {
                mean: normal::DEFAULT_MEAN,
                stddev: normal::DEFAULT_STDDEV,
            },
            DistributionKind::Bimodal => DistributionSpec::Bimodal {
                mean1: bimodal::DEFAULT_MEAN1,
                mean2: bimodal::DEFAULT_MEAN2,
                stddev: bimodal::DEFAULT_STDDEV,
            },
        }
    }

    pub fn kind(&self) -> DistributionKind {
        match self {
            DistributionSpec::Poisson { .. } => DistributionKind::Poisson,
            DistributionSpec::Uniform => DistributionKind::Uniform,
            DistributionSpec::Gamma { .. } => DistributionKind::Gamma,
            DistributionSpec::Normal { .. } => DistributionKind::Normal,
            DistributionSpec::Bimodal { .. } => DistributionKind::Bimodal,
        }
    }

    /// Build the sampler for this spec, validating its parameters
    pub fn sampler(&self) -> Result<Box<dyn ArrivalDistribution>, TimelineError> {
        Ok(match *self {
            DistributionSpec::Poisson { scale, t0 } => {
                Box::new(poisson::PoissonArrivals::new(scale, t0)?)
            }
            DistributionSpec::Uniform => Box::new(uniform::UniformArrivals),
            DistributionSpec::Gamma { shape } => Box::new(gamma::GammaArrivals::new(shape)?),
            DistributionSpec::Normal { mean, stddev } => {
                Box::new(normal::NormalArrivals::new(mean, stddev)?)
            }
            DistributionSpec::Bimodal {
                mean1,
                mean2,
                stddev,
            } => Box::new(bimodal::BimodalArrivals::new(mean1, mean2, stddev)?),
        })
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionSpec::Poisson { scale, t0 } => {
                write!(f, "poisson(scale={}, t0={})", scale, t0)
            }
            DistributionSpec::Uniform => write!(f, "uniform"),
            DistributionSpec::Gamma { shape } => write!(f, "gamma(shape={})", shape),
            DistributionSpec::Normal { mean, stddev } => {
                write!(f, "normal(mean={}, stddev={})", mean, stddev)
            }
            DistributionSpec::Bimodal {
                mean1,
                mean2,
                stddev,
            } => write!(f, "bimodal(mean1={}, mean2={}, stddev={})", mean1, mean2, stddev),
        }
    }
}

/// Time window `[start, end]` in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    /// Create a window, rejecting empty, inverted, or non-finite bounds
    pub fn new(start: f64, end: f64) -> Result<Self, TimelineError> {
        if !start.is_finite() || !end.is_finite() || end <= start {
            return Err(TimelineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window beginning at `start` and lasting `duration` seconds
    pub fn from_duration(start: f64, duration: f64) -> Result<Self, TimelineError> {
        Self::new(start, start + duration)
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 60.0,
        }
    }
}

pub(crate) fn max_of(times: &[f64]) -> f64 {
    times.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn min_of(times: &[f64]) -> f64 {
    times.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Subtract the minimum so the earliest sample sits at zero
pub(crate) fn shift_to_zero(times: &mut [f64]) {
    let min = min_of(times);
    for t in times.iter_mut() {
        *t -= min;
    }
}

/// Scale non-negative samples so the maximum maps to `window.end`
///
/// When every sample is zero there is nothing to stretch; all arrivals are
/// placed at `window.end`.
pub(crate) fn rescale_to_window(times: &mut [f64], window: &TimeWindow) {
    let max = max_of(times);
    if max > 0.0 {
        let factor = window.span() / max;
        for t in times.iter_mut() {
            *t = *t * factor + window.start;
        }
    } else {
        for t in times.iter_mut() {
            *t = window.end;
        }
    }
}

/// Reject non-finite or non-positive shape parameters
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, TimelineError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TimelineError::parameter(
            name,
            format!("must be a positive finite number, got {}", value),
        ));
    }
    Ok(value)
}

/// Reject non-finite or negative parameters
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<f64, TimelineError> {
    if !value.is_finite() || value < 0.0 {
        return Err(TimelineError::parameter(
            name,
            format!("must be a non-negative finite number, got {}", value),
        ));
    }
    Ok(value)
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, TimelineError> {
    if !value.is_finite() {
        return Err(TimelineError::parameter(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(value)
}
