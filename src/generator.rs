//! Seeded arrival-time generator
//!
//! [`ArrivalTimeGenerator`] owns the random source and turns a
//! [`DistributionSpec`], an instance count, and a [`TimeWindow`] into an
//! [`ArrivalTimeSequence`]. The seed is passed in explicitly so that a given
//! (distribution, parameters, count, window, seed) always produces the same
//! timeline.
//!
//! # Example
//!
//! ```
//! use timeline::distribution::{DistributionKind, DistributionSpec, TimeWindow};
//! use timeline::generator::ArrivalTimeGenerator;
//!
//! let spec = DistributionSpec::with_defaults(DistributionKind::Poisson);
//! let window = TimeWindow::new(0.0, 10.0).unwrap();
//!
//! let mut generator = ArrivalTimeGenerator::new();
//! let timeline = generator.generate(&spec, 5, window).unwrap();
//! assert_eq!(timeline.len(), 5);
//! ```

use crate::distribution::{DistributionSpec, TimeWindow};
use crate::error::TimelineError;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 123_456_789;

/// Largest instance count accepted in one run
pub const MAX_INSTANCES: usize = 100_000_000;

/// Arrival timestamps produced by one generation call
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalTimeSequence {
    pub spec: DistributionSpec,
    pub window: TimeWindow,
    pub times: Vec<f64>,
}

impl ArrivalTimeSequence {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sort arrivals in ascending order
    pub fn sort(&mut self) {
        self.times.sort_by(f64::total_cmp);
    }

    /// Arrivals in ascending order, leaving `self` untouched
    pub fn sorted_times(&self) -> Vec<f64> {
        let mut times = self.times.clone();
        times.sort_by(f64::total_cmp);
        times
    }
}

/// Deterministic arrival-time generator
pub struct ArrivalTimeGenerator {
    seed: u64,
    rng: Xoshiro256PlusPlus,
}

impl ArrivalTimeGenerator {
    /// Create a generator seeded with [`DEFAULT_SEED`]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `n` arrivals for `spec` inside `window`
    ///
    /// Random numbers are drawn from the generator's single stream, so a
    /// second call on the same generator continues where the first stopped.
    pub fn generate(
        &mut self,
        spec: &DistributionSpec,
        n: usize,
        window: TimeWindow,
    ) -> Result<ArrivalTimeSequence, TimelineError> {
        if n == 0 || n > MAX_INSTANCES {
            return Err(TimelineError::InvalidCount {
                count: n,
                max: MAX_INSTANCES,
            });
        }
        // Re-check in case the window was built by hand
        let window = TimeWindow::new(window.start, window.end)?;

        let sampler = spec.sampler()?;
        let times = sampler.arrival_times(n, &mut self.rng, &window)?;

        debug!(
            distribution = %spec,
            requested = n,
            generated = times.len(),
            start = window.start,
            end = window.end,
            seed = self.seed,
            "generated arrival timeline"
        );

        Ok(ArrivalTimeSequence {
            spec: *spec,
            window,
            times,
        })
    }
}

impl Default for ArrivalTimeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
