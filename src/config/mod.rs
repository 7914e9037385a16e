//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! Settings are layered: built-in defaults, then the TOML file, then CLI flags.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::distribution::{
    bimodal, gamma, normal, poisson, DistributionKind, DistributionSpec, TimeWindow,
};
use crate::generator::DEFAULT_SEED;
use crate::output::OutputFormat;
use serde::Deserialize;
use std::fmt;

/// Fully resolved run configuration
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    pub distribution: DistributionKind,
    /// Window length in seconds
    pub duration: f64,
    /// Number of arrivals requested
    pub instances: usize,
    /// Window start in seconds
    pub start: f64,
    pub seed: u64,
    pub format: OutputFormat,
    /// Sort arrivals before printing
    pub sorted: bool,
    /// Print a timeline summary to stderr
    pub summary: bool,
    pub poisson: PoissonParams,
    pub gamma: GammaParams,
    pub normal: NormalParams,
    pub bimodal: BimodalParams,
}

impl TimelineConfig {
    /// Configuration with default settings for the given run
    pub fn new(distribution: DistributionKind, duration: f64, instances: usize) -> Self {
        Self {
            distribution,
            duration,
            instances,
            start: 0.0,
            seed: DEFAULT_SEED,
            format: OutputFormat::default(),
            sorted: false,
            summary: false,
            poisson: PoissonParams::default(),
            gamma: GammaParams::default(),
            normal: NormalParams::default(),
            bimodal: BimodalParams::default(),
        }
    }

    /// Time window `[start, start + duration]`
    pub fn window(&self) -> Result<TimeWindow, crate::error::TimelineError> {
        TimeWindow::from_duration(self.start, self.duration)
    }

    /// Distribution spec for the selected kind and its shape parameters
    pub fn spec(&self) -> DistributionSpec {
        match self.distribution {
            DistributionKind::Poisson => DistributionSpec::Poisson {
                scale: self.poisson.scale,
                t0: self.poisson.t0,
            },
            DistributionKind::Uniform => DistributionSpec::Uniform,
            DistributionKind::Gamma => DistributionSpec::Gamma {
                shape: self.gamma.shape,
            },
            DistributionKind::Normal => DistributionSpec::Normal {
                mean: self.normal.mean,
                stddev: self.normal.stddev,
            },
            DistributionKind::Bimodal => DistributionSpec::Bimodal {
                mean1: self.bimodal.mean1,
                mean2: self.bimodal.mean2,
                stddev: self.bimodal.stddev,
            },
        }
    }
}

impl fmt::Display for TimelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} over [{}, {}] seed={} format={}",
            self.spec(),
            self.instances,
            self.start,
            self.start + self.duration,
            self.seed,
            self.format
        )
    }
}

/// Poisson shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoissonParams {
    /// Mean gap between arrivals (1 / rate)
    pub scale: f64,
    /// Origin of the accumulated arrival times
    pub t0: f64,
}

impl Default for PoissonParams {
    fn default() -> Self {
        Self {
            scale: poisson::DEFAULT_SCALE,
            t0: 0.0,
        }
    }
}

/// Gamma shape parameters (unit scale)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GammaParams {
    pub shape: f64,
}

impl Default for GammaParams {
    fn default() -> Self {
        Self {
            shape: gamma::DEFAULT_SHAPE,
        }
    }
}

/// Normal shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalParams {
    pub mean: f64,
    pub stddev: f64,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self {
            mean: normal::DEFAULT_MEAN,
            stddev: normal::DEFAULT_STDDEV,
        }
    }
}

/// Bimodal shape parameters (shared stddev)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BimodalParams {
    pub mean1: f64,
    pub mean2: f64,
    pub stddev: f64,
}

impl Default for BimodalParams {
    fn default() -> Self {
        Self {
            mean1: bimodal::DEFAULT_MEAN1,
            mean2: bimodal::DEFAULT_MEAN2,
            stddev: bimodal::DEFAULT_STDDEV,
        }
    }
}

/// Settings read from a TOML file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub seed: Option<u64>,
    pub start: Option<f64>,
    pub format: Option<OutputFormat>,
    pub sorted: Option<bool>,
    pub summary: Option<bool>,
    pub poisson: PoissonParams,
    pub gamma: GammaParams,
    pub normal: NormalParams,
    pub bimodal: BimodalParams,
}
