//! Error types for arrival-time generation

use thiserror::Error;

/// Errors raised while building or sampling an arrival timeline
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimelineError {
    /// Distribution name did not match any known arrival distribution
    #[error("unknown distribution: {0} (expected one of: poisson, uniform, gamma, normal, bimodal)")]
    InvalidDistribution(String),

    /// A shape parameter is out of range
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Time window is empty, inverted, or not finite
    #[error("invalid time window [{start}, {end}]: end must be greater than start")]
    InvalidWindow { start: f64, end: f64 },

    /// Instance count is zero or above the supported maximum
    #[error("instance count must be between 1 and {max}, got {count}")]
    InvalidCount { count: usize, max: usize },
}

impl TimelineError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
