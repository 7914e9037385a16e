//! timeline - synthetic arrival times for scheduler load tests
//!
//! Generates a reproducible schedule of job arrivals for driving load tests
//! against a job scheduler. A load generator submits one job at each printed
//! timestamp.
//!
//! # Architecture
//!
//! - **Distributions**: Poisson, uniform, gamma, normal, and bimodal arrival shapes
//! - **Generator**: Explicitly seeded xoshiro256++ source, one pass per run
//! - **Configuration**: CLI flags layered over an optional TOML file
//! - **Output**: Comma-separated line, one-per-line, or JSON on stdout
//! - **Stats**: Optional gap percentiles and peak rate summary on stderr

pub mod config;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod output;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use config::TimelineConfig;
pub use distribution::{DistributionKind, DistributionSpec, TimeWindow};
pub use error::TimelineError;
pub use generator::{ArrivalTimeGenerator, ArrivalTimeSequence};

/// Result type used throughout timeline
pub type Result<T> = anyhow::Result<T>;
