//! Configuration validation

use super::*;
use crate::distribution::bimodal::component_size;
use crate::generator::MAX_INSTANCES;
use anyhow::{Context, Result};
use tracing::warn;

/// Validate complete configuration
pub fn validate_config(config: &TimelineConfig) -> Result<()> {
    validate_window(config)?;
    validate_instances(config)?;
    validate_distribution(config)?;

    Ok(())
}

/// Validate duration and window start
fn validate_window(config: &TimelineConfig) -> Result<()> {
    if !config.duration.is_finite() || config.duration <= 0.0 {
        anyhow::bail!("duration must be a positive number of seconds, got {}", config.duration);
    }

    if !config.start.is_finite() {
        anyhow::bail!("start must be finite, got {}", config.start);
    }

    config.window().context("Invalid time window")?;

    Ok(())
}

/// Validate instance count
fn validate_instances(config: &TimelineConfig) -> Result<()> {
    if config.instances == 0 || config.instances > MAX_INSTANCES {
        anyhow::bail!(
            "instances must be between 1 and {}, got {}",
            MAX_INSTANCES,
            config.instances
        );
    }

    if config.distribution == DistributionKind::Bimodal {
        let produced = 2 * component_size(config.instances);
        if produced == 0 {
            anyhow::bail!("bimodal needs at least 2 instances, got {}", config.instances);
        }
        if produced != config.instances {
            warn!(
                requested = config.instances,
                produced,
                "bimodal splits instances into two equal bursts; arrival count differs from request"
            );
        }
    }

    Ok(())
}

/// Validate shape parameters of the selected distribution
fn validate_distribution(config: &TimelineConfig) -> Result<()> {
    let spec = config.spec();
    spec.sampler()
        .with_context(|| format!("Invalid {} parameters", spec.kind()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        for kind in DistributionKind::ALL {
            assert!(validate_config(&TimelineConfig::new(kind, 60.0, 10)).is_ok(), "{}", kind);
        }
    }

    #[test]
    fn test_invalid_duration() {
        for duration in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let config = TimelineConfig::new(DistributionKind::Uniform, duration, 10);
            assert!(validate_config(&config).is_err(), "duration {} accepted", duration);
        }
    }

    #[test]
    fn test_invalid_start() {
        let mut config = TimelineConfig::new(DistributionKind::Uniform, 60.0, 10);
        config.start = f64::NEG_INFINITY;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_instances() {
        let config = TimelineConfig::new(DistributionKind::Poisson, 60.0, 0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_instances_upper_bound() {
        for kind in DistributionKind::ALL {
            let config = TimelineConfig::new(kind, 60.0, usize::MAX);
            let err = validate_config(&config).unwrap_err();
            assert!(err.to_string().contains("instances must be between"), "{}", kind);
        }
        assert!(validate_config(&TimelineConfig::new(DistributionKind::Uniform, 60.0, MAX_INSTANCES)).is_ok());
        assert!(validate_config(&TimelineConfig::new(DistributionKind::Uniform, 60.0, MAX_INSTANCES + 1)).is_err());
    }

    #[test]
    fn test_bimodal_instances() {
        assert!(validate_config(&TimelineConfig::new(DistributionKind::Bimodal, 60.0, 1)).is_err());
        // Odd counts are accepted, only warned about
        assert!(validate_config(&TimelineConfig::new(DistributionKind::Bimodal, 60.0, 3)).is_ok());
        // A single instance is fine for the other shapes
        assert!(validate_config(&TimelineConfig::new(DistributionKind::Normal, 60.0, 1)).is_ok());
    }

    #[test]
    fn test_invalid_shape_parameters() {
        let mut config = TimelineConfig::new(DistributionKind::Gamma, 60.0, 10);
        config.gamma.shape = 0.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid gamma parameters"));

        // Parameters of unselected distributions are not checked
        let mut config = TimelineConfig::new(DistributionKind::Uniform, 60.0, 10);
        config.poisson.scale = -1.0;
        assert!(validate_config(&config).is_ok());
    }
}
