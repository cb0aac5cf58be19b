//! Field configuration and validation.

use plume_core::ConfigError;

/// Default peak intensity `A`.
pub const DEFAULT_AMPLITUDE: f64 = 100.0;
/// Default spread `σ`.
pub const DEFAULT_SPREAD: f64 = 10.0;
/// Default half-width of the square the source is drawn from.
pub const DEFAULT_SOURCE_BOUND: f64 = 20.0;

/// Configuration for a seeded [`GaussianField`](crate::GaussianField).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Seed for the source-placement stream.
    pub seed: u64,
    /// Peak intensity at the source. Default: 100.
    pub amplitude: f64,
    /// Standard deviation of the bump. Default: 10.
    pub spread: f64,
    /// The source is drawn uniformly from `[-source_bound, source_bound)²`.
    /// Default: 20.
    pub source_bound: f64,
}

impl FieldConfig {
    /// Default shape parameters with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check all parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_shape(self.amplitude, self.spread)?;
        if !self.source_bound.is_finite() || self.source_bound <= 0.0 {
            return Err(ConfigError::InvalidBound {
                value: self.source_bound,
            });
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            amplitude: DEFAULT_AMPLITUDE,
            spread: DEFAULT_SPREAD,
            source_bound: DEFAULT_SOURCE_BOUND,
        }
    }
}

pub(crate) fn validate_shape(amplitude: f64, spread: f64) -> Result<(), ConfigError> {
    if !amplitude.is_finite() || amplitude < 0.0 {
        return Err(ConfigError::InvalidAmplitude { value: amplitude });
    }
    if !spread.is_finite() || spread <= 0.0 {
        return Err(ConfigError::InvalidSpread { value: spread });
    }
    Ok(())
}
