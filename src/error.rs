//! Error types for trefoil.
//!
//! Configuration is validated once, up front. Every operation after
//! construction is total, so this is the only error surface in the crate.

use std::fmt;

/// Errors raised for invalid sampler or emitter configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Sampling density was zero, negative, or not finite.
    NonPositiveDensity(f32),
    /// Scale multiplier was zero, negative, or not finite.
    NonPositiveScale(f32),
    /// A configured range has min greater than max.
    InvertedRange {
        /// Which range was inverted ("angle", "size", ...).
        name: &'static str,
        min: f32,
        max: f32,
    },
    /// Burst spawn probability outside the `[0, 1]` interval.
    ProbabilityOutOfRange(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDensity(d) => {
                write!(f, "Sampling density must be a positive finite step, got {}", d)
            }
            ConfigError::NonPositiveScale(s) => {
                write!(f, "Scale must be a positive finite multiplier, got {}", s)
            }
            ConfigError::InvertedRange { name, min, max } => {
                write!(f, "Inverted {} range: min {} exceeds max {}", name, min, max)
            }
            ConfigError::ProbabilityOutOfRange(p) => {
                write!(f, "Burst probability must lie in [0, 1], got {}", p)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
