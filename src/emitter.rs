//! Emitter configuration for particle spawning.
//!
//! An [`EmitterConfig`] describes everything a
//! [`ParticleSystem`](crate::ParticleSystem) needs to create particles: where
//! they appear, how fast and in which directions they leave, how long they
//! live, and how their color evolves. The host builds one up front and hands
//! it to the system; changing parameters later means building a new system,
//! never mutating a running one mid-step.
//!
//! # Two spawn mechanisms
//!
//! Each `spawn()` call composes two independent mechanisms:
//!
//! | Mechanism | Knob | Particles per call |
//! |-----------|------|--------------------|
//! | Burst | `burst_probability` | 0 or 1 |
//! | Steady-state | `steady_rate` | exactly `steady_rate` |
//!
//! Disable either half by setting its knob to zero.
//!
//! # Example
//!
//! ```
//! use trefoil::{EmitterConfig, Vec2, Vec3};
//!
//! let config = EmitterConfig::new()
//!     .gravity(0.1)
//!     .lifetime(300)
//!     .angle(250.0..290.0)
//!     .size(2.0..6.0)
//!     .speed(6.0)
//!     .burst_probability(0.3)
//!     .steady_rate(2)
//!     .origin(Vec2::new(0.5, 0.9))
//!     .color_over_life(Vec3::ONE, Vec3::new(0.2, 0.4, 1.0));
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;
use glam::{Vec2, Vec3};
use std::ops::Range;

/// Static configuration for particle spawning.
///
/// Build with [`new`](Self::new) and the chained setters, or start from a
/// preset ([`fountain`](Self::fountain), [`sparks`](Self::sparks)).
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Downward acceleration added to velocity.y every step.
    pub gravity: f32,
    /// Maximum particle age in steps.
    pub lifetime: u32,
    /// Spawn direction range in degrees (0 = +x, 90 = +y / screen-down).
    pub angle_min: f32,
    pub angle_max: f32,
    /// Visual size range, sampled uniformly per particle.
    pub size_min: f32,
    pub size_max: f32,
    /// Initial speed along the spawn direction.
    pub speed: f32,
    /// Per-call probability of one extra burst particle (0 disables).
    pub burst_probability: f32,
    /// Particles created unconditionally on every `spawn()` call.
    pub steady_rate: u32,
    /// Spawn position as a fraction of the viewport (0.5, 0.5 = center).
    pub origin: Vec2,
    /// Color at age 0.
    pub color_start: Vec3,
    /// Color at end of life.
    pub color_end: Vec3,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl EmitterConfig {
    /// Create a config with mild, omnidirectional defaults.
    pub fn new() -> Self {
        Self {
            gravity: 0.1,
            lifetime: 300,
            angle_min: 0.0,
            angle_max: 360.0,
            size_min: 1.0,
            size_max: 4.0,
            speed: 4.0,
            burst_probability: 0.5,
            steady_rate: 1,
            origin: Vec2::new(0.5, 0.5),
            color_start: Vec3::ONE,
            color_end: Vec3::ONE,
            seed: None,
        }
    }

    // =========================================================================
    // PRESETS
    // =========================================================================

    /// Fountain preset: particles jet upward from the bottom of the screen,
    /// arc over under gravity, and cool from white to blue.
    pub fn fountain() -> Self {
        Self {
            gravity: 0.1,
            lifetime: 300,
            angle_min: 250.0,
            angle_max: 290.0,
            size_min: 2.0,
            size_max: 6.0,
            speed: 6.0,
            burst_probability: 0.3,
            steady_rate: 2,
            origin: Vec2::new(0.5, 0.9),
            color_start: Vec3::ONE,
            color_end: Vec3::new(0.2, 0.4, 1.0),
            ..Self::new()
        }
    }

    /// Sparks preset: short-lived omnidirectional spray from the center,
    /// fading white-hot to orange.
    pub fn sparks() -> Self {
        Self {
            gravity: 0.05,
            lifetime: 120,
            angle_min: 0.0,
            angle_max: 360.0,
            size_min: 1.0,
            size_max: 3.0,
            speed: 3.0,
            burst_probability: 1.0,
            steady_rate: 5,
            origin: Vec2::new(0.5, 0.5),
            color_start: Vec3::new(1.0, 1.0, 1.0),
            color_end: Vec3::new(1.0, 0.6, 0.1),
            ..Self::new()
        }
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    /// Set the gravity scalar added to velocity.y every step.
    pub fn gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the particle lifetime in steps.
    pub fn lifetime(mut self, steps: u32) -> Self {
        self.lifetime = steps;
        self
    }

    /// Set the spawn direction range in degrees.
    ///
    /// Angles follow screen axes: 0 points along +x, 90 along +y
    /// (downward). An equal min and max pins every spawn to one direction.
    pub fn angle(mut self, degrees: Range<f32>) -> Self {
        self.angle_min = degrees.start;
        self.angle_max = degrees.end;
        self
    }

    /// Set the visual size range sampled per particle.
    pub fn size(mut self, range: Range<f32>) -> Self {
        self.size_min = range.start;
        self.size_max = range.end;
        self
    }

    /// Set the initial speed along the spawn direction.
    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the per-call probability of one extra burst particle.
    ///
    /// Must lie in `[0, 1]`; 0 disables burst spawning entirely.
    pub fn burst_probability(mut self, probability: f32) -> Self {
        self.burst_probability = probability;
        self
    }

    /// Set how many particles every `spawn()` call creates unconditionally.
    pub fn steady_rate(mut self, count: u32) -> Self {
        self.steady_rate = count;
        self
    }

    /// Set the spawn origin as a fraction of the viewport.
    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Set the color endpoints particles blend between over their lifetime.
    pub fn color_over_life(mut self, start: Vec3, end: Vec3) -> Self {
        self.color_start = start;
        self.color_end = end;
        self
    }

    /// Pin the RNG seed so burst outcomes and attribute draws reproduce
    /// exactly across runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Color at the given interpolation weight, blending the configured
    /// endpoints. Pairs with
    /// [`ParticleView::color_stop`](crate::ParticleView::color_stop).
    #[inline]
    pub fn color_at(&self, stop: f32) -> Vec3 {
        self.color_start.lerp(self.color_end, stop.clamp(0.0, 1.0))
    }

    /// Check the configuration for inverted ranges and out-of-range
    /// probabilities.
    ///
    /// [`ParticleSystem::new`](crate::ParticleSystem::new) calls this for
    /// you; it is public so hosts can validate slider input early.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.angle_min > self.angle_max {
            return Err(ConfigError::InvertedRange {
                name: "angle",
                min: self.angle_min,
                max: self.angle_max,
            });
        }
        if self.size_min > self.size_max {
            return Err(ConfigError::InvertedRange {
                name: "size",
                min: self.size_min,
                max: self.size_max,
            });
        }
        if !(0.0..=1.0).contains(&self.burst_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.burst_probability));
        }
        Ok(())
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new()
    }
}
