//! Particle pool simulation.
//!
//! A [`ParticleSystem`] owns a transient pool of particles and advances it
//! one frame at a time. The host drives a fixed serial cycle:
//!
//! ```
//! use trefoil::{EmitterConfig, ParticleSystem};
//!
//! let mut system = ParticleSystem::new(EmitterConfig::fountain().seed(1)).unwrap();
//! for _ in 0..60 {
//!     system.spawn();
//!     system.step();
//!     system.for_each_live(|view| {
//!         // hand view.position / view.size / view.color_stop to the renderer
//!         let _ = view;
//!     });
//! }
//! assert!(system.live_count() > 0);
//! ```
//!
//! The pool is unbounded: nothing caps its size, so sustained spawn rates and
//! long lifetimes trade directly against memory. Tune the
//! [`EmitterConfig`] knobs (`burst_probability`, `steady_rate`, `lifetime`)
//! to budget it.

use crate::emitter::EmitterConfig;
use crate::error::ConfigError;
use crate::particle::{Particle, ParticleView};
use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulates a pool of short-lived particles under a probabilistic spawn
/// schedule and a gravity/velocity model.
///
/// Construction validates the [`EmitterConfig`]; after that every operation
/// is total. All state lives in the system itself: no globals, nothing shared
/// between frames beyond this struct.
pub struct ParticleSystem {
    config: EmitterConfig,
    particles: Vec<Particle>,
    viewport: Vec2,
    rng: SmallRng,
}

impl ParticleSystem {
    /// Create a system from a validated emitter configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration's [`ConfigError`] if any range is inverted
    /// or the burst probability leaves `[0, 1]`.
    pub fn new(config: EmitterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        // Entropy-seeded unless the config pins a seed for reproducibility.
        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });

        Ok(Self {
            config,
            particles: Vec::new(),
            viewport: Vec2::ONE,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Set the viewport the fractional spawn origin scales to.
    ///
    /// Call whenever the host canvas resizes. Defaults to a unit viewport,
    /// which leaves fractional origins untouched.
    pub fn set_viewport(&mut self, size: Vec2) {
        self.viewport = size;
    }

    /// The emitter configuration this system was built with.
    #[inline]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Number of particles currently resident in the pool.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// Run one spawn round: a Bernoulli burst trial plus the unconditional
    /// steady-state batch.
    ///
    /// Grows the pool by `steady_rate`, plus one more when the burst trial
    /// succeeds. Each new particle draws its direction and size uniformly
    /// from the configured ranges and starts at the fractional origin scaled
    /// to the current viewport.
    pub fn spawn(&mut self) {
        if self.rng.gen::<f32>() < self.config.burst_probability {
            self.emit_one();
        }
        for _ in 0..self.config.steady_rate {
            self.emit_one();
        }
    }

    /// Advance every live particle one tick, then sweep out the dead.
    ///
    /// Integration runs over the whole pool first: gravity into velocity,
    /// velocity into position, age up by one. Pruning happens afterwards as
    /// its own pass, so removal never skips a neighbor mid-iteration. A
    /// particle that reaches its lifetime stays visible for that one frame
    /// (its color stop reads 1.0) and is swept by the next step's prune.
    pub fn step(&mut self) {
        let gravity = self.config.gravity;
        for p in &mut self.particles {
            p.velocity.y += gravity;
            p.position += p.velocity;
            p.age += 1;
        }
        self.particles.retain(|p| p.age <= p.lifetime);
    }

    /// Visit a render snapshot of every live particle, in pool order.
    ///
    /// Exposes only the render-relevant fields ([`ParticleView`]), keeping
    /// hosts decoupled from the pool's storage.
    pub fn for_each_live(&self, mut visitor: impl FnMut(ParticleView)) {
        for p in &self.particles {
            visitor(p.view());
        }
    }

    fn emit_one(&mut self) {
        let angle = self
            .sample_range(self.config.angle_min, self.config.angle_max)
            .to_radians();
        let size = self.sample_range(self.config.size_min, self.config.size_max);
        let velocity = Vec3::new(angle.cos(), angle.sin(), 0.0) * self.config.speed;
        let origin = self.config.origin * self.viewport;

        self.particles.push(Particle {
            position: origin.extend(0.0),
            velocity,
            age: 0,
            lifetime: self.config.lifetime,
            size,
        });
    }

    /// Uniform draw from `[min, max)`; collapsed ranges return `min`.
    fn sample_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(config: EmitterConfig) -> ParticleSystem {
        ParticleSystem::new(config.seed(9)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EmitterConfig::new().angle(180.0..90.0);
        assert!(ParticleSystem::new(config).is_err());
    }

    #[test]
    fn test_steady_spawn_is_exact_without_burst() {
        let mut sys = system(EmitterConfig::new().burst_probability(0.0).steady_rate(10));
        sys.spawn();
        assert_eq!(sys.live_count(), 10);
        sys.spawn();
        assert_eq!(sys.live_count(), 20);
    }

    #[test]
    fn test_burst_adds_at_most_one() {
        let mut sys = system(EmitterConfig::new().burst_probability(0.5).steady_rate(3));
        sys.spawn();
        assert!(sys.live_count() == 3 || sys.live_count() == 4);

        // Probability 1 always lands the burst particle.
        let mut sys = system(EmitterConfig::new().burst_probability(1.0).steady_rate(3));
        sys.spawn();
        assert_eq!(sys.live_count(), 4);
    }

    #[test]
    fn test_step_integrates_gravity_then_velocity() {
        // Pin the angle so velocity starts as (speed, 0, 0) exactly.
        let mut sys = system(
            EmitterConfig::new()
                .burst_probability(0.0)
                .steady_rate(1)
                .angle(0.0..0.0)
                .speed(4.0)
                .gravity(0.1)
                .origin(Vec2::ZERO),
        );
        sys.spawn();
        sys.step();

        let mut positions = Vec::new();
        sys.for_each_live(|v| positions.push(v.position));
        assert_eq!(positions.len(), 1);
        // Gravity lands in velocity before velocity lands in position.
        assert!((positions[0] - Vec3::new(4.0, 0.1, 0.0)).length() < 1e-5);

        sys.step();
        let mut positions = Vec::new();
        sys.for_each_live(|v| positions.push(v.position));
        assert!((positions[0] - Vec3::new(8.0, 0.3, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_expired_particle_visible_one_frame_then_swept() {
        let mut sys = system(
            EmitterConfig::new()
                .burst_probability(0.0)
                .steady_rate(1)
                .lifetime(300),
        );
        sys.spawn();

        for _ in 0..300 {
            sys.step();
        }
        // Age now equals lifetime: still resident, color stop saturated.
        assert_eq!(sys.live_count(), 1);
        let mut stops = Vec::new();
        sys.for_each_live(|v| stops.push(v.color_stop));
        assert_eq!(stops, vec![1.0]);

        sys.step();
        assert_eq!(sys.live_count(), 0);
    }

    #[test]
    fn test_prune_never_leaves_overaged_particles() {
        let mut sys = system(
            EmitterConfig::new()
                .burst_probability(0.7)
                .steady_rate(2)
                .lifetime(5),
        );
        for _ in 0..40 {
            sys.spawn();
            sys.step();
            assert!(sys.particles.iter().all(|p| p.age <= p.lifetime));
        }
        // Pool settles: at most (steady + burst) particles per surviving age.
        assert!(sys.live_count() <= 3 * 6);
    }

    #[test]
    fn test_origin_scales_to_viewport() {
        let mut sys = system(
            EmitterConfig::new()
                .burst_probability(0.0)
                .steady_rate(1)
                .origin(Vec2::new(0.5, 0.9)),
        );
        sys.set_viewport(Vec2::new(200.0, 100.0));
        sys.spawn();

        let mut positions = Vec::new();
        sys.for_each_live(|v| positions.push(v.position));
        assert!((positions[0] - Vec3::new(100.0, 90.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let run = || {
            let mut sys = ParticleSystem::new(EmitterConfig::sparks().seed(1234)).unwrap();
            for _ in 0..30 {
                sys.spawn();
                sys.step();
            }
            let mut views = Vec::new();
            sys.for_each_live(|v| views.push(v));
            views
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_spawned_size_stays_in_range() {
        let mut sys = system(EmitterConfig::new().steady_rate(50).size(2.0..6.0));
        sys.spawn();
        sys.for_each_live(|v| assert!((2.0..6.0).contains(&v.size)));
    }
}
