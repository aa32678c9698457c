//! Particle entity and its render snapshot.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One live particle in a [`ParticleSystem`](crate::ParticleSystem) pool.
///
/// Created by `spawn`, mutated by `step`, and dropped from the pool once its
/// age passes its lifetime. Velocity integrates gravity each step; position
/// integrates velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Current position.
    pub position: Vec3,
    /// Per-step displacement.
    pub velocity: Vec3,
    /// Steps survived so far, starting at 0.
    pub age: u32,
    /// Maximum age, fixed at spawn.
    pub lifetime: u32,
    /// Visual size, drawn from the emitter's size range at spawn.
    pub size: f32,
}

impl Particle {
    /// Interpolation weight in `[0, 1]` for blending between the emitter's
    /// two color endpoints: age over lifetime, clamped.
    #[inline]
    pub fn color_stop(&self) -> f32 {
        if self.lifetime == 0 {
            return 1.0;
        }
        (self.age as f32 / self.lifetime as f32).clamp(0.0, 1.0)
    }

    /// Whether this particle has reached its lifetime.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Render-relevant snapshot of this particle.
    #[inline]
    pub fn view(&self) -> ParticleView {
        ParticleView {
            position: self.position,
            size: self.size,
            color_stop: self.color_stop(),
        }
    }
}

/// Render-relevant fields of a live particle.
///
/// `#[repr(C)]` and [`Pod`], so a host can collect views into a `Vec` and
/// `bytemuck::cast_slice` them straight into a vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleView {
    /// Particle position.
    pub position: Vec3,
    /// Visual size.
    pub size: f32,
    /// Color interpolation weight in `[0, 1]`.
    pub color_stop: f32,
}
