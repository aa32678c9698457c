//! # Trefoil
//!
//! Parametric surface point clouds and particle emitters for creative coding.
//!
//! Trefoil is the headless core of an animated sketch: it produces geometry
//! and leaves every pixel to you. A host (a canvas app, a wgpu view, a
//! terminal plotter) calls into it once per animation frame with its current
//! slider values and draws whatever comes back.
//!
//! ## Quick Start
//!
//! ```
//! use trefoil::prelude::*;
//!
//! // A point mesh of the trefoil knot, sized to the viewport.
//! let sampler = SurfaceSampler::trefoil();
//! let points: Vec<Vec3> = sampler.sample(0.1, 72.0).unwrap().collect();
//!
//! // A particle overlay, advanced one frame.
//! let mut particles = ParticleSystem::new(EmitterConfig::fountain())?;
//! particles.spawn();
//! particles.step();
//! particles.for_each_live(|view| {
//!     let _color = particles.config().color_at(view.color_stop);
//!     // draw a dot of `view.size` at `view.position`
//! });
//! # assert!(!points.is_empty());
//! # Ok::<(), trefoil::ConfigError>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Surface sampling
//!
//! A [`SurfaceSampler`] wraps a closed form `f(u, v) -> Vec3` and enumerates
//! it over a fixed `[-PI, PI)` grid at a caller-chosen step ("density") and
//! scale. Sampling is pure: same inputs, same points, every time. The stream
//! is lazy, so hosts can draw progressively without buffering a frame's
//! worth of points.
//!
//! ### Particle emission
//!
//! A [`ParticleSystem`] owns a pool of short-lived particles configured by an
//! [`EmitterConfig`]. Each frame the host calls
//! [`spawn`](ParticleSystem::spawn) (a probabilistic burst plus a fixed
//! steady-state batch), then [`step`](ParticleSystem::step) (gravity,
//! integration, aging, pruning), then reads the survivors back through
//! [`for_each_live`](ParticleSystem::for_each_live).
//!
//! The two components are independent: no shared state, no ordering
//! requirements between them, everything single-threaded and synchronous.
//!
//! ## What lives where
//!
//! | Concern | Type |
//! |---------|------|
//! | Closed-form surfaces, presets | [`SurfaceSampler`] |
//! | Point stream | [`SurfacePoints`] |
//! | Emitter tuning, color endpoints | [`EmitterConfig`] |
//! | Pool simulation | [`ParticleSystem`] |
//! | Render snapshot | [`ParticleView`] |
//! | Configuration failures | [`ConfigError`] |
//!
//! ## Host uploads
//!
//! [`ParticleView`] is `#[repr(C)]` and [`bytemuck::Pod`], and sampled points
//! are plain [`Vec3`], so both can be `bytemuck::cast_slice`d into vertex
//! buffers without copying field by field.

mod emitter;
mod error;
mod particle;
mod surface;
mod system;

pub use bytemuck;
pub use emitter::EmitterConfig;
pub use error::ConfigError;
pub use glam::{Vec2, Vec3};
pub use particle::{Particle, ParticleView};
pub use surface::{SurfaceDomain, SurfacePoints, SurfaceSampler};
pub use system::ParticleSystem;

/// Convenient re-exports for common usage.
///
/// ```
/// use trefoil::prelude::*;
/// ```
pub mod prelude {
    pub use crate::emitter::EmitterConfig;
    pub use crate::error::ConfigError;
    pub use crate::particle::{Particle, ParticleView};
    pub use crate::surface::{SurfaceDomain, SurfacePoints, SurfaceSampler};
    pub use crate::system::ParticleSystem;
    pub use crate::{Vec2, Vec3};
}
