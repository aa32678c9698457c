//! Parametric surface sampling.
//!
//! A [`SurfaceSampler`] turns a closed-form surface `f(u, v) -> Vec3` into an
//! ordered stream of points, one per step of the parameter grid. Hosts call
//! [`SurfaceSampler::sample`] once per frame with their current density and
//! scale and draw whatever comes out.
//!
//! # Example
//!
//! ```
//! use trefoil::SurfaceSampler;
//!
//! let sampler = SurfaceSampler::trefoil();
//! let points: Vec<_> = sampler.sample(0.1, 10.0).unwrap().collect();
//! assert!(!points.is_empty());
//! ```
//!
//! Points stream in a fixed order: the outer parameter `u` ascends, and for
//! each `u` the inner parameter `v` sweeps its full range. Consumers can rely
//! on that order for progressive rendering.

use crate::error::ConfigError;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Sampling domain for a parametric surface.
///
/// Both parameters cover the full half-open interval `[-PI, PI)`; the only
/// knob is the step size between samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    density: f32,
}

impl SurfaceDomain {
    /// Lower bound of both parameter ranges.
    pub const MIN: f32 = -PI;
    /// Open upper bound of both parameter ranges.
    pub const MAX: f32 = PI;

    /// Create a domain stepped by `density`.
    ///
    /// Smaller steps yield denser point meshes. Rejects zero, negative, and
    /// non-finite steps.
    pub fn new(density: f32) -> Result<Self, ConfigError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ConfigError::NonPositiveDensity(density));
        }
        Ok(Self { density })
    }

    /// Step size between samples along each axis.
    #[inline]
    pub fn density(&self) -> f32 {
        self.density
    }
}

/// Samples a closed-form parametric surface into 3D points.
///
/// The sampler is stateless: it holds only the surface function, and every
/// call to [`sample`](Self::sample) with the same arguments yields the
/// identical sequence.
///
/// Use a preset ([`trefoil`](Self::trefoil), [`torus`](Self::torus),
/// [`sphere`](Self::sphere)) or bring your own closed form:
///
/// ```
/// use trefoil::{SurfaceSampler, Vec3};
///
/// let saddle = SurfaceSampler::new(|u, v| Vec3::new(u, v, u * v));
/// let count = saddle.sample(0.5, 1.0).unwrap().count();
/// assert!(count > 0);
/// ```
pub struct SurfaceSampler<F> {
    surface: F,
}

impl SurfaceSampler<fn(f32, f32) -> Vec3> {
    /// The trefoil knot tube.
    ///
    /// A (2,3) torus knot swept into a closed tube, the signature shape of
    /// this crate. Sits roughly within `[-4, 4]` on each axis before scaling.
    pub fn trefoil() -> Self {
        Self {
            surface: trefoil_point,
        }
    }

    /// Unit sphere, with `u` as longitude and `v` sweeping pole to pole.
    pub fn sphere() -> Self {
        Self {
            surface: sphere_point,
        }
    }

    /// Torus with the given major (ring) and minor (tube) radii.
    pub fn torus(major: f32, minor: f32) -> SurfaceSampler<impl Fn(f32, f32) -> Vec3> {
        SurfaceSampler::new(move |u: f32, v: f32| {
            let ring = major + minor * v.cos();
            Vec3::new(ring * u.cos(), ring * u.sin(), minor * v.sin())
        })
    }
}

impl<F> SurfaceSampler<F>
where
    F: Fn(f32, f32) -> Vec3,
{
    /// Wrap an arbitrary closed-form surface `f(u, v) -> Vec3`.
    ///
    /// The function is evaluated over `u, v` in `[-PI, PI)`; periodic
    /// surfaces close seamlessly, non-periodic ones are simply clipped to
    /// that window.
    pub fn new(surface: F) -> Self {
        Self { surface }
    }

    /// Enumerate surface points at the given resolution and scale.
    ///
    /// Walks `u` ascending over `[-PI, PI)` in steps of `density` and, for
    /// each `u`, walks `v` over the same range, yielding
    /// `surface(u, v) * scale` at every step. The iterator is lazy and
    /// finite; when `density` does not evenly divide the range the last step
    /// in each axis lands short of `PI` and is still included.
    ///
    /// Steps accumulate in floating point rather than being counted out in
    /// advance, so the number of points tracks what an accumulating loop
    /// over the same slider values would produce.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite `density` and `scale`.
    pub fn sample(&self, density: f32, scale: f32) -> Result<SurfacePoints<'_, F>, ConfigError> {
        let domain = SurfaceDomain::new(density)?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(scale));
        }
        Ok(SurfacePoints {
            surface: &self.surface,
            domain,
            scale,
            u: SurfaceDomain::MIN,
            v: SurfaceDomain::MIN,
        })
    }
}

/// Lazy point stream produced by [`SurfaceSampler::sample`].
///
/// Yields `Vec3` points in u-major order. Obtain a fresh one from the sampler
/// to restart the walk.
pub struct SurfacePoints<'a, F> {
    surface: &'a F,
    domain: SurfaceDomain,
    scale: f32,
    u: f32,
    v: f32,
}

impl<F> SurfacePoints<'_, F> {
    /// The domain this stream walks.
    #[inline]
    pub fn domain(&self) -> SurfaceDomain {
        self.domain
    }
}

impl<F> Iterator for SurfacePoints<'_, F>
where
    F: Fn(f32, f32) -> Vec3,
{
    type Item = Vec3;

    fn next(&mut self) -> Option<Vec3> {
        while self.u < SurfaceDomain::MAX {
            if self.v < SurfaceDomain::MAX {
                let point = (self.surface)(self.u, self.v) * self.scale;
                self.v += self.domain.density;
                return Some(point);
            }
            self.u += self.domain.density;
            self.v = SurfaceDomain::MIN;
        }
        None
    }
}

/// Trefoil knot tube point at parameters `(u, v)`.
fn trefoil_point(u: f32, v: f32) -> Vec3 {
    let x = 2.0 * (3.0 * u).sin() / (2.0 + v.cos());
    let y = 2.0 * (u.sin() + 2.0 * (2.0 * u).sin()) / (2.0 + (v + TAU / 3.0).cos());
    let z = (u.cos() - 2.0 * (2.0 * u).cos()) * (2.0 + v.cos()) * (2.0 + (v + TAU / 3.0).cos()) / 4.0;
    Vec3::new(x, y, z)
}

/// Unit sphere point at parameters `(u, v)`.
fn sphere_point(u: f32, v: f32) -> Vec3 {
    let lat = v * 0.5;
    Vec3::new(lat.cos() * u.cos(), lat.cos() * u.sin(), lat.sin())
}
