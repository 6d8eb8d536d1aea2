//! Hittable trait and Hit record for ray-object intersection.

use glint_core::Material;
use glint_math::{Interval, Vec3};

use crate::Ray;

/// Smallest ray parameter accepted as a hit.
///
/// Rays leaving a surface would otherwise re-hit it at t ~ 0.
pub const HIT_EPSILON: f32 = 1e-4;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs (a distance, since ray
    /// directions are unit length)
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal used for shading. Planar primitives report their stored
    /// normal as-is; it is not flipped toward the ray.
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Closest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>>;
}

/// Closest hit over a sequence of hittables.
///
/// The search interval shrinks as hits are found and its upper bound is
/// exclusive, so on equal `t` the earliest object wins.
pub fn closest_hit<'a, H, I>(objects: I, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>>
where
    H: Hittable + 'a,
    I: IntoIterator<Item = &'a H>,
{
    let mut closest: Option<Hit<'a>> = None;
    let mut interval = ray_t;

    for object in objects {
        if let Some(hit) = object.hit(ray, interval) {
            interval = interval.with_max(hit.t);
            closest = Some(hit);
        }
    }

    closest
}
