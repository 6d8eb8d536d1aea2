//! Infinite plane primitive.

use glint_core::Material;
use glint_math::{normalize, Interval, Vec3};

use crate::hittable::{Hit, Hittable, HIT_EPSILON};
use crate::Ray;

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    point: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(normal: Vec3, point: Vec3, material: Material) -> Self {
        Self {
            normal: normalize(normal),
            point,
            material,
        }
    }

    /// Unit normal of the plane.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let denominator = ray.direction().dot(self.normal);

        // Ray is parallel to the plane
        if denominator.abs() < HIT_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denominator;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(Hit {
            t,
            point: ray.at(t),
            normal: self.normal,
            material: &self.material,
        })
    }
}
