//! Closed set of scene primitives.

use glint_core::Material;
use glint_math::Interval;

use crate::hittable::{Hit, Hittable};
use crate::{Plane, Pyramid, Ray, Sphere, Triangle};

/// Any object that can be placed in a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Plane(Plane),
    Triangle(Triangle),
    Pyramid(Pyramid),
    Sphere(Sphere),
}

impl Primitive {
    /// Material of the primitive.
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Plane(p) => p.material(),
            Primitive::Triangle(t) => t.material(),
            Primitive::Pyramid(p) => p.material(),
            Primitive::Sphere(s) => s.material(),
        }
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        match self {
            Primitive::Plane(p) => p.hit(ray, ray_t),
            Primitive::Triangle(t) => t.hit(ray, ray_t),
            Primitive::Pyramid(p) => p.hit(ray, ray_t),
            Primitive::Sphere(s) => s.hit(ray, ray_t),
        }
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

impl From<Pyramid> for Primitive {
    fn from(pyramid: Pyramid) -> Self {
        Primitive::Pyramid(pyramid)
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}
