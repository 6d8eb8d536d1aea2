//! Triangle primitive for ray tracing.
//!
//! Intersection solves the barycentric-parametric system
//! `[B-A, C-A, -d] . [u, v, t] = o - A` with Cramer's rule.

use glint_core::Material;
use glint_math::{normalize, Interval, Mat3, Vec3};

use crate::hittable::{Hit, Hittable};
use crate::Ray;

/// Below this `|cos|` between ray and face normal the system is singular.
const SINGULAR_EPSILON: f32 = 1e-6;

/// Inward bias on barycentric coordinates, keeps hits off the edges.
const BARYCENTRIC_EPSILON: f32 = 1e-6;

/// A triangle primitive.
///
/// The front face is the one seen when the vertices run A -> B -> C
/// counter-clockwise; the normal `(B-A) x (C-A)` points out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    a: Vec3,
    b: Vec3,
    c: Vec3,
    /// Pre-computed face normal (unit length, zero if degenerate)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: Material) -> Self {
        let normal = normalize((b - a).cross(c - a));

        Self {
            a,
            b,
            c,
            normal,
            material,
        }
    }

    /// Unit face normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Solve for `(u, v, t)`; `None` when the system is singular (ray
    /// parallel to the triangle or the triangle is degenerate).
    fn solve(&self, ray: &Ray) -> Option<Vec3> {
        // Zero normal for a degenerate triangle, so this also rejects those
        if self.normal.dot(ray.direction()).abs() < SINGULAR_EPSILON {
            return None;
        }

        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let neg_d = -ray.direction();
        let rhs = ray.origin() - self.a;

        let det = Mat3::from_cols(ab, ac, neg_d).determinant();
        if det == 0.0 {
            return None;
        }

        let u = Mat3::from_cols(rhs, ac, neg_d).determinant() / det;
        let v = Mat3::from_cols(ab, rhs, neg_d).determinant() / det;
        let t = Mat3::from_cols(ab, ac, rhs).determinant() / det;
        Some(Vec3::new(u, v, t))
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let Vec3 { x: u, y: v, z: t } = self.solve(ray)?;

        let barycentric = Interval::new(BARYCENTRIC_EPSILON, 1.0);
        if !barycentric.contains(u) || !barycentric.contains(v) || u + v > 1.0 {
            return None;
        }
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
