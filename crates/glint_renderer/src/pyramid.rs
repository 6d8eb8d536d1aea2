//! Pyramid (double pyramid / diamond) built from six triangles.

use glint_core::Material;
use glint_math::{Interval, Vec3};

use crate::hittable::{closest_hit, Hit, Hittable};
use crate::{Ray, Triangle};

/// Vertex indices of the six faces, each wound so its front faces outward.
///
/// With vertices `[A, B, C, D, E]`, `D` is the apex above the base triangle
/// `ABC` and `E` the apex below it.
pub const PYRAMID_FACES: [[usize; 3]; 6] = [
    [0, 1, 3],
    [1, 2, 3],
    [0, 3, 2],
    [4, 1, 0],
    [4, 2, 1],
    [2, 4, 0],
];

/// Six triangles sharing one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    vertices: [Vec3; 5],
    faces: Vec<Triangle>,
}

impl Pyramid {
    /// Create a pyramid. The material is copied into every face.
    pub fn new(vertices: [Vec3; 5], material: Material) -> Self {
        let faces = PYRAMID_FACES
            .iter()
            .map(|&[i, j, k]| Triangle::new(vertices[i], vertices[j], vertices[k], material))
            .collect();

        Self { vertices, faces }
    }

    pub fn vertices(&self) -> &[Vec3; 5] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Triangle] {
        &self.faces
    }

    pub fn material(&self) -> &Material {
        // Every face carries the same copy
        self.faces[0].material()
    }
}

impl Hittable for Pyramid {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        closest_hit(&self.faces, ray, ray_t)
    }
}
