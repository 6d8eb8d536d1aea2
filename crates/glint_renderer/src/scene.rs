//! The renderable world: camera position, lights and objects.

use glint_core::{Color, LightSource};
use glint_math::{Interval, Vec3};

use crate::hittable::{closest_hit, Hit, Hittable, HIT_EPSILON};
use crate::{Primitive, Ray};

/// Everything a render reads. Built once, then only borrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    camera: Vec3,
    ambient: Color,
    lights: Vec<LightSource>,
    objects: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene with the eye at `camera` and a global ambient
    /// coefficient.
    pub fn new(camera: Vec3, ambient: Color) -> Self {
        Self {
            camera,
            ambient,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Create a scene from prepared lights and objects.
    pub fn with(
        camera: Vec3,
        ambient: Color,
        lights: Vec<LightSource>,
        objects: Vec<Primitive>,
    ) -> Self {
        Self {
            camera,
            ambient,
            lights,
            objects,
        }
    }

    /// Add a light. Lights are evaluated in insertion order.
    pub fn add_light(&mut self, light: LightSource) {
        self.lights.push(light);
    }

    /// Add an object. Insertion order breaks intersection ties.
    pub fn add_object(&mut self, object: impl Into<Primitive>) {
        self.objects.push(object.into());
    }

    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    /// Nearest object in front of the ray origin.
    ///
    /// Linear scan in object order; on equal distance the first object wins.
    /// `None` when nothing is hit.
    pub fn nearest_intersected_object(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.hit(ray, Interval::forward(HIT_EPSILON))
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        closest_hit(&self.objects, ray, ray_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere};
    use glint_core::Material;

    fn tinted(r: f32) -> Material {
        Material::new(Vec3::new(r, 0.0, 0.0), Vec3::ZERO, Vec3::ZERO, 1.0, 0.0).unwrap()
    }

    #[test]
    fn test_empty_scene_hits_nothing() {
        let scene = Scene::new(Vec3::ZERO, Vec3::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(scene.nearest_intersected_object(&ray).is_none());
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ONE);
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, tinted(0.1)).unwrap());
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -4.0), 1.0, tinted(0.2)).unwrap());
        scene.add_object(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, -20.0), tinted(0.3)));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene.nearest_intersected_object(&ray).unwrap();

        assert!((hit.t - 3.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-5);
        assert_eq!(hit.material.ambient.x, 0.2);
    }

    #[test]
    fn test_tie_goes_to_first_object() {
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ONE);
        scene.add_object(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, -2.0), tinted(0.4)));
        scene.add_object(Plane::new(Vec3::Z, Vec3::new(1.0, 1.0, -2.0), tinted(0.5)));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene.nearest_intersected_object(&ray).unwrap();
        assert_eq!(hit.material.ambient.x, 0.4);
    }

    #[test]
    fn test_miss_everything() {
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ONE);
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -4.0), 1.0, tinted(0.2)).unwrap());

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(scene.nearest_intersected_object(&ray).is_none());
    }

    #[test]
    fn test_scene_with_keeps_order() {
        let a = Primitive::from(Plane::new(Vec3::Y, Vec3::ZERO, tinted(0.1)));
        let b = Primitive::from(Plane::new(Vec3::X, Vec3::ZERO, tinted(0.2)));
        let scene = Scene::with(Vec3::Z, Vec3::ONE, Vec::new(), vec![a.clone(), b.clone()]);

        assert_eq!(scene.objects(), &[a, b]);
        assert_eq!(scene.camera(), Vec3::Z);
        assert!(scene.lights().is_empty());
    }
}
