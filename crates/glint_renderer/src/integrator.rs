//! Whitted-style shading.
//!
//! Local Phong shading (ambient, diffuse, specular) with hard shadows, plus
//! mirror reflection followed up to a fixed depth. The reflection term is
//! linear, so bounces are walked in a loop carrying the product of the
//! reflection coefficients seen so far; stack use does not grow with depth.
//!
//! Depth convention: primary rays are shaded at depth 0, `depth > max_depth`
//! is black, and a reflection is only spawned while `depth < max_depth`.
//! `max_depth = k` therefore allows exactly `k` bounces.

use glint_core::{Color, LightSource, Material};
use glint_math::{normalize, reflect, Vec3};

use crate::{Ray, Scene};

/// Offset along the normal for rays leaving a surface.
pub const SHADOW_BIAS: f32 = 1e-3;

/// Compute the (unclamped) color seen along `ray`.
pub fn shade(scene: &Scene, ray: &Ray, depth: u32, max_depth: u32) -> Color {
    let mut color = Color::ZERO;
    let mut weight: f32 = 1.0;
    let mut ray = *ray;

    for depth in depth..=max_depth {
        let Some(hit) = scene.nearest_intersected_object(&ray) else {
            break;
        };

        let material = hit.material;
        color += weight * local_color(scene, &ray, material, hit.point, hit.normal);

        if depth == max_depth || !material.is_reflective() {
            break;
        }

        // Leave from the side the ray arrived on, whichever way the normal faces
        let incoming = if ray.direction().dot(hit.normal) > 0.0 {
            -hit.normal
        } else {
            hit.normal
        };
        weight *= material.reflection;
        ray = Ray::new(
            hit.point + SHADOW_BIAS * incoming,
            reflect(ray.direction(), hit.normal),
        );
    }

    color
}

/// Ambient plus every unshadowed light at one hit.
fn local_color(scene: &Scene, ray: &Ray, material: &Material, point: Vec3, normal: Vec3) -> Color {
    let biased = point + SHADOW_BIAS * normal;
    let mut color = scene.ambient() * material.ambient;

    // Direction back toward the viewer (camera or previous bounce)
    let view = normalize(ray.origin() - point);
    for light in scene.lights() {
        if is_shadowed(scene, light, point, biased) {
            continue;
        }
        color += direct_lighting(light, material, point, normal, view);
    }

    color
}

/// Whether some object lies strictly between `point` and the light.
///
/// The shadow ray starts at `biased`, the hit point pushed off the surface.
pub fn is_shadowed(scene: &Scene, light: &LightSource, point: Vec3, biased: Vec3) -> bool {
    let shadow_ray = Ray::new(biased, light.light_ray(point).direction());
    scene
        .nearest_intersected_object(&shadow_ray)
        .is_some_and(|occluder| occluder.t < light.distance(point))
}

/// Diffuse and specular contribution of one unoccluded light.
fn direct_lighting(
    light: &LightSource,
    material: &Material,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
) -> Color {
    let intensity = light.intensity(point);
    let to_light = light.light_ray(point).direction();

    let diffuse = normal.dot(to_light).max(0.0);

    // Clamp before the power so a negative cosine never reaches powf
    let r = reflect(-to_light, normal);
    let specular = r.dot(view).max(0.0).powf(material.shininess);

    material.diffuse * intensity * diffuse + material.specular * intensity * specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere};
    use glint_core::Attenuation;

    const EPS: f32 = 1e-4;

    fn close(a: Color, b: Color) -> bool {
        (a - b).length() < EPS
    }

    fn matte(ambient: Color, diffuse: Color) -> Material {
        Material::new(ambient, diffuse, Vec3::ZERO, 1.0, 0.0).unwrap()
    }

    fn mirror(ambient: Color, reflection: f32) -> Material {
        Material::new(ambient, Vec3::ZERO, Vec3::ZERO, 1.0, reflection).unwrap()
    }

    fn front_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z)
    }

    fn sphere_scene(material: Material) -> Scene {
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 1.0), Vec3::splat(0.5));
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, material).unwrap());
        scene
    }

    #[test]
    fn test_miss_is_black() {
        let scene = Scene::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(shade(&scene, &front_ray(), 0, 3), Color::ZERO);
    }

    #[test]
    fn test_beyond_max_depth_is_black() {
        let scene = sphere_scene(matte(Vec3::ONE, Vec3::ONE));
        assert_eq!(shade(&scene, &front_ray(), 2, 1), Color::ZERO);
        assert!(shade(&scene, &front_ray(), 1, 1).length() > 0.0);
    }

    #[test]
    fn test_ambient_only_without_lights() {
        let scene = sphere_scene(matte(Vec3::new(0.2, 0.4, 0.6), Vec3::ONE));
        let color = shade(&scene, &front_ray(), 0, 0);
        assert!(close(color, Vec3::new(0.1, 0.2, 0.3)));
    }

    #[test]
    fn test_lambertian_front_point() {
        let mut scene = sphere_scene(matte(Vec3::splat(0.2), Vec3::new(0.8, 0.6, 0.4)));
        scene.add_light(LightSource::directional(Vec3::ONE, Vec3::NEG_Z).unwrap());

        // N . L = 1 at the front point (0, 0, -2)
        let color = shade(&scene, &front_ray(), 0, 0);
        assert!(close(color, Vec3::new(0.1 + 0.8, 0.1 + 0.6, 0.1 + 0.4)));
    }

    #[test]
    fn test_diffuse_follows_cosine() {
        let mut scene = Scene::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        scene.add_object(Plane::new(Vec3::Y, Vec3::ZERO, matte(Vec3::ZERO, Vec3::ONE)));
        scene.add_light(LightSource::directional(Vec3::ONE, Vec3::new(1.0, -1.0, 0.0)).unwrap());

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let color = shade(&scene, &ray, 0, 0);
        assert!(close(color, Vec3::splat(std::f32::consts::FRAC_1_SQRT_2)));
    }

    #[test]
    fn test_specular_highlight() {
        let material = Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, 50.0, 0.0).unwrap();
        let mut scene = sphere_scene(material);
        scene.add_light(LightSource::directional(Vec3::splat(0.5), Vec3::NEG_Z).unwrap());

        // Light, normal and viewer aligned: R . V = 1
        let color = shade(&scene, &front_ray(), 0, 0);
        assert!(close(color, Vec3::splat(0.5)));
    }

    #[test]
    fn test_specular_gated_for_grazing_view() {
        let material = Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::ONE, 2.5, 0.0).unwrap();
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ZERO);
        scene.add_object(Plane::new(Vec3::Y, Vec3::ZERO, material));
        // Light from the viewer at a grazing angle: R . V < 0, fractional exponent
        scene.add_light(LightSource::directional(Vec3::ONE, Vec3::new(3.0, -1.0, 0.0)).unwrap());

        let ray = Ray::new(Vec3::new(-3.0, 1.0, 0.0), Vec3::new(3.0, -1.0, 0.0));
        let color = shade(&scene, &ray, 0, 0);
        assert!(!color.is_nan());
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_light_below_surface_adds_nothing() {
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ZERO);
        scene.add_object(Plane::new(Vec3::Y, Vec3::ZERO, matte(Vec3::ZERO, Vec3::ONE)));
        scene.add_light(LightSource::point(
            Vec3::ONE,
            Vec3::new(0.0, -3.0, 0.0),
            Attenuation::NONE,
        ));

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        assert_eq!(shade(&scene, &ray, 0, 0), Color::ZERO);
    }

    #[test]
    fn test_occluder_casts_shadow() {
        let floor = matte(Vec3::splat(0.5), Vec3::ONE);
        let mut scene = Scene::new(Vec3::new(0.0, 5.0, 5.0), Vec3::splat(0.2));
        scene.add_object(Plane::new(Vec3::Y, Vec3::ZERO, floor));
        scene.add_light(LightSource::point(
            Vec3::ONE,
            Vec3::new(0.0, 4.0, 0.0),
            Attenuation::NONE,
        ));

        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let lit = shade(&scene, &ray, 0, 0);
        assert!(close(lit, Vec3::splat(0.1 + 1.0)));

        // Opaque sphere between the floor point and the light
        scene.add_object(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, floor).unwrap());

        let shadowed = shade(&scene, &ray, 0, 0);
        assert!(close(shadowed, Vec3::splat(0.1)));
        assert!(shadowed.x > 0.0);
    }

    #[test]
    fn test_object_beyond_light_does_not_shadow() {
        let floor = matte(Vec3::ZERO, Vec3::ONE);
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ZERO);
        scene.add_object(Plane::new(Vec3::Y, Vec3::ZERO, floor));
        scene.add_object(Sphere::new(Vec3::new(0.0, 6.0, 0.0), 1.0, floor).unwrap());
        scene.add_light(LightSource::point(
            Vec3::ONE,
            Vec3::new(0.0, 3.0, 0.0),
            Attenuation::NONE,
        ));

        let point = Vec3::ZERO;
        let light = &scene.lights()[0];
        assert!(!is_shadowed(&scene, light, point, point + SHADOW_BIAS * Vec3::Y));
    }

    #[test]
    fn test_directional_light_shadowed_by_anything_above() {
        let floor = matte(Vec3::ZERO, Vec3::ONE);
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ZERO);
        scene.add_object(Plane::new(Vec3::Y, Vec3::ZERO, floor));
        scene.add_object(Sphere::new(Vec3::new(0.0, 100.0, 0.0), 1.0, floor).unwrap());
        scene.add_light(LightSource::directional(Vec3::ONE, Vec3::NEG_Y).unwrap());

        let light = &scene.lights()[0];
        assert!(is_shadowed(&scene, light, Vec3::ZERO, SHADOW_BIAS * Vec3::Y));
    }

    /// Two facing mirrors: red-ish at z = -5 looking +Z, green-ish at z = 5
    /// looking -Z. Each bounce adds half of the next surface's ambient.
    fn facing_mirrors() -> Scene {
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ONE);
        scene.add_object(Plane::new(
            Vec3::Z,
            Vec3::new(0.0, 0.0, -5.0),
            mirror(Vec3::new(0.2, 0.0, 0.0), 0.5),
        ));
        scene.add_object(Plane::new(
            Vec3::NEG_Z,
            Vec3::new(0.0, 0.0, 5.0),
            mirror(Vec3::new(0.0, 0.2, 0.0), 0.5),
        ));
        scene
    }

    #[test]
    fn test_max_depth_zero_has_no_reflection() {
        let color = shade(&facing_mirrors(), &front_ray(), 0, 0);
        assert!(close(color, Vec3::new(0.2, 0.0, 0.0)));
    }

    #[test]
    fn test_max_depth_one_bounces_once() {
        let color = shade(&facing_mirrors(), &front_ray(), 0, 1);
        assert!(close(color, Vec3::new(0.2, 0.1, 0.0)));
    }

    #[test]
    fn test_max_depth_two_bounces_twice() {
        let color = shade(&facing_mirrors(), &front_ray(), 0, 2);
        assert!(close(color, Vec3::new(0.25, 0.1, 0.0)));
    }

    #[test]
    fn test_deep_mirrors_terminate_finite() {
        let perfect = |ambient| mirror(ambient, 1.0);
        let mut scene = Scene::new(Vec3::ZERO, Vec3::splat(0.01));
        scene.add_object(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, -1.0), perfect(Vec3::ONE)));
        scene.add_object(Plane::new(Vec3::NEG_Z, Vec3::new(0.0, 0.0, 1.0), perfect(Vec3::ONE)));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let color = shade(&scene, &ray, 0, 40);

        // One ambient term per surface visited: 41 of them
        assert!(color.is_finite());
        assert!(close(color, Vec3::splat(0.41)));
    }

    #[test]
    fn test_very_deep_mirrors_do_not_exhaust_stack() {
        // Geometric series: 0.2 * (1 + 1/4 + ...) red, half of that green
        let color = shade(&facing_mirrors(), &front_ray(), 0, 200_000);
        assert!(close(color, Vec3::new(0.8 / 3.0, 0.4 / 3.0, 0.0)));
    }

    #[test]
    fn test_mirror_reflects_from_its_back_side() {
        let mut scene = Scene::new(Vec3::ZERO, Vec3::ONE);
        // Normal faces away from the incoming ray
        scene.add_object(Plane::new(Vec3::Y, Vec3::ZERO, mirror(Vec3::ZERO, 1.0)));
        scene.add_object(
            Sphere::new(Vec3::new(3.0, -2.0, 0.0), 0.5, matte(Vec3::X, Vec3::ZERO)).unwrap(),
        );

        let ray = Ray::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let color = shade(&scene, &ray, 0, 3);
        assert!(close(color, Vec3::X));
    }
}
