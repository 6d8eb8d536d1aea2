//! Glint Renderer - recursive Whitted-style CPU ray tracing.
//!
//! Casts one ray per pixel, shades the nearest hit with Phong ambient,
//! diffuse and specular terms under directional, point and spot lights,
//! tests hard shadows, and follows mirror reflections up to a fixed depth.
//!
//! # Example
//!
//! ```
//! use glint_core::{LightSource, Material, RenderSettings};
//! use glint_renderer::{render, Scene, Sphere, Vec3};
//!
//! let mut scene = Scene::new(Vec3::new(0.0, 0.0, 1.0), Vec3::splat(0.1));
//! let material = Material::new(Vec3::ONE, Vec3::splat(0.8), Vec3::ZERO, 1.0, 0.0)?;
//! scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, material)?);
//! scene.add_light(LightSource::directional(Vec3::ONE, Vec3::NEG_Z)?);
//!
//! let image = render(&scene, &RenderSettings::default().with_resolution(8, 8));
//! assert_eq!(image.pixels.len(), 64);
//! # Ok::<(), glint_core::SceneError>(())
//! ```

mod bucket;
mod hittable;
pub mod integrator;
mod plane;
mod primitive;
mod pyramid;
mod renderer;
mod scene;
mod scene_file;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, Bucket};
pub use hittable::{closest_hit, Hit, Hittable, HIT_EPSILON};
pub use integrator::{shade, SHADOW_BIAS};
pub use plane::Plane;
pub use primitive::Primitive;
pub use pyramid::{Pyramid, PYRAMID_FACES};
pub use renderer::{
    clamp_color, color_to_rgb8, primary_ray, render, render_pixel, render_sequential,
    screen_point, ImageBuffer,
};
pub use scene::Scene;
pub use scene_file::{load_scene_file, load_scene_json};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
