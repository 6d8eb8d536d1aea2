//! Render a scene to PNG.
//!
//! Usage: `cargo run --example render_scene [scene.json] [output.png]`
//!
//! Without a scene file a built-in scene is rendered: a mirrored floor, a
//! reflective sphere, a diamond and a triangle under a point and a spot light.

use anyhow::{Context, Result};
use glint_core::{Attenuation, LightSource, Material, RenderSettings};
use glint_renderer::{load_scene_file, render, Plane, Pyramid, Scene, Sphere, Triangle, Vec3};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (scene, settings) = match args.next() {
        Some(path) => load_scene_file(&path).with_context(|| format!("loading {path}"))?,
        None => (build_scene()?, RenderSettings::default().with_resolution(640, 480)),
    };
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    let image = render(&scene, &settings);

    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("image buffer size does not match resolution")?;
    rgb.save(&output).with_context(|| format!("saving {output}"))?;
    log::info!("Saved to {}", output);

    Ok(())
}

fn build_scene() -> Result<Scene> {
    let mut scene = Scene::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.1, 0.2, 0.3));

    scene.add_light(LightSource::point(
        Vec3::ONE,
        Vec3::new(1.0, 1.5, 1.0),
        Attenuation::new(0.1, 0.1, 0.1)?,
    ));
    scene.add_light(LightSource::spot(
        Vec3::new(0.6, 0.6, 0.3),
        Vec3::new(-0.5, 1.5, 0.0),
        Vec3::new(0.0, -1.0, -0.5),
        Attenuation::new(0.1, 0.1, 0.1)?,
    )?);

    let floor = Material::new(
        Vec3::new(0.1, 0.1, 0.1),
        Vec3::new(0.6, 0.6, 0.6),
        Vec3::new(0.3, 0.3, 0.3),
        1000.0,
        0.5,
    )?;
    scene.add_object(Plane::new(Vec3::Y, Vec3::new(0.0, -0.5, 0.0), floor));

    let back_wall = Material::new(
        Vec3::new(0.0, 0.1, 0.1),
        Vec3::new(0.6, 0.6, 0.0),
        Vec3::ONE,
        1000.0,
        0.5,
    )?;
    scene.add_object(Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, -3.0), back_wall));

    let red = Material::new(
        Vec3::new(0.1, 0.0, 0.0),
        Vec3::new(0.7, 0.0, 0.0),
        Vec3::ONE,
        100.0,
        0.5,
    )?;
    scene.add_object(Sphere::new(Vec3::new(-0.2, 0.0, -1.0), 0.5, red)?);

    let blue = Material::new(
        Vec3::new(0.0, 0.0, 0.1),
        Vec3::new(0.0, 0.0, 0.7),
        Vec3::ONE,
        10.0,
        0.3,
    )?;
    scene.add_object(Pyramid::new(
        [
            Vec3::new(0.6, -0.1, -1.0),
            Vec3::new(1.0, -0.1, -1.0),
            Vec3::new(0.8, -0.1, -1.4),
            Vec3::new(0.8, 0.4, -1.2),
            Vec3::new(0.8, -0.45, -1.2),
        ],
        blue,
    ));

    let green = Material::new(
        Vec3::new(0.0, 0.1, 0.0),
        Vec3::new(0.0, 0.6, 0.0),
        Vec3::new(0.5, 0.5, 0.5),
        50.0,
        0.0,
    )?;
    scene.add_object(Triangle::new(
        Vec3::new(-1.4, -0.5, -2.0),
        Vec3::new(-0.8, -0.5, -2.0),
        Vec3::new(-1.1, 0.4, -2.0),
        green,
    ));

    Ok(scene)
}
