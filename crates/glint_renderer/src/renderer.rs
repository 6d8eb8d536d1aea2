//! Frame renderer.
//!
//! Maps the pixel grid onto a screen on the z = 0 plane, casts one primary
//! ray per pixel from the camera and shades it:
//! - Screen spans x in [-1, 1] and y in [1/ratio, -1/ratio], top row first
//! - Colors are clamped to [0, 1] once, per pixel
//! - Buckets are rendered in parallel with rayon

use std::time::Instant;

use glint_core::{Color, RenderSettings};
use glint_math::{Interval, Vec3};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, Bucket};
use crate::integrator::shade;
use crate::{Ray, Scene};

/// Coordinate of sample `i` out of `n` evenly spaced samples over
/// `[start, end]`, endpoints included. A lone sample sits at the midpoint.
fn linspace_at(start: f32, end: f32, n: u32, i: u32) -> f32 {
    if n <= 1 {
        return 0.5 * (start + end);
    }
    start + (end - start) * i as f32 / (n - 1) as f32
}

/// Point on the z = 0 screen that pixel (x, y) looks through.
pub fn screen_point(settings: &RenderSettings, x: u32, y: u32) -> Vec3 {
    let ratio = settings.aspect_ratio();
    let sx = linspace_at(-1.0, 1.0, settings.width, x);
    let sy = linspace_at(1.0 / ratio, -1.0 / ratio, settings.height, y);
    Vec3::new(sx, sy, 0.0)
}

/// Primary ray from the camera through pixel (x, y).
pub fn primary_ray(scene: &Scene, settings: &RenderSettings, x: u32, y: u32) -> Ray {
    let origin = scene.camera();
    Ray::new(origin, screen_point(settings, x, y) - origin)
}

/// Clamp a color to [0, 1] per component.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Render a single pixel, clamped to [0, 1].
pub fn render_pixel(scene: &Scene, settings: &RenderSettings, x: u32, y: u32) -> Color {
    let ray = primary_ray(scene, settings, x, y);
    clamp_color(shade(scene, &ray, 0, settings.max_depth))
}

/// Convert a [0, 1] color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = clamp_color(color) * 255.0;
    [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
}

/// Row-major buffer of linear RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at column x, row y.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at column x, row y.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Iterate over rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Copy a rendered bucket into its region of the image. `pixels` are in
    /// the order of [`Bucket::pixels`].
    pub fn write_bucket(&mut self, bucket: &Bucket, pixels: &[Color]) {
        for ((x, y), color) in bucket.pixels().zip(pixels) {
            self.set(x, y, *color);
        }
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| color_to_rgb8(*c)).collect()
    }
}

/// Render the entire scene, buckets in parallel.
pub fn render(scene: &Scene, settings: &RenderSettings) -> ImageBuffer {
    log_scene_warnings(scene);

    let buckets = generate_buckets(settings.width, settings.height, settings.bucket_size);
    log::info!(
        "Rendering {}x{} (max depth {}) in {} buckets",
        settings.width,
        settings.height,
        settings.max_depth,
        buckets.len()
    );
    let start = Instant::now();

    let rendered: Vec<Vec<Color>> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, settings))
        .collect();

    let mut image = ImageBuffer::new(settings.width, settings.height);
    for (bucket, pixels) in buckets.iter().zip(&rendered) {
        image.write_bucket(bucket, pixels);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}

/// Render the entire scene on the calling thread, row by row.
pub fn render_sequential(scene: &Scene, settings: &RenderSettings) -> ImageBuffer {
    log_scene_warnings(scene);

    let mut image = ImageBuffer::new(settings.width, settings.height);
    for y in 0..settings.height {
        for x in 0..settings.width {
            image.set(x, y, render_pixel(scene, settings, x, y));
        }
    }

    image
}

fn log_scene_warnings(scene: &Scene) {
    if scene.objects().is_empty() {
        log::warn!("Scene has no objects, image will be black");
    } else if scene.lights().is_empty() {
        log::warn!("Scene has no lights, only ambient shading will be visible");
    }
}
