//! Square tiles of the image, the unit of parallel work.
//!
//! Buckets tile the image without overlap, so each one can be rendered on
//! its own worker and written back into a region no other bucket touches.

use glint_core::{Color, RenderSettings};

use crate::renderer::render_pixel;
use crate::Scene;

/// A rectangular region of the image; edge buckets may be narrower.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bucket {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Image coordinates covered by this bucket, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> {
        let Bucket { x, y, width, height } = *self;
        (y..y + height).flat_map(move |py| (x..x + width).map(move |px| (px, py)))
    }
}

/// Split a `width` x `height` image into buckets of at most `bucket_size`
/// pixels a side, in row-major order. A `bucket_size` of zero is treated as
/// one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| Bucket {
                x,
                y,
                width: size.min(width - x),
                height: size.min(height - y),
            })
        })
        .collect();

    log::debug!(
        "Split {}x{} image into {} buckets of {}px",
        width,
        height,
        buckets.len(),
        size
    );
    buckets
}

/// Render every pixel of `bucket`, in the order of [`Bucket::pixels`].
pub fn render_bucket(bucket: &Bucket, scene: &Scene, settings: &RenderSettings) -> Vec<Color> {
    bucket
        .pixels()
        .map(|(x, y)| render_pixel(scene, settings, x, y))
        .collect()
}
