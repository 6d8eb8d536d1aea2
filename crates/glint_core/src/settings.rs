//! Render settings: output resolution, reflection depth and work split.

use serde::{Deserialize, Serialize};

use crate::SceneError;

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Render configuration.
///
/// `max_depth` is the number of mirror bounces a primary ray may take:
/// primary rays are traced at depth 0 and reflections are only spawned
/// while the depth is below `max_depth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Maximum number of reflection bounces
    pub max_depth: u32,
    /// Side of the square tiles rendered as one parallel work unit
    pub bucket_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            max_depth: 3,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the maximum reflection depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the bucket size.
    pub fn with_bucket_size(mut self, bucket_size: u32) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.bucket_size == 0 {
            return Err(SceneError::InvalidBucketSize);
        }
        Ok(())
    }
}
