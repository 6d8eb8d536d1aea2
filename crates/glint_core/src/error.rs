//! Errors raised while building a scene.

use thiserror::Error;

/// Rejection of an invalid scene entity or render setting.
///
/// These are only produced at construction time; rendering itself never
/// fails.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("Invalid attenuation (kc={kc}, kl={kl}, kq={kq}): kc must be positive, kl and kq non-negative")]
    InvalidAttenuation { kc: f32, kl: f32, kq: f32 },

    #[error("{0} direction must be non-zero")]
    ZeroDirection(&'static str),

    #[error("Shininess must be positive, got {0}")]
    InvalidShininess(f32),

    #[error("Reflection must be in [0, 1], got {0}")]
    InvalidReflection(f32),

    #[error("{name} reflectance must be in [0, 1]^3, got {value:?}")]
    InvalidReflectance { name: &'static str, value: [f32; 3] },

    #[error("Resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Bucket size must be non-zero")]
    InvalidBucketSize,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
