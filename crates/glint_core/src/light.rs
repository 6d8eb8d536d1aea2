//! Light models: directional, point and spot.
//!
//! Each light answers three questions about a shaded point: which way the
//! light is, how far away it is (for shadow tests) and how much light
//! arrives there.

use glint_math::{normalize, Ray, Vec3};

use crate::{Color, SceneError};

/// Inverse-distance falloff `1 / (kc + kl d + kq d^2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub kc: f32,
    pub kl: f32,
    pub kq: f32,
}

impl Attenuation {
    /// Create attenuation coefficients.
    ///
    /// `kc` must be positive so the falloff is finite at zero distance;
    /// `kl` and `kq` must be non-negative.
    pub fn new(kc: f32, kl: f32, kq: f32) -> Result<Self, SceneError> {
        let valid = kc > 0.0
            && kl >= 0.0
            && kq >= 0.0
            && kc.is_finite()
            && kl.is_finite()
            && kq.is_finite();
        if !valid {
            return Err(SceneError::InvalidAttenuation { kc, kl, kq });
        }
        Ok(Self { kc, kl, kq })
    }

    /// No falloff at all.
    pub const NONE: Attenuation = Attenuation {
        kc: 1.0,
        kl: 0.0,
        kq: 0.0,
    };

    /// Divisor applied to the intensity at distance `d`.
    #[inline]
    pub fn factor(&self, d: f32) -> f32 {
        self.kc + self.kl * d + self.kq * d * d
    }
}

/// A light in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightSource {
    /// Parallel light from infinitely far away, shining along `direction`.
    Directional { intensity: Color, direction: Vec3 },
    /// Omnidirectional light with distance falloff.
    Point {
        intensity: Color,
        position: Vec3,
        attenuation: Attenuation,
    },
    /// Point light restricted to the hemisphere around `direction`, with a
    /// cosine falloff away from the axis.
    Spot {
        intensity: Color,
        position: Vec3,
        direction: Vec3,
        attenuation: Attenuation,
    },
}

impl LightSource {
    /// Create a directional light. `direction` is the way the light travels.
    pub fn directional(intensity: Color, direction: Vec3) -> Result<Self, SceneError> {
        Ok(LightSource::Directional {
            intensity,
            direction: unit_direction(direction, "Directional light")?,
        })
    }

    /// Create a point light.
    pub fn point(intensity: Color, position: Vec3, attenuation: Attenuation) -> Self {
        LightSource::Point {
            intensity,
            position,
            attenuation,
        }
    }

    /// Create a spot light pointing along `direction`.
    pub fn spot(
        intensity: Color,
        position: Vec3,
        direction: Vec3,
        attenuation: Attenuation,
    ) -> Result<Self, SceneError> {
        Ok(LightSource::Spot {
            intensity,
            position,
            direction: unit_direction(direction, "Spot light")?,
            attenuation,
        })
    }

    /// Ray from `point` toward the light.
    pub fn light_ray(&self, point: Vec3) -> Ray {
        match *self {
            LightSource::Directional { direction, .. } => Ray::new(point, -direction),
            LightSource::Point { position, .. } | LightSource::Spot { position, .. } => {
                Ray::new(point, position - point)
            }
        }
    }

    /// Distance from `point` to the light; infinite for directional lights.
    pub fn distance(&self, point: Vec3) -> f32 {
        match *self {
            LightSource::Directional { .. } => f32::INFINITY,
            LightSource::Point { position, .. } | LightSource::Spot { position, .. } => {
                (position - point).length()
            }
        }
    }

    /// Light arriving at `point`, before any surface or shadow terms.
    pub fn intensity(&self, point: Vec3) -> Color {
        match *self {
            LightSource::Directional { intensity, .. } => intensity,
            LightSource::Point {
                intensity,
                position,
                attenuation,
            } => intensity / attenuation.factor((position - point).length()),
            LightSource::Spot {
                intensity,
                position,
                direction,
                attenuation,
            } => {
                let to_point = normalize(point - position);
                let cos_theta = to_point.dot(direction).max(0.0);
                intensity * cos_theta / attenuation.factor((position - point).length())
            }
        }
    }
}

fn unit_direction(direction: Vec3, what: &'static str) -> Result<Vec3, SceneError> {
    let unit = normalize(direction);
    if unit == Vec3::ZERO {
        return Err(SceneError::ZeroDirection(what));
    }
    Ok(unit)
}
