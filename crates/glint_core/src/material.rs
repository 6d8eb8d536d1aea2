//! Phong material attached to each primitive.

use glint_math::Vec3;

use crate::SceneError;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Surface response to light.
///
/// Reflectances are RGB and multiply light intensities component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ka, scaled by the scene's global ambient term
    pub ambient: Color,
    /// Kd, Lambertian response
    pub diffuse: Color,
    /// Ks, Phong highlight response
    pub specular: Color,
    /// Phong exponent n
    pub shininess: f32,
    /// Kr, fraction of the mirror-reflected color added back
    pub reflection: f32,
}

impl Material {
    /// Create a material, rejecting values outside their valid ranges.
    pub fn new(
        ambient: Color,
        diffuse: Color,
        specular: Color,
        shininess: f32,
        reflection: f32,
    ) -> Result<Self, SceneError> {
        check_reflectance("Ambient", ambient)?;
        check_reflectance("Diffuse", diffuse)?;
        check_reflectance("Specular", specular)?;

        if !(shininess > 0.0 && shininess.is_finite()) {
            return Err(SceneError::InvalidShininess(shininess));
        }
        if !(0.0..=1.0).contains(&reflection) {
            return Err(SceneError::InvalidReflection(reflection));
        }

        Ok(Self {
            ambient,
            diffuse,
            specular,
            shininess,
            reflection,
        })
    }

    /// Check whether reflected rays should be spawned from this surface.
    pub fn is_reflective(&self) -> bool {
        self.reflection > 0.0
    }
}

impl Default for Material {
    /// Matte mid-grey, no mirror term.
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.5),
            specular: Color::ZERO,
            shininess: 1.0,
            reflection: 0.0,
        }
    }
}

fn check_reflectance(name: &'static str, value: Color) -> Result<(), SceneError> {
    if value.to_array().iter().all(|c| (0.0..=1.0).contains(c)) {
        Ok(())
    } else {
        Err(SceneError::InvalidReflectance {
            name,
            value: value.to_array(),
        })
    }
}
