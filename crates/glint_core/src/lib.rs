//! Glint Core - scene entities shared by the ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: Phong reflectances plus a mirror reflection fraction
//! - **Lights**: directional, point and spot light models
//! - **Settings**: output resolution and recursion depth
//! - **Errors**: `SceneError`, returned by every validated constructor
//!
//! # Example
//!
//! ```
//! use glint_core::{Attenuation, LightSource, Material};
//! use glint_math::Vec3;
//!
//! let material = Material::new(
//!     Vec3::new(0.1, 0.0, 0.0),
//!     Vec3::new(0.7, 0.0, 0.0),
//!     Vec3::ONE,
//!     100.0,
//!     0.5,
//! )?;
//! let light = LightSource::point(
//!     Vec3::ONE,
//!     Vec3::new(1.0, 1.5, 1.0),
//!     Attenuation::new(0.1, 0.1, 0.1)?,
//! );
//! # let _ = (material, light);
//! # Ok::<(), glint_core::SceneError>(())
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod settings;

// Re-export commonly used types
pub use error::SceneError;
pub use light::{Attenuation, LightSource};
pub use material::{Color, Material};
pub use settings::RenderSettings;
