//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "camera": [0, 0, 1],
//!   "ambient": [0.1, 0.2, 0.3],
//!   "lights": [
//!     { "type": "point", "intensity": [1, 1, 1], "position": [1, 1.5, 1],
//!       "attenuation": { "kc": 0.1, "kl": 0.1, "kq": 0.1 } }
//!   ],
//!   "objects": [
//!     { "type": "sphere", "center": [0, 0, -1], "radius": 0.5,
//!       "material": { "ambient": [0.1, 0, 0], "diffuse": [0.7, 0, 0],
//!                     "specular": [1, 1, 1], "shininess": 100, "reflection": 0.5 } }
//!   ],
//!   "settings": { "width": 400, "height": 300, "max_depth": 3 }
//! }
//! ```
//!
//! Every entity is built through its validating constructor, so a file is
//! held to the same rules as code.

use std::path::Path;

use glint_core::{Attenuation, Color, LightSource, Material, RenderSettings, SceneError};
use glint_math::Vec3;
use serde::Deserialize;

use crate::{Plane, Primitive, Pyramid, Scene, Sphere, Triangle};

#[derive(Debug, Deserialize)]
struct SceneDesc {
    camera: Vec3,
    #[serde(default)]
    ambient: Color,
    #[serde(default)]
    lights: Vec<LightDesc>,
    #[serde(default)]
    objects: Vec<ObjectDesc>,
    #[serde(default)]
    settings: RenderSettings,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum LightDesc {
    Directional {
        intensity: Color,
        direction: Vec3,
    },
    Point {
        intensity: Color,
        position: Vec3,
        #[serde(default)]
        attenuation: AttenuationDesc,
    },
    Spot {
        intensity: Color,
        position: Vec3,
        direction: Vec3,
        #[serde(default)]
        attenuation: AttenuationDesc,
    },
}

#[derive(Debug, Deserialize)]
struct AttenuationDesc {
    kc: f32,
    #[serde(default)]
    kl: f32,
    #[serde(default)]
    kq: f32,
}

impl Default for AttenuationDesc {
    fn default() -> Self {
        Self {
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MaterialDesc {
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
    #[serde(default)]
    reflection: f32,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ObjectDesc {
    Plane {
        normal: Vec3,
        point: Vec3,
        material: MaterialDesc,
    },
    Triangle {
        a: Vec3,
        b: Vec3,
        c: Vec3,
        material: MaterialDesc,
    },
    Pyramid {
        vertices: [Vec3; 5],
        material: MaterialDesc,
    },
    Sphere {
        center: Vec3,
        radius: f32,
        material: MaterialDesc,
    },
}

impl AttenuationDesc {
    fn build(&self) -> Result<Attenuation, SceneError> {
        Attenuation::new(self.kc, self.kl, self.kq)
    }
}

impl MaterialDesc {
    fn build(&self) -> Result<Material, SceneError> {
        Material::new(
            self.ambient,
            self.diffuse,
            self.specular,
            self.shininess,
            self.reflection,
        )
    }
}

impl LightDesc {
    fn build(&self) -> Result<LightSource, SceneError> {
        match self {
            LightDesc::Directional {
                intensity,
                direction,
            } => LightSource::directional(*intensity, *direction),
            LightDesc::Point {
                intensity,
                position,
                attenuation,
            } => Ok(LightSource::point(*intensity, *position, attenuation.build()?)),
            LightDesc::Spot {
                intensity,
                position,
                direction,
                attenuation,
            } => LightSource::spot(*intensity, *position, *direction, attenuation.build()?),
        }
    }
}

impl ObjectDesc {
    fn build(&self) -> Result<Primitive, SceneError> {
        let primitive: Primitive = match self {
            ObjectDesc::Plane {
                normal,
                point,
                material,
            } => Plane::new(*normal, *point, material.build()?).into(),
            ObjectDesc::Triangle { a, b, c, material } => {
                Triangle::new(*a, *b, *c, material.build()?).into()
            }
            ObjectDesc::Pyramid { vertices, material } => {
                Pyramid::new(*vertices, material.build()?).into()
            }
            ObjectDesc::Sphere {
                center,
                radius,
                material,
            } => Sphere::new(*center, *radius, material.build()?)?.into(),
        };
        Ok(primitive)
    }
}

/// Parse a JSON scene description into a scene and its render settings.
pub fn load_scene_json(json: &str) -> Result<(Scene, RenderSettings), SceneError> {
    let desc: SceneDesc =
        serde_json::from_str(json).map_err(|e| SceneError::Parse(e.to_string()))?;

    desc.settings.validate()?;

    let lights = desc
        .lights
        .iter()
        .map(LightDesc::build)
        .collect::<Result<Vec<_>, _>>()?;
    let objects = desc
        .objects
        .iter()
        .map(ObjectDesc::build)
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "Loaded scene with {} objects and {} lights",
        objects.len(),
        lights.len()
    );
    log::debug!("Render settings: {:?}", desc.settings);

    let scene = Scene::with(desc.camera, desc.ambient, lights, objects);
    Ok((scene, desc.settings))
}

/// Read and parse a JSON scene file.
pub fn load_scene_file<P: AsRef<Path>>(path: P) -> Result<(Scene, RenderSettings), SceneError> {
    let path = path.as_ref();
    log::debug!("Reading scene from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    load_scene_json(&json)
}
