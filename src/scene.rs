use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::Rgb;
use log::{debug, info};
use serde::{Deserialize, Deserializer};

use crate::camera::Camera;
use crate::error::SceneError;
use crate::geometry::{Plane, Primitive, ShaderId, Triangle};
use crate::obj::{self, FaceStyle, MeshOptions, TriangleStyle};
use crate::ray::Ray;
use crate::vec3::Vec3;

fn deserialize_rgb<'de, D>(de: D) -> Result<Rgb<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let (r, g, b) = Deserialize::deserialize(de)?;
    let rgb = Rgb([r, g, b]);

    Ok(rgb)
}

fn default_background() -> Rgb<u8> {
    Rgb([30, 30, 30])
}

/// Shading descriptor referenced by primitives through their [`ShaderId`].
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Material {
    #[serde(deserialize_with = "deserialize_rgb")]
    pub color: Rgb<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum PrimitiveConfig {
    Plane {
        origin: Vec3<f64>,
        normal: Option<Vec3<f64>>,
        #[serde(default)]
        material: usize,
    },
    Triangle {
        vertices: [Vec3<f64>; 3],
        #[serde(default)]
        material: usize,
    },
    Mesh {
        path: PathBuf,
        scale: Option<Vec3<f64>>,
        translation: Option<Vec3<f64>>,
        face_style: Option<FaceStyle>,
        triangle_style: Option<TriangleStyle>,
        #[serde(default)]
        material: usize,
    },
}

impl PrimitiveConfig {
    fn material(&self) -> usize {
        match *self {
            PrimitiveConfig::Plane { material, .. }
            | PrimitiveConfig::Triangle { material, .. }
            | PrimitiveConfig::Mesh { material, .. } => material,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SceneConfig {
    #[serde(deserialize_with = "deserialize_rgb", default = "default_background")]
    background: Rgb<u8>,
    camera: Camera,
    #[serde(default)]
    materials: Vec<Material>,
    #[serde(default)]
    primitives: Vec<PrimitiveConfig>,
}

/// Top-level collection of primitives plus the shading table they point into.
///
/// Read-only once built, so any number of threads may trace against it.
#[derive(Debug)]
pub struct Scene {
    pub background: Rgb<u8>,
    pub camera: Camera,
    materials: Vec<Material>,
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(background: Rgb<u8>, camera: Camera) -> Self {
        Self {
            background,
            camera,
            materials: Vec::new(),
            primitives: Vec::new(),
        }
    }

    /// Loads a JSON scene description. Mesh paths are relative to the scene file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: SceneConfig = serde_json::from_reader(BufReader::new(file))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        let scene = Self::from_config(config, base)?;
        info!(
            "scene {} loaded: {} primitives, {} materials",
            path.display(),
            scene.primitives.len(),
            scene.materials.len()
        );

        Ok(scene)
    }

    /// Builds a scene from JSON text, resolving mesh paths against `base`.
    pub fn from_json(json: &str, base: &Path) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        Self::from_config(config, base)
    }

    fn from_config(config: SceneConfig, base: &Path) -> Result<Self, SceneError> {
        let mut scene = Scene::new(config.background, config.camera);
        for material in config.materials {
            scene.add_material(material);
        }

        for (n, primitive) in config.primitives.into_iter().enumerate() {
            let material = primitive.material();
            if material >= scene.materials.len() {
                return Err(SceneError::UnknownMaterial {
                    primitive: n,
                    material,
                });
            }
            let shader = ShaderId(material);

            let primitive = match primitive {
                PrimitiveConfig::Plane { origin, normal, .. } => match normal {
                    Some(normal) => Plane::new(origin, normal.unit(), shader).into(),
                    None => Plane::horizontal(origin, shader).into(),
                },
                PrimitiveConfig::Triangle { vertices, .. } => Triangle::new(vertices, shader).into(),
                PrimitiveConfig::Mesh {
                    path,
                    scale,
                    translation,
                    face_style,
                    triangle_style,
                    ..
                } => {
                    let defaults = MeshOptions::default();
                    let options = MeshOptions {
                        scale: scale.unwrap_or(defaults.scale),
                        translation: translation.unwrap_or(defaults.translation),
                        face_style: face_style.unwrap_or(defaults.face_style),
                        triangle_style: triangle_style.unwrap_or(defaults.triangle_style),
                        shader,
                    };

                    let mesh = obj::load_mesh(base.join(&path), &options)?;
                    debug!("mesh {} bounds: {:?}", path.display(), mesh.bounds());
                    mesh.into()
                }
            };

            scene.add(primitive);
        }

        Ok(scene)
    }

    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn add_material(&mut self, material: Material) -> ShaderId {
        self.materials.push(material);
        ShaderId(self.materials.len() - 1)
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn material(&self, shader: ShaderId) -> Option<&Material> {
        self.materials.get(shader.0)
    }

    /// Finds the nearest hit among all primitives, leaving it on the ray.
    pub fn trace<'a>(&'a self, ray: &mut Ray<'a>) -> bool {
        let mut hit = false;
        for primitive in &self.primitives {
            hit |= primitive.intersect(ray);
        }

        hit
    }
}
