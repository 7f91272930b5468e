//! TOML scene and render configuration.
//!
//! ```toml
//! [image]
//! width = 400
//! height = 225
//! samples_per_pixel = 100
//! max_depth = 50
//! seed = 7
//!
//! [camera]
//! lookfrom = [0.0, 0.0, 0.0]
//! lookat = [0.0, 0.0, -1.0]
//! vfov = 90.0
//!
//! [background]
//! horizon = [0.68, 0.44, 0.87]
//! zenith = [0.95, 0.68, 0.84]
//!
//! [materials.ground]
//! type = "lambertian"
//! albedo = [0.8, 0.8, 0.0]
//!
//! [[spheres]]
//! center = [0.0, -100.5, -1.0]
//! radius = 100.0
//! material = "ground"
//! ```
//!
//! Every section is optional; missing values fall back to the built-in
//! defaults.

use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::camera::CameraSettings;
use crate::error::Result;
use crate::material::Material;
use crate::render::{Background, Renderer};
use crate::vec3::Vec3;

/// Whole configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output image and sampling settings.
    pub image: ImageConfig,
    /// Camera placement.
    pub camera: CameraConfig,
    /// Sky gradient.
    pub background: BackgroundConfig,
    /// Named materials, referenced by spheres.
    pub materials: BTreeMap<String, MaterialConfig>,
    /// Scene geometry.
    pub spheres: Vec<SphereConfig>,
}

/// `[image]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Rays averaged per pixel.
    pub samples_per_pixel: u32,
    /// Bounce limit per primary ray.
    pub max_depth: u32,
    /// Fixed RNG seed; random per run when absent.
    pub seed: Option<u64>,
}

/// `[camera]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Camera position.
    pub lookfrom: [f32; 3],
    /// Point the camera faces.
    pub lookat: [f32; 3],
    /// Up direction.
    pub vup: [f32; 3],
    /// Vertical field of view in degrees.
    pub vfov: f32,
}

/// `[background]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundConfig {
    /// Sky color looking straight down.
    pub horizon: [f32; 3],
    /// Sky color looking straight up.
    pub zenith: [f32; 3],
}

/// One `[materials.<name>]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
#[allow(missing_docs)]
pub enum MaterialConfig {
    Lambertian { albedo: [f32; 3] },
    Metal {
        albedo: [f32; 3],
        #[serde(default)]
        fuzz: f32,
    },
}

/// One `[[spheres]]` entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereConfig {
    /// Sphere center.
    pub center: [f32; 3],
    /// Must be positive.
    pub radius: f32,
    /// Name of an entry in `materials`.
    pub material: String,
}

impl Default for Config {
    /// Small sphere resting on a large ground sphere.
    fn default() -> Self {
        let mut materials = BTreeMap::new();
        materials.insert(
            "ground".to_string(),
            MaterialConfig::Lambertian {
                albedo: [0.5, 0.5, 0.5],
            },
        );
        materials.insert(
            "center".to_string(),
            MaterialConfig::Lambertian {
                albedo: [0.5, 0.5, 0.5],
            },
        );

        Self {
            image: ImageConfig::default(),
            camera: CameraConfig::default(),
            background: BackgroundConfig::default(),
            materials,
            spheres: vec![
                SphereConfig {
                    center: [0.0, 0.0, -1.0],
                    radius: 0.5,
                    material: "center".to_string(),
                },
                SphereConfig {
                    center: [0.0, -100.5, -1.0],
                    radius: 100.0,
                    material: "ground".to_string(),
                },
            ],
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        let renderer = Renderer::default();
        Self {
            width: renderer.image_width,
            height: renderer.image_height,
            samples_per_pixel: renderer.samples_per_pixel,
            max_depth: renderer.max_depth,
            seed: None,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        let settings = CameraSettings::default();
        Self {
            lookfrom: settings.lookfrom.to_array(),
            lookat: settings.lookat.to_array(),
            vup: settings.vup.to_array(),
            vfov: settings.vfov,
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let background = Background::default();
        Self {
            horizon: background.horizon.to_array(),
            zenith: background.zenith.to_array(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Render settings derived from the `[image]` and `[background]` sections.
    pub fn renderer(&self) -> Renderer {
        Renderer {
            image_width: self.image.width,
            image_height: self.image.height,
            samples_per_pixel: self.image.samples_per_pixel,
            max_depth: self.image.max_depth,
            background: Background {
                horizon: Vec3::from_array(self.background.horizon),
                zenith: Vec3::from_array(self.background.zenith),
            },
            show_progress: true,
        }
    }

    /// Camera settings; the aspect ratio follows the image size.
    pub fn camera_settings(&self) -> CameraSettings {
        let aspect_ratio = if self.image.height == 0 {
            1.0
        } else {
            self.image.width as f32 / self.image.height as f32
        };
        CameraSettings {
            lookfrom: Vec3::from_array(self.camera.lookfrom),
            lookat: Vec3::from_array(self.camera.lookat),
            vup: Vec3::from_array(self.camera.vup),
            vfov: self.camera.vfov,
            aspect_ratio,
        }
    }
}

impl From<MaterialConfig> for Material {
    fn from(config: MaterialConfig) -> Self {
        match config {
            MaterialConfig::Lambertian { albedo } => Material::lambertian(Vec3::from_array(albedo)),
            MaterialConfig::Metal { albedo, fuzz } => Material::metal(Vec3::from_array(albedo), fuzz),
        }
    }
}
