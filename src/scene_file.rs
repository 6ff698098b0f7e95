//! TOML scene descriptions.
//!
//! Colours are 24-bit hex integers (`0xrrggbb`), points and directions are
//! three-element float arrays.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::camera::{Camera, Viewport};
use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::light::{Light, LightTrack};
use crate::material::Material;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::vector::{Direction, Position};

#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    pub camera: CameraSpec,
    #[serde(default)]
    pub ambient: u32,
    #[serde(default)]
    pub background: u32,
    #[serde(default)]
    pub spheres: Vec<SphereSpec>,
    #[serde(default)]
    pub lights: Vec<LightSpec>,
    #[serde(default)]
    pub tracks: Vec<TrackSpec>,
    #[serde(default)]
    pub config: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CameraSpec {
    pub position: [f32; 3],
    pub viewport: Viewport,
    pub direction: Option<[f32; 3]>,
    pub target: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SphereSpec {
    pub position: [f32; 3],
    pub radius: f32,
    pub material: MaterialSpec,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MaterialSpec {
    pub ambient: u32,
    pub diffuse: u32,
    pub specular: u32,
    pub shininess: f32,
    pub reflectivity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightSpec {
    pub position: [f32; 3],
    pub diffuse: u32,
    pub specular: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSpec {
    pub light: usize,
    #[serde(default)]
    pub center: [f32; 3],
    pub distance: f32,
}

fn position([x, y, z]: [f32; 3]) -> Position {
    Position::new(x, y, z)
}

impl From<MaterialSpec> for Material {
    fn from(spec: MaterialSpec) -> Self {
        Material::new(
            Color::from_hex(spec.ambient),
            Color::from_hex(spec.diffuse),
            Color::from_hex(spec.specular),
            spec.shininess,
            Color::from_hex(spec.reflectivity),
        )
    }
}

impl SceneFile {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading scene from {}", path.display());
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn into_scene(self) -> Result<Scene> {
        let mut builder = Camera::builder(position(self.camera.position)).viewport(self.camera.viewport);
        if let Some([x, y, z]) = self.camera.direction {
            builder = builder.direction(Direction::new(x, y, z));
        }
        if let Some(target) = self.camera.target {
            builder = builder.target(position(target));
        }

        let mut scene = Scene::new(builder.build()?);
        scene.ambient = Color::from_hex(self.ambient);
        scene.background = Color::from_hex(self.background);
        scene.config = self.config;
        scene.shapes = self
            .spheres
            .into_iter()
            .map(|s| Shape::sphere(position(s.position), s.radius, s.material.into()))
            .collect();
        scene.lights = self
            .lights
            .into_iter()
            .map(|l| Light::new(position(l.position), Color::from_hex(l.diffuse), Color::from_hex(l.specular)))
            .collect();
        scene.tracks = self
            .tracks
            .into_iter()
            .map(|t| LightTrack::new(t.light, position(t.center), t.distance))
            .collect();
        Ok(scene)
    }
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        SceneFile::load(path)?.into_scene()
    }
}
