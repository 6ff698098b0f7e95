//! Uniform blocks for a fragment-shader port of the shader.
//!
//! Layouts follow std140: a vec3 takes 16 bytes, colours are vec4 with an
//! opaque alpha, and fields keep the order of the GLSL structs. Nothing here
//! talks to a graphics API.

use crate::camera::Camera;
use crate::color::Color;
use crate::light::Light;
use crate::material::Material;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::vector::{Direction, Position};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuSettings {
    pub ambient: [f32; 4],
    pub background: [f32; 4],
    pub max_reflect_times: i32,
    pub cast_range: f32,
    pub enable_direct_light: u32,
    pub enable_diffuse: u32,
    pub enable_specular: u32,
    pub enable_refraction: u32,
    pub refraction: f32,
    pub sphere_count: u32,
    pub light_count: u32,
    _padding_u0: u32,
    _padding_u1: u32,
    _padding_u2: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuCamera {
    pub position: [f32; 3],
    _padding_0: f32,
    pub direction: [f32; 3],
    _padding_1: f32,
    /// width, height, depth
    pub viewport: [f32; 3],
    _padding_2: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuMaterial {
    pub shininess: f32,
    _padding: [f32; 3],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub reflectivity: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuSphere {
    pub position: [f32; 3],
    _padding_0: f32,
    pub material: GpuMaterial,
    pub radius: f32,
    _padding_1: [f32; 3],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuLight {
    pub position: [f32; 3],
    _padding: f32,
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

fn xyz(p: &Position) -> [f32; 3] {
    [p.x, p.y, p.z]
}

fn dir(d: &Direction) -> [f32; 3] {
    [d.x, d.y, d.z]
}

fn rgba(c: &Color) -> [f32; 4] {
    c.to_rgba()
}

impl From<&Camera> for GpuCamera {
    fn from(camera: &Camera) -> Self {
        let v = camera.viewport;
        Self {
            position: xyz(&camera.position),
            _padding_0: 0.,
            direction: dir(&camera.direction),
            _padding_1: 0.,
            viewport: [v.width, v.height, v.depth],
            _padding_2: 0.,
        }
    }
}

impl From<&Material> for GpuMaterial {
    fn from(material: &Material) -> Self {
        Self {
            shininess: material.shininess,
            _padding: [0.; 3],
            ambient: rgba(&material.ambient),
            diffuse: rgba(&material.diffuse),
            specular: rgba(&material.specular),
            reflectivity: rgba(&material.reflectivity),
        }
    }
}

impl From<&Shape> for GpuSphere {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Sphere(sphere) => Self {
                position: xyz(&sphere.center),
                _padding_0: 0.,
                material: (&sphere.material).into(),
                radius: sphere.radius,
                _padding_1: [0.; 3],
            },
        }
    }
}

impl From<&Light> for GpuLight {
    fn from(light: &Light) -> Self {
        Self {
            position: xyz(&light.position),
            _padding: 0.,
            diffuse: rgba(&light.diffuse),
            specular: rgba(&light.specular),
        }
    }
}

/// Snapshot of a scene laid out for uniform upload.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuScene {
    pub settings: GpuSettings,
    pub camera: GpuCamera,
    pub spheres: Vec<GpuSphere>,
    pub lights: Vec<GpuLight>,
}

impl GpuScene {
    pub fn from_scene(scene: &Scene) -> Self {
        let config = &scene.config;
        let settings = GpuSettings {
            ambient: rgba(&scene.ambient),
            background: rgba(&scene.background),
            max_reflect_times: config.max_reflect_times as i32,
            cast_range: config.cast_range,
            enable_direct_light: config.enable_direct_light as u32,
            enable_diffuse: config.enable_diffuse as u32,
            enable_specular: config.enable_specular as u32,
            enable_refraction: config.enable_refraction as u32,
            refraction: config.refraction,
            sphere_count: scene.shapes.len() as u32,
            light_count: scene.lights.len() as u32,
            _padding_u0: 0,
            _padding_u1: 0,
            _padding_u2: 0,
        };

        Self {
            settings,
            camera: (&scene.camera).into(),
            spheres: scene.shapes.iter().map(GpuSphere::from).collect(),
            lights: scene.lights.iter().map(GpuLight::from).collect(),
        }
    }

    pub fn settings_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.settings)
    }

    pub fn camera_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.camera)
    }

    pub fn sphere_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spheres)
    }

    pub fn light_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}
