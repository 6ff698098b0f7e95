//! Recursive ray tracer for reflective spheres lit by point lights.
//!
//! A [`Camera`](camera::Camera) turns pixels into primary rays and a
//! [`Scene`](scene::Scene) shades each ray with ambient, diffuse and specular
//! terms, hard shadows and mirror reflection up to a depth limit.

pub mod camera;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod gpu;
pub mod light;
pub mod logger;
pub mod material;
pub mod ray;
pub mod scene;
pub mod scene_file;
pub mod shape;
pub mod vector;

pub use error::{Error, Result};
