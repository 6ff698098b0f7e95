use crate::color::Color;

/// Optical properties of a surface under the Phong model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    pub reflectivity: Color,
    /// Phong exponent
    pub shininess: f32,
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32, reflectivity: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            reflectivity,
            shininess,
        }
    }
}
