use serde::Deserialize;

/// Switches and limits for the shader.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Recursion limit. A ray at this depth contributes black.
    #[serde(alias = "max_trace_times")]
    pub max_reflect_times: u32,
    /// Glow radius around lights close to a ray's line
    pub cast_range: f32,
    /// Adds a glow for lights seen along a ray
    pub enable_direct_light: bool,
    pub enable_diffuse: bool,
    pub enable_specular: bool,
    /// Exported with the GPU feed. The CPU shader does not refract.
    pub enable_refraction: bool,
    pub refraction: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_reflect_times: 6,
            cast_range: 0.7,
            enable_direct_light: false,
            enable_diffuse: true,
            enable_specular: true,
            enable_refraction: true,
            refraction: 0.75,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config: RenderConfig = toml::from_str("max_trace_times = 3\nenable_specular = false").unwrap();
        assert_eq!(config.max_reflect_times, 3);
        assert!(!config.enable_specular);
        assert!(config.enable_diffuse);
        assert_eq!(config.cast_range, 0.7);
    }
}
