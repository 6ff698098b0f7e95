use std::time::Duration;

use crate::color::Color;
use crate::vector::Position;

/// Length of one full orbit cycle, in milliseconds.
const ORBIT_PERIOD_MS: u128 = 1000 * 60 * 60;

/// A point light. No attenuation, no area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Position,
    pub diffuse: Color,
    pub specular: Color,
}

impl Light {
    pub fn new(position: Position, diffuse: Color, specular: Color) -> Self {
        Self {
            position,
            diffuse,
            specular,
        }
    }
}

/// Moves one light around `center` as the animation clock advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightTrack {
    /// Index of the light in the scene's light list
    pub light: usize,
    pub center: Position,
    pub distance: f32,
}

impl LightTrack {
    pub fn new(light: usize, center: Position, distance: f32) -> Self {
        Self {
            light,
            center,
            distance,
        }
    }

    /// Where the tracked light sits at `playtime`.
    ///
    /// Each light circles in a different axis plane: the sine offset goes to
    /// axis `i`, the cosine offset to axis `i + 1`, and axis `i + 2` stays on
    /// the centre, where `i` is the light index.
    pub fn position_at(&self, playtime: Duration) -> Position {
        let angle = (playtime.as_millis() % ORBIT_PERIOD_MS) as f32 / ORBIT_PERIOD_MS as f32 * 360.;
        let angle = angle * (self.light + 1) as f32 * 2.;
        let offsets = [angle.sin() * self.distance, angle.cos() * self.distance, 0.];

        let mut position = self.center;
        for (j, offset) in offsets.iter().enumerate() {
            let k = (self.light + j) % 3;
            position[k] = self.center[k] + offset;
        }
        position
    }
}
