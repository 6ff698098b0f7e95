//! RGB colour with channels in [0, 1].
//!
//! Channels are not clamped while light accumulates; clamping only happens
//! when the colour is quantized to 8 bits per channel.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::str::FromStr;

use image::Rgb;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0., 0., 0.);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xff) as f32 / 255.,
            ((hex >> 8) & 0xff) as f32 / 255.,
            (hex & 0xff) as f32 / 255.,
        )
    }

    /// Componentwise product: light filtered through a surface.
    pub fn mix(self, other: Color) -> Self {
        Self::new(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }

    /// Componentwise sum: light accumulating on a surface.
    pub fn overlay(self, other: Color) -> Self {
        Self::new(
            self.red + other.red,
            self.green + other.green,
            self.blue + other.blue,
        )
    }

    /// Uniform intensity scale.
    pub fn tune(self, ratio: f32) -> Self {
        Self::new(self.red * ratio, self.green * ratio, self.blue * ratio)
    }

    pub fn to_hex(&self) -> u32 {
        let [r, g, b] = self.to_bytes();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    pub fn to_hex_string(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    /// Clamps each channel to [0, 1] and truncates it to 8 bits.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue),
        ]
    }

    pub fn to_rgb(&self) -> Rgb<u8> {
        Rgb(self.to_bytes())
    }

    /// Channels plus an opaque alpha, the layout shaders expect.
    pub fn to_rgba(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, 1.]
    }

    /// Sum of the channels, a cheap brightness measure.
    pub fn intensity(&self) -> f32 {
        self.red + self.green + self.blue
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.min(1.).max(0.) * 255.) as u8
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        self.overlay(other)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        self.red += other.red;
        self.green += other.green;
        self.blue += other.blue;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, other: Color) -> Color {
        self.mix(other)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, ratio: f32) -> Color {
        self.tune(ratio)
    }
}

impl MulAssign<f32> for Color {
    fn mul_assign(&mut self, ratio: f32) {
        self.red *= ratio;
        self.green *= ratio;
        self.blue *= ratio;
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(Error::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_hex)
            .map_err(|_| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn hex(h: u32) -> String {
        Color::from_hex(h).to_hex_string()
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(hex(0xffffff), "#ffffff");
        assert_eq!(hex(0x99aabb), "#99aabb");
        assert_eq!(hex(0x000000), "#000000");
        assert_eq!(hex(0x00000f), "#00000f");
    }

    #[test]
    fn test_mix() {
        let white = Color::from_hex(0xffffff);
        assert_eq!(white.mix(Color::from_hex(0x000000)), Color::from_hex(0x000000));
        assert_eq!(white.mix(white), white);
        assert_eq!(
            white.mix(Color::from_hex(0x010101)).to_hex_string(),
            hex(0x010101)
        );
        assert_eq!(
            Color::from_hex(0xffaa00)
                .mix(Color::from_hex(0x101010))
                .to_hex_string(),
            hex(0x100a00)
        );
    }

    #[test]
    fn test_overlay_and_tune() {
        let c = Color::new(0.25, 0.5, 0.75);
        assert_eq!(c.overlay(c), c.tune(2.));
        assert_eq!(c + c, c * 2.);

        let mut d = c;
        d += c;
        d *= 0.5;
        assert_eq!(d, c);
    }

    #[test]
    fn test_to_hex_clamps_and_truncates() {
        assert_eq!(Color::new(2., -1., 0.5).to_hex(), 0xff007f);
        assert_eq!(Color::new(0.999, 0., 0.).to_hex(), 0xfe0000);
    }

    #[test]
    fn test_hex_round_trip_every_channel_value() {
        for v in 0..=255u32 {
            for &h in &[v << 16, v << 8, v, (v << 16) | (v << 8) | v] {
                assert_eq!(Color::from_hex(h).to_hex(), h);
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("#ffaa00".parse::<Color>().unwrap(), Color::from_hex(0xffaa00));
        assert_eq!("112233".parse::<Color>().unwrap(), Color::from_hex(0x112233));
        assert!(matches!("#fff".parse::<Color>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#gggggg".parse::<Color>(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_rgba_alpha_is_opaque() {
        assert_eq!(Color::from_hex(0xff0000).to_rgba(), [1., 0., 0., 1.]);
    }
}
