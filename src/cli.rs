use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::color::Color;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "mirrorball")]
#[command(about = "Renders reflective spheres lit by point lights")]
pub struct Args {
    /// Scene description (TOML). Defaults to the built-in sample scene
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Output file; the extension picks the image format
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Moves the camera along the line through the origin by this fraction
    #[arg(long, allow_hyphen_values = true)]
    pub zoom: Option<f32>,

    /// Orbits the camera around the origin, horizontal angle in radians
    #[arg(long, default_value_t = 0., allow_hyphen_values = true)]
    pub orbit_h: f32,

    /// Orbits the camera around the origin, vertical angle in radians
    #[arg(long, default_value_t = 0., allow_hyphen_values = true)]
    pub orbit_v: f32,

    /// Overrides the scene background, as #rrggbb
    #[arg(long)]
    pub background: Option<Color>,

    /// Reflection depth limit, overriding the scene's
    #[arg(long)]
    pub max_reflect_times: Option<u32>,

    /// Number of animation frames; each frame moves the tracked lights
    #[arg(long, default_value_t = 1)]
    pub frames: u32,

    /// Animation clock step between frames, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub frame_step_ms: u64,
}
