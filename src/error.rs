//! Error types for the renderer

/// Errors that can occur while building or rendering a scene
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A zero-length direction was normalized
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,

    /// A camera was built with neither a direction nor a target
    #[error("camera needs either a direction or a target")]
    MissingDirection,

    /// Colour text that is not `#rrggbb`
    #[error("invalid colour: {0}")]
    InvalidColor(String),

    /// Scene description could not be parsed
    #[error("scene file error: {0}")]
    SceneFile(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, Error>;
