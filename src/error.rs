//! Crate error type.
//!
//! The tracing core itself is infallible; errors come from scene
//! construction, configuration loading and image output.

use std::fmt;
use std::path::PathBuf;

/// Errors reported by scene setup and the I/O collaborators.
#[derive(Debug)]
pub enum Error {
    /// Sphere radius was zero, negative or not finite.
    InvalidRadius(f32),
    /// A sphere referred to a material name that is not defined.
    UnknownMaterial(String),
    /// Image dimensions or sample counts that cannot be rendered.
    InvalidSettings(String),
    /// Output path has an extension no sink handles.
    UnsupportedFormat(PathBuf),
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// The TOML configuration could not be parsed.
    Config(toml::de::Error),
    /// PNG encoding failed.
    Image(image::ImageError),
    /// EXR encoding failed.
    Exr(exr::error::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRadius(r) => write!(f, "sphere radius must be positive and finite, got {r}"),
            Error::UnknownMaterial(name) => write!(f, "unknown material '{name}'"),
            Error::InvalidSettings(msg) => write!(f, "invalid render settings: {msg}"),
            Error::UnsupportedFormat(path) => write!(
                f,
                "unsupported output format '{}', expected .ppm, .png or .exr",
                path.display()
            ),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Config(e) => write!(f, "invalid configuration: {e}"),
            Error::Image(e) => write!(f, "image encoding failed: {e}"),
            Error::Exr(e) => write!(f, "EXR encoding failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::Image(e) => Some(e),
            Error::Exr(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e)
    }
}

impl From<exr::error::Error> for Error {
    fn from(e: exr::error::Error) -> Self {
        Error::Exr(e)
    }
}
