//! Configuration errors

use crate::pbrt::Float;
use thiserror::Error;

/// Rejected scene or render configuration. Raised while building the scene,
/// never during rendering.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Sphere radius must be finite and > 0.
    #[error("sphere radius must be > 0, got {0}")]
    InvalidRadius(Float),

    /// Sphere reflectivity must lie in [0, 1].
    #[error("sphere reflectivity must be in [0, 1], got {0}")]
    InvalidReflectivity(Float),

    /// Specular exponent must be -1 (disabled) or > 0.
    #[error("specular exponent must be -1 or > 0, got {0}")]
    InvalidSpecular(i64),

    /// Light intensity must be finite and >= 0.
    #[error("light intensity must be >= 0, got {0}")]
    InvalidIntensity(Float),

    /// A position or direction has a non-finite component.
    #[error("{0} has a non-finite component")]
    NonFiniteVector(&'static str),

    /// A directional light needs a non-zero direction.
    #[error("directional light direction must be non-zero")]
    ZeroDirection,

    /// A color channel is outside [0, 255].
    #[error("color channel must be in [0, 255], got {0}")]
    InvalidColorChannel(i64),

    /// Canvas dimensions must be > 0 and the pixel count bounded.
    #[error("canvas must be at least 1x1 and at most {max_pixels} pixels, got {width}x{height}")]
    InvalidCanvas {
        width: usize,
        height: usize,
        max_pixels: usize,
    },

    /// Viewport dimensions and distance must be finite and > 0.
    #[error("viewport dimensions must be > 0, got {width}x{height} at distance {distance}")]
    InvalidViewport {
        width: Float,
        height: Float,
        distance: Float,
    },

    /// Recursion depth exceeds the supported limit.
    #[error("recursion depth must be in [0, {limit}], got {depth}")]
    InvalidDepth { depth: i64, limit: u32 },

    /// A required parameter was not given.
    #[error("missing {0}")]
    MissingParameter(&'static str),
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
