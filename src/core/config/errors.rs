use crate::core::util::viewport_from_view::ViewportFromViewError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("max iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("initial hue must be within [0, 1], got {0}")]
    HueOutOfRange(f64),
    #[error("colour scale must be finite, got {0}")]
    NonFiniteColourScale(f64),
    #[error("image size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("aspect ratio must be a positive finite number, got {0}")]
    InvalidAspectRatio(f64),
    #[error("fractal parameter must be finite, got ({real}, {imag})")]
    NonFiniteParameter { real: f64, imag: f64 },
    #[error(transparent)]
    View(#[from] ViewportFromViewError),
}
