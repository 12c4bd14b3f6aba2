use crate::core::data::complex::Complex;
use crate::core::data::viewport::{Viewport, ViewportError};
use thiserror::Error;

/// Half-width of the unzoomed view, in plane units.
pub const DEFAULT_BASE_HALF_WIDTH: f64 = 2.3;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportFromViewError {
    #[error("zoom must be a positive finite number, got {0}")]
    InvalidZoom(f64),
    #[error("aspect ratio must be a positive finite number, got {0}")]
    InvalidAspectRatio(f64),
    #[error("base half-width must be a positive finite number, got {0}")]
    InvalidBaseHalfWidth(f64),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Derives the viewport for a centre, zoom level and aspect ratio.
///
/// The symmetric box is sized from the aspect ratio first and only then
/// scaled by `1 / zoom` and moved onto `center`. Swapping those steps
/// changes the output.
pub fn viewport_from_view(
    center: Complex,
    zoom: f64,
    aspect_ratio: f64,
    base_half_width: f64,
) -> Result<Viewport, ViewportFromViewError> {
    if !(zoom.is_finite() && zoom > 0.0) {
        return Err(ViewportFromViewError::InvalidZoom(zoom));
    }
    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return Err(ViewportFromViewError::InvalidAspectRatio(aspect_ratio));
    }
    if !(base_half_width.is_finite() && base_half_width > 0.0) {
        return Err(ViewportFromViewError::InvalidBaseHalfWidth(base_half_width));
    }

    let x_max = base_half_width;
    let y_max = if aspect_ratio > 1.0 {
        x_max / aspect_ratio
    } else {
        x_max * aspect_ratio
    };
    let x_min = -x_max;
    let y_min = -y_max;

    let scale = 1.0 / zoom;

    Ok(Viewport::new(
        center.real + x_min * scale,
        center.real + x_max * scale,
        center.imag + y_min * scale,
        center.imag + y_max * scale,
    )?)
}
