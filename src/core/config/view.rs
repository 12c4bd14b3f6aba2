use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::util::viewport_from_view::{
    DEFAULT_BASE_HALF_WIDTH, ViewportFromViewError, viewport_from_view,
};
use serde::{Deserialize, Serialize};

/// Where the camera looks: a centre, a zoom factor and the unzoomed extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    pub center: Complex,
    pub zoom: f64,
    pub base_half_width: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            zoom: 1.0,
            base_half_width: DEFAULT_BASE_HALF_WIDTH,
        }
    }
}

impl View {
    pub fn viewport(&self, aspect_ratio: f64) -> Result<Viewport, ViewportFromViewError> {
        viewport_from_view(self.center, self.zoom, aspect_ratio, self.base_half_width)
    }

    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }
}
