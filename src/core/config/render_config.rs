use crate::core::config::errors::ConfigError;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::colouring::kinds::ColouringMode;
use crate::core::fractals::colouring::smooth::SmoothColourMap;
use crate::core::fractals::escape_time::iterator::IterationParams;
use crate::core::fractals::recurrence::Recurrence;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITERATIONS: u32 = 250;
pub const DEFAULT_HUE: f64 = 0.5;
pub const DEFAULT_COLOUR_SCALE: f64 = 10.0;
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;
pub const DEFAULT_JULIA_PARAMETER: Complex = Complex::new(-0.834, -0.171);

/// Relative difference between `width / height` and `aspect_ratio` that is
/// still considered a match.
const ASPECT_RATIO_TOLERANCE: f64 = 1e-3;

/// Everything needed to render one image, apart from where to look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub recurrence: Recurrence,
    /// Ignored by the Mandelbrot recurrence.
    pub c: Complex,
    pub max_iterations: u32,
    pub hue: f64,
    pub colour_scale: f64,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    /// `None` picks the default mode for the recurrence.
    pub colouring: Option<ColouringMode>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            recurrence: Recurrence::default(),
            c: DEFAULT_JULIA_PARAMETER,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            hue: DEFAULT_HUE,
            colour_scale: DEFAULT_COLOUR_SCALE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            colouring: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }
        if !(0.0..=1.0).contains(&self.hue) {
            return Err(ConfigError::HueOutOfRange(self.hue));
        }
        if !self.colour_scale.is_finite() {
            return Err(ConfigError::NonFiniteColourScale(self.colour_scale));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }
        if !(self.c.real.is_finite() && self.c.imag.is_finite()) {
            return Err(ConfigError::NonFiniteParameter {
                real: self.c.real,
                imag: self.c.imag,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn colouring_mode(&self) -> ColouringMode {
        self.colouring
            .unwrap_or_else(|| ColouringMode::default_for(self.recurrence))
    }

    #[must_use]
    pub fn iteration_params(&self) -> IterationParams {
        IterationParams {
            recurrence: self.recurrence,
            c: self.c,
            max_iterations: self.max_iterations,
            track_trajectory: self.colouring_mode().tracks_trajectory(),
        }
    }

    #[must_use]
    pub fn colour_map(&self) -> SmoothColourMap {
        SmoothColourMap::new(
            self.colouring_mode(),
            self.hue,
            self.colour_scale,
            self.max_iterations,
        )
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, PixelRectError> {
        PixelRect::from_size(self.width, self.height)
    }

    /// Whether the image dimensions agree with the configured aspect ratio.
    #[must_use]
    pub fn aspect_ratio_matches(&self) -> bool {
        if self.height == 0 {
            return false;
        }

        let actual = self.width as f64 / self.height as f64;

        ((actual - self.aspect_ratio) / self.aspect_ratio).abs() <= ASPECT_RATIO_TOLERANCE
    }
}
