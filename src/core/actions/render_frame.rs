use thiserror::Error;
use tracing::{debug, warn};

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferCancelableError, generate_pixel_buffer_cancelable,
};
use crate::core::actions::progress::{NoProgress, ProgressObserver};
use crate::core::config::errors::ConfigError;
use crate::core::config::render_config::RenderConfig;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::colouring::errors::ColourMapError;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    Algorithm(#[from] EscapeTimeError),
    #[error("failed to map pixel: {0}")]
    Mapping(#[from] PixelToComplexCoordsError),
    #[error("failed to colour pixel: {0}")]
    Colouring(#[from] ColourMapError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl RenderError {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

impl From<GenerateFractalError<PixelToComplexCoordsError>> for RenderError {
    fn from(err: GenerateFractalError<PixelToComplexCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Mapping(e),
        }
    }
}

impl From<GeneratePixelBufferCancelableError<ColourMapError>> for RenderError {
    fn from(err: GeneratePixelBufferCancelableError<ColourMapError>) -> Self {
        match err {
            GeneratePixelBufferCancelableError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferCancelableError::ColourMap(e) => Self::Colouring(e),
            GeneratePixelBufferCancelableError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Renders one frame of `config` over `viewport`.
pub fn render(config: &RenderConfig, viewport: Viewport) -> Result<PixelBuffer, RenderError> {
    render_cancelable(config, viewport, &NeverCancel, &NoProgress)
}

/// Renders one frame, stopping early once `cancel` fires.
///
/// Outcomes for every pixel are computed first, rows in parallel, and only
/// then coloured. Pixels that never escape keep the black background.
pub fn render_cancelable<C, P>(
    config: &RenderConfig,
    viewport: Viewport,
    cancel: &C,
    progress: &P,
) -> Result<PixelBuffer, RenderError>
where
    C: CancelToken,
    P: ProgressObserver,
{
    config.validate()?;

    if !config.aspect_ratio_matches() {
        warn!(
            width = config.width,
            height = config.height,
            aspect_ratio = config.aspect_ratio,
            "image size does not match the aspect ratio, the fractal will look stretched"
        );
    }

    let pixel_rect = config.pixel_rect()?;
    let algorithm = EscapeTimeAlgorithm::new(pixel_rect, viewport, config.iteration_params())?;
    let colour_map = config.colour_map();

    debug!(
        recurrence = %config.recurrence,
        colouring = %colour_map.mode(),
        width = config.width,
        height = config.height,
        max_iterations = config.max_iterations,
        "rendering frame"
    );

    let outcomes =
        generate_fractal_parallel_rayon_cancelable(pixel_rect, &algorithm, cancel, progress)?;

    Ok(generate_pixel_buffer_cancelable(
        outcomes,
        &colour_map,
        pixel_rect,
        cancel,
    )?)
}
