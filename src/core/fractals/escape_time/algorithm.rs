use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::iterator::{
    EscapeOutcome, EscapeTimeIterator, IterationParams,
};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Maps each pixel onto the viewport and runs the escape-time loop there.
#[derive(Debug)]
pub struct EscapeTimeAlgorithm {
    pixel_rect: PixelRect,
    viewport: Viewport,
    iterator: EscapeTimeIterator,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = EscapeOutcome;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z0 = pixel_to_complex_coords(pixel, self.pixel_rect, self.viewport)?;

        Ok(self.iterator.iterate(z0))
    }
}

impl EscapeTimeAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        viewport: Viewport,
        params: IterationParams,
    ) -> Result<Self, EscapeTimeError> {
        if params.max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            viewport,
            iterator: EscapeTimeIterator::new(params),
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}
