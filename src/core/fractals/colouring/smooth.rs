use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::colouring::errors::ColourMapError;
use crate::core::fractals::colouring::hsv::hsv_to_rgb;
use crate::core::fractals::colouring::kinds::ColouringMode;
use crate::core::fractals::escape_time::iterator::{EscapeOutcome, Orbit};

pub const SATURATION: f64 = 0.79;
pub const VALUE: f64 = 0.59;

/// Colour of points that never escaped.
pub const BACKGROUND_COLOUR: Colour = Colour::BLACK;
/// Colour of points where the recurrence is undefined.
pub const SINGULAR_COLOUR: Colour = Colour::WHITE;
pub const FLAT_COLOUR: Colour = Colour::WHITE;

/// Smooth HSV colouring of escape outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothColourMap {
    mode: ColouringMode,
    initial_hue: f64,
    colour_scale: f64,
    max_iterations: u32,
}

impl SmoothColourMap {
    #[must_use]
    pub fn new(
        mode: ColouringMode,
        initial_hue: f64,
        colour_scale: f64,
        max_iterations: u32,
    ) -> Self {
        Self {
            mode,
            initial_hue,
            colour_scale,
            max_iterations,
        }
    }

    #[must_use]
    pub fn mode(&self) -> ColouringMode {
        self.mode
    }

    /// Hue for an escaped orbit under the configured mode.
    #[must_use]
    pub fn hue(&self, orbit: &Orbit) -> f64 {
        let max_iterations = self.max_iterations as f64;

        match self.mode {
            ColouringMode::Continuous => {
                let modulus = orbit.z.magnitude();
                (orbit.iteration as f64 + 1.0 - modulus.log2().log2()) / max_iterations
            }
            ColouringMode::Trajectory => {
                self.initial_hue + self.colour_scale * (orbit.trajectory / max_iterations)
            }
            ColouringMode::Flat => 0.0,
        }
    }
}

impl ColourMap<EscapeOutcome> for SmoothColourMap {
    type Failure = ColourMapError;

    fn map(&self, outcome: EscapeOutcome) -> Result<Colour, Self::Failure> {
        let orbit = match outcome {
            EscapeOutcome::Exhausted(_) => return Ok(BACKGROUND_COLOUR),
            EscapeOutcome::Singular(_) => return Ok(SINGULAR_COLOUR),
            EscapeOutcome::Escaped(orbit) => orbit,
        };

        if orbit.iteration >= self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: orbit.iteration,
                max_iterations: self.max_iterations,
            });
        }

        if self.mode == ColouringMode::Flat {
            return Ok(FLAT_COLOUR);
        }

        Ok(hsv_to_rgb(self.hue(&orbit), SATURATION, VALUE))
    }

    fn display_name(&self) -> &str {
        self.mode.display_name()
    }
}
