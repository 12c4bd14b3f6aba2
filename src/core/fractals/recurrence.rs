use crate::core::data::complex::Complex;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One step of a recurrence: `(z, z0, c) -> z_next`.
///
/// `None` marks a numeric singularity at `z`.
pub type StepFn = fn(Complex, Complex, Complex) -> Option<Complex>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// `z² + z0`, the pixel's own coordinate is the additive term.
    #[default]
    Mandelbrot,
    /// `z² + c` for one `c` shared by the whole image.
    Julia,
    /// `z^(1/z) + c`, undefined at `z = 0`.
    Exotic,
}

impl Recurrence {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia, Self::Exotic];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::Exotic => "Exotic",
        }
    }

    /// Modulus above which an orbit counts as escaped.
    ///
    /// The exotic family escapes at 1, not 2.
    #[must_use]
    pub const fn escape_radius(self) -> f64 {
        match self {
            Self::Mandelbrot | Self::Julia => 2.0,
            Self::Exotic => 1.0,
        }
    }

    /// Whether the configured `c` takes part in the recurrence.
    #[must_use]
    pub const fn uses_parameter(self) -> bool {
        !matches!(self, Self::Mandelbrot)
    }

    #[must_use]
    pub fn step_fn(self) -> StepFn {
        match self {
            Self::Mandelbrot => mandelbrot_step,
            Self::Julia => julia_step,
            Self::Exotic => exotic_step,
        }
    }
}

impl std::fmt::Display for Recurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

fn mandelbrot_step(z: Complex, z0: Complex, _c: Complex) -> Option<Complex> {
    Some(z * z + z0)
}

fn julia_step(z: Complex, _z0: Complex, c: Complex) -> Option<Complex> {
    Some(z * z + c)
}

fn exotic_step(z: Complex, _z0: Complex, c: Complex) -> Option<Complex> {
    let exponent = z.reciprocal()?;

    Some(z.powc(exponent) + c)
}
