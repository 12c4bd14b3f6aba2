use crate::core::data::complex::Complex;
use crate::core::fractals::recurrence::{Recurrence, StepFn};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationParams {
    pub recurrence: Recurrence,
    /// Shared parameter for the Julia and exotic families.
    pub c: Complex,
    pub max_iterations: u32,
    /// Accumulate `exp(-|z|)` along the orbit for trajectory colouring.
    pub track_trajectory: bool,
}

/// Progress of a single orbit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orbit {
    /// Number of steps taken so far.
    pub iteration: u32,
    pub z: Complex,
    pub trajectory: f64,
}

/// Terminal state of a pixel's orbit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeOutcome {
    /// The escape test passed after `iteration` steps.
    Escaped(Orbit),
    /// `max_iterations` escape tests failed; the point is presumed in the set.
    Exhausted(Orbit),
    /// The recurrence is undefined at the current iterate.
    Singular(Orbit),
}

impl EscapeOutcome {
    #[must_use]
    pub fn orbit(&self) -> Orbit {
        match *self {
            Self::Escaped(orbit) | Self::Exhausted(orbit) | Self::Singular(orbit) => orbit,
        }
    }

    #[must_use]
    pub fn escape_iteration(&self) -> Option<u32> {
        match self {
            Self::Escaped(orbit) => Some(orbit.iteration),
            Self::Exhausted(_) | Self::Singular(_) => None,
        }
    }

    #[must_use]
    pub fn final_z(&self) -> Complex {
        self.orbit().z
    }

    #[must_use]
    pub fn trajectory(&self) -> f64 {
        self.orbit().trajectory
    }
}

enum PixelState {
    Iterating(Orbit),
    Done(EscapeOutcome),
}

/// Escape-time evaluator with its recurrence resolved once up front.
#[derive(Debug, Copy, Clone)]
pub struct EscapeTimeIterator {
    step: StepFn,
    escape_radius: f64,
    c: Complex,
    max_iterations: u32,
    track_trajectory: bool,
}

impl EscapeTimeIterator {
    #[must_use]
    pub fn new(params: IterationParams) -> Self {
        Self {
            step: params.recurrence.step_fn(),
            escape_radius: params.recurrence.escape_radius(),
            c: params.c,
            max_iterations: params.max_iterations,
            track_trajectory: params.track_trajectory,
        }
    }

    #[must_use]
    pub fn iterate(&self, z0: Complex) -> EscapeOutcome {
        let mut state = PixelState::Iterating(self.start(z0));

        loop {
            match state {
                PixelState::Iterating(orbit) => state = self.advance(orbit, z0),
                PixelState::Done(outcome) => return outcome,
            }
        }
    }

    fn start(&self, z0: Complex) -> Orbit {
        // The starting point is counted once here and again by the first step.
        let trajectory = if self.track_trajectory {
            (-z0.magnitude()).exp()
        } else {
            0.0
        };

        Orbit {
            iteration: 0,
            z: z0,
            trajectory,
        }
    }

    fn advance(&self, mut orbit: Orbit, z0: Complex) -> PixelState {
        if orbit.iteration >= self.max_iterations {
            return PixelState::Done(EscapeOutcome::Exhausted(orbit));
        }

        if self.track_trajectory {
            orbit.trajectory += (-orbit.z.magnitude()).exp();
        }

        if self.has_escaped(orbit.z) {
            return PixelState::Done(EscapeOutcome::Escaped(orbit));
        }

        match (self.step)(orbit.z, z0, self.c) {
            Some(z) => PixelState::Iterating(Orbit {
                iteration: orbit.iteration + 1,
                z,
                trajectory: orbit.trajectory,
            }),
            None => PixelState::Done(EscapeOutcome::Singular(orbit)),
        }
    }

    fn has_escaped(&self, z: Complex) -> bool {
        // NaN and infinite moduli count as escaped.
        !(z.magnitude() <= self.escape_radius)
    }
}

/// Runs the escape-time loop for one starting point.
#[must_use]
pub fn iterate(z0: Complex, params: &IterationParams) -> EscapeOutcome {
    EscapeTimeIterator::new(*params).iterate(z0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(recurrence: Recurrence, c: Complex, max_iterations: u32) -> IterationParams {
        IterationParams {
            recurrence,
            c,
            max_iterations,
            track_trajectory: false,
        }
    }

    #[test]
    fn mandelbrot_origin_never_escapes() {
        let outcome = iterate(Complex::ZERO, &params(Recurrence::Mandelbrot, Complex::ZERO, 50));

        assert!(matches!(outcome, EscapeOutcome::Exhausted(_)));
        assert_eq!(outcome.escape_iteration(), None);
        assert_eq!(outcome.orbit().iteration, 50);
    }

    #[test]
    fn mandelbrot_far_point_escapes_before_the_first_step() {
        let z0 = Complex::new(2.0, 2.0);

        let outcome = iterate(z0, &params(Recurrence::Mandelbrot, Complex::ZERO, 50));

        assert_eq!(outcome.escape_iteration(), Some(0));
        assert_eq!(outcome.final_z(), z0);
    }

    #[test]
    fn mandelbrot_escape_count() {
        // 1 -> 2 -> 5: |2| is not > 2, so escape is detected at step 2
        let outcome = iterate(Complex::ONE, &params(Recurrence::Mandelbrot, Complex::ZERO, 50));

        assert_eq!(outcome.escape_iteration(), Some(2));
        assert_eq!(outcome.final_z(), Complex::new(5.0, 0.0));
    }

    #[test]
    fn mandelbrot_ignores_the_shared_parameter() {
        let huge = Complex::new(1e6, 1e6);

        let outcome = iterate(Complex::ZERO, &params(Recurrence::Mandelbrot, huge, 20));

        assert!(matches!(outcome, EscapeOutcome::Exhausted(_)));
    }

    #[test]
    fn julia_escape_count() {
        // 0 -> 1 -> 2 -> 5 with c = 1
        let outcome = iterate(Complex::ZERO, &params(Recurrence::Julia, Complex::ONE, 50));

        assert_eq!(outcome.escape_iteration(), Some(3));
        assert_eq!(outcome.final_z(), Complex::new(5.0, 0.0));
    }

    #[test]
    fn julia_with_zero_parameter_keeps_the_unit_disc() {
        let outcome = iterate(
            Complex::new(0.5, 0.5),
            &params(Recurrence::Julia, Complex::ZERO, 100),
        );

        assert!(matches!(outcome, EscapeOutcome::Exhausted(_)));
    }

    #[test]
    fn exotic_zero_is_singular_not_a_fault() {
        let outcome = iterate(Complex::ZERO, &params(Recurrence::Exotic, Complex::ZERO, 50));

        assert!(matches!(outcome, EscapeOutcome::Singular(_)));
        assert_eq!(outcome.orbit().iteration, 0);
        assert_eq!(outcome.escape_iteration(), None);
    }

    #[test]
    fn exotic_escapes_above_one() {
        let z0 = Complex::new(1.5, 0.0);

        let exotic = iterate(z0, &params(Recurrence::Exotic, Complex::ZERO, 50));
        let julia = iterate(z0, &params(Recurrence::Julia, Complex::ZERO, 50));

        assert_eq!(exotic.escape_iteration(), Some(0));
        // 1.5² = 2.25 escapes the radius-2 test one step later
        assert_eq!(julia.escape_iteration(), Some(1));
    }

    #[test]
    fn exotic_threshold_is_strict() {
        // |1| is not > 1, and 1^(1/1) + 0 = 1 forever
        let outcome = iterate(Complex::ONE, &params(Recurrence::Exotic, Complex::ZERO, 30));

        assert!(matches!(outcome, EscapeOutcome::Exhausted(_)));
        assert_eq!(outcome.final_z(), Complex::ONE);
    }

    #[test]
    fn nan_counts_as_escaped() {
        let outcome = iterate(
            Complex::new(f64::NAN, 0.0),
            &params(Recurrence::Julia, Complex::ZERO, 10),
        );

        assert_eq!(outcome.escape_iteration(), Some(0));
    }

    #[test]
    fn overflow_counts_as_escaped() {
        let outcome = iterate(
            Complex::new(f64::INFINITY, 1.0),
            &params(Recurrence::Mandelbrot, Complex::ZERO, 10),
        );

        assert_eq!(outcome.escape_iteration(), Some(0));
    }

    #[test]
    fn zero_max_iterations_is_exhausted_immediately() {
        let outcome = iterate(
            Complex::new(5.0, 5.0),
            &params(Recurrence::Mandelbrot, Complex::ZERO, 0),
        );

        assert!(matches!(outcome, EscapeOutcome::Exhausted(_)));
    }

    #[test]
    fn trajectory_is_zero_when_not_tracked() {
        let outcome = iterate(Complex::ZERO, &params(Recurrence::Julia, Complex::ONE, 50));

        assert_eq!(outcome.trajectory(), 0.0);
    }

    #[test]
    fn trajectory_counts_the_starting_point_twice() {
        let z0 = Complex::new(2.0, 2.0);
        let params = IterationParams {
            track_trajectory: true,
            ..params(Recurrence::Julia, Complex::ZERO, 50)
        };

        let outcome = iterate(z0, &params);
        let term = (-z0.magnitude()).exp();

        assert_eq!(outcome.escape_iteration(), Some(0));
        assert_eq!(outcome.trajectory(), term + term);
    }

    #[test]
    fn trajectory_accumulates_every_checked_iterate() {
        // 0 -> 1 -> 2 -> 5 with c = 1, escape checked at |5|
        let params = IterationParams {
            track_trajectory: true,
            ..params(Recurrence::Julia, Complex::ONE, 50)
        };

        let outcome = iterate(Complex::ZERO, &params);
        let expected = 1.0 + 1.0 + (-1.0f64).exp() + (-2.0f64).exp() + (-5.0f64).exp();

        assert!((outcome.trajectory() - expected).abs() < 1e-12);
    }

    #[test]
    fn iterator_is_reusable_across_pixels() {
        let iterator = EscapeTimeIterator::new(params(Recurrence::Mandelbrot, Complex::ZERO, 50));

        assert_eq!(iterator.iterate(Complex::ONE).escape_iteration(), Some(2));
        assert_eq!(iterator.iterate(Complex::ZERO).escape_iteration(), None);
        assert_eq!(iterator.iterate(Complex::ONE).escape_iteration(), Some(2));
    }
}
