use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Single-threaded reference generator. Results are row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let top_left = pixel_rect.top_left();
    let bottom_right = pixel_rect.bottom_right();

    (top_left.y..=bottom_right.y)
        .flat_map(|y| (top_left.x..=bottom_right.x).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct CoordinateAlgorithm {}

    impl FractalAlgorithm for CoordinateAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }
    }

    struct FailOnRowAlgorithm {
        row: i32,
    }

    impl FractalAlgorithm for FailOnRowAlgorithm {
        type Success = ();
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.y == self.row {
                Err(StubError {})
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_results_are_row_major_and_inclusive() {
        let pixel_rect = PixelRect::new(Point { x: 1, y: 2 }, Point { x: 2, y: 3 }).unwrap();

        let results = generate_fractal_serial(pixel_rect, &CoordinateAlgorithm {}).unwrap();

        assert_eq!(results, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_single_pixel_rect() {
        let pixel_rect = PixelRect::from_size(1, 1).unwrap();

        let results = generate_fractal_serial(pixel_rect, &CoordinateAlgorithm {}).unwrap();

        assert_eq!(results, vec![(0, 0)]);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::from_size(4, 4).unwrap();

        let result = generate_fractal_serial(pixel_rect, &FailOnRowAlgorithm { row: 2 });

        assert_eq!(result, Err(StubError {}));
    }
}
