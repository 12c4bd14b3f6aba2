use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
        point.x,
        point.y,
        pixel_rect.top_left().x,
        pixel_rect.top_left().y,
        pixel_rect.bottom_right().x,
        pixel_rect.bottom_right().y
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Linear map from a pixel to the complex plane.
///
/// Pixel `(0, 0)` lands on `(x_min, y_min)` and each step along an axis adds
/// one pixel's share of the viewport, so the last pixel stops one step short
/// of `(x_max, y_max)`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = (pixel_position.x - pixel_rect.top_left().x) as f64;
    let relative_pixel_y = (pixel_position.y - pixel_rect.top_left().y) as f64;
    let x_step = viewport.width() / pixel_rect.width() as f64;
    let y_step = viewport.height() / pixel_rect.height() as f64;

    Ok(Complex {
        real: viewport.x_min() + relative_pixel_x * x_step,
        imag: viewport.y_min() + relative_pixel_y * y_step,
    })
}
