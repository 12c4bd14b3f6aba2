pub mod pixel_to_complex_coords;
pub mod viewport_from_view;
