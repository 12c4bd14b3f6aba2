mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::batch::{BatchReport, run_batch};
pub use crate::controllers::errors::ControllerError;
pub use crate::controllers::ports::file_presenter::{FilePresenterPort, SinkError};
pub use crate::controllers::progress_log::LogProgress;
pub use crate::controllers::render::RenderController;
pub use crate::controllers::zoom::{ZoomReport, ZoomSequence, run_zoom};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::progress::{NoProgress, ProgressObserver};
pub use crate::core::actions::render_frame::{RenderError, render, render_cancelable};
pub use crate::core::config::errors::ConfigError;
pub use crate::core::config::render_config::RenderConfig;
pub use crate::core::config::render_job::RenderJob;
pub use crate::core::config::view::View;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::colouring::hsv::hsv_to_rgb;
pub use crate::core::fractals::colouring::kinds::ColouringMode;
pub use crate::core::fractals::escape_time::iterator::{EscapeOutcome, IterationParams, Orbit, iterate};
pub use crate::core::fractals::recurrence::Recurrence;
pub use crate::core::util::pixel_to_complex_coords::{PixelToComplexCoordsError, pixel_to_complex_coords};
pub use crate::core::util::viewport_from_view::{
    DEFAULT_BASE_HALF_WIDTH, ViewportFromViewError, viewport_from_view,
};
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::gif_sequence::{
    DEFAULT_FRAME_DELAY, SequenceError, assemble_gif, assemble_gif_from, gif_path_for,
};
pub use crate::storage::job_file::{JobFileError, load_jobs};
pub use crate::storage::natural_sort::natural_cmp;
pub use crate::storage::output_name::output_file_name;
