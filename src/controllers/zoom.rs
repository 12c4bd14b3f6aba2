use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::controllers::errors::ControllerError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render::RenderController;
use crate::core::config::render_config::RenderConfig;
use crate::core::config::render_job::RenderJob;
use crate::core::config::view::View;
use crate::storage::gif_sequence::{assemble_gif_from, gif_path_for};

/// Zoom levels for an animation, spaced geometrically so every frame
/// magnifies by the same factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSequence {
    zoom_start: f64,
    zoom_end: f64,
    frames: u32,
}

impl ZoomSequence {
    pub fn new(zoom_start: f64, zoom_end: f64, frames: u32) -> Result<Self, ControllerError> {
        let valid = |zoom: f64| zoom.is_finite() && zoom > 0.0;

        if frames == 0 || !valid(zoom_start) || !valid(zoom_end) {
            return Err(ControllerError::InvalidZoomSequence);
        }

        Ok(Self {
            zoom_start,
            zoom_end,
            frames,
        })
    }

    #[must_use]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    #[must_use]
    pub fn zoom_at(&self, frame: u32) -> f64 {
        if self.frames == 1 {
            return self.zoom_start;
        }

        let t = frame as f64 / (self.frames - 1) as f64;

        self.zoom_start * (self.zoom_end / self.zoom_start).powf(t)
    }

    pub fn zooms(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.frames).map(|frame| self.zoom_at(frame))
    }
}

#[derive(Debug)]
pub struct ZoomReport {
    pub frames: Vec<PathBuf>,
    pub gif: Option<PathBuf>,
}

/// Renders every frame of `sequence` about `view.center` into `output_dir`,
/// numbering frames from 1, and optionally assembles the frames of this run
/// into `<output_dir>.gif`.
pub fn run_zoom<P: FilePresenterPort>(
    config: &RenderConfig,
    view: &View,
    sequence: &ZoomSequence,
    presenter: P,
    output_dir: &Path,
    gif_frame_delay: Option<Duration>,
) -> Result<ZoomReport, ControllerError> {
    let mut controller = RenderController::new(presenter);
    let mut frames = Vec::with_capacity(sequence.frames() as usize);

    for (index, zoom) in sequence.zooms().enumerate() {
        info!(frame = index + 1, of = sequence.frames(), zoom, "zoom frame");

        let job = RenderJob {
            job: Some(index as u32 + 1),
            config: *config,
            view: view.with_zoom(zoom),
        };

        if let Some(path) = controller.run_job(&job, Some(output_dir))? {
            frames.push(path);
        }
    }

    let gif = match gif_frame_delay {
        Some(delay) => {
            let output = gif_path_for(output_dir);
            assemble_gif_from(&frames, &output, delay)?;
            Some(output)
        }
        None => None,
    };

    Ok(ZoomReport { frames, gif })
}
