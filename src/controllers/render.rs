use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::info;

use crate::controllers::errors::ControllerError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::progress_log::LogProgress;
use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::render_frame::render_cancelable;
use crate::core::config::render_config::RenderConfig;
use crate::core::config::render_job::RenderJob;
use crate::core::config::view::View;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::output_name::output_file_name;

/// Renders frames and hands the latest one to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(
        &mut self,
        config: &RenderConfig,
        view: &View,
    ) -> Result<Duration, ControllerError> {
        self.generate_cancelable(config, view, &NeverCancel)
    }

    /// Renders one frame and keeps it for [`Self::write`].
    ///
    /// Returns the time spent rendering.
    pub fn generate_cancelable<C: CancelToken>(
        &mut self,
        config: &RenderConfig,
        view: &View,
        cancel: &C,
    ) -> Result<Duration, ControllerError> {
        let viewport = view.viewport(config.aspect_ratio)?;

        info!(
            recurrence = %config.recurrence,
            width = config.width,
            height = config.height,
            max_iterations = config.max_iterations,
            zoom = view.zoom,
            "rendering"
        );

        let start = Instant::now();
        let buffer = render_cancelable(config, viewport, cancel, &LogProgress::new())?;
        let duration = start.elapsed();

        info!(elapsed = ?duration, "render finished");

        self.buffer = Some(buffer);

        Ok(duration)
    }

    pub fn write(&self, filepath: &Path) -> Result<(), ControllerError> {
        let buffer = self.buffer.as_ref().ok_or(ControllerError::NothingToWrite)?;

        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "saved");

        Ok(())
    }

    /// Renders `job` and, when `output_dir` is given, saves it there under its
    /// deterministic name.
    pub fn run_job(
        &mut self,
        job: &RenderJob,
        output_dir: Option<&Path>,
    ) -> Result<Option<PathBuf>, ControllerError> {
        self.generate(&job.config, &job.view)?;

        let Some(dir) = output_dir else {
            info!("not saving the image");
            return Ok(None);
        };

        std::fs::create_dir_all(dir).map_err(|source| ControllerError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(output_file_name(
            &job.config,
            job.job,
            self.presenter.extension(),
        ));
        self.write(&path)?;

        Ok(Some(path))
    }
}
