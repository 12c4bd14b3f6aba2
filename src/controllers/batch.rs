use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::controllers::errors::ControllerError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render::RenderController;
use crate::core::config::render_job::RenderJob;

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written, or `None` entries when saving is off.
    pub rendered: Vec<Option<PathBuf>>,
    /// Position in the job list and the reason the job failed.
    pub failed: Vec<(usize, ControllerError)>,
}

impl BatchReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every job in order. A failing job is logged and recorded, and the
/// remaining jobs still run.
pub fn run_batch<P: FilePresenterPort>(
    jobs: &[RenderJob],
    presenter: P,
    output_dir: Option<&Path>,
) -> BatchReport {
    let mut controller = RenderController::new(presenter);
    let mut report = BatchReport::default();

    for (index, job) in jobs.iter().enumerate() {
        match controller.run_job(job, output_dir) {
            Ok(path) => report.rendered.push(path),
            Err(err) => {
                error!(index, job = ?job.job, "job failed: {err}");
                report.failed.push((index, err));
            }
        }
    }

    info!(
        rendered = report.rendered.len(),
        failed = report.failed.len(),
        "batch finished"
    );

    report
}
