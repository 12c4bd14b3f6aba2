use std::path::PathBuf;

use thiserror::Error;

use crate::controllers::ports::file_presenter::SinkError;
use crate::core::actions::render_frame::RenderError;
use crate::core::util::viewport_from_view::ViewportFromViewError;
use crate::storage::gif_sequence::SequenceError;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("invalid view: {0}")]
    View(#[from] ViewportFromViewError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("nothing has been rendered yet")]
    NothingToWrite,
    #[error("zoom sequence needs positive finite zooms and at least one frame")]
    InvalidZoomSequence,
}
