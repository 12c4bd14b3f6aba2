use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl SinkError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Persists a finished raster to a file.
pub trait FilePresenterPort {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), SinkError>;
}

impl<P: FilePresenterPort + ?Sized> FilePresenterPort for Box<P> {
    fn extension(&self) -> &'static str {
        (**self).extension()
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), SinkError> {
        (**self).present(buffer, filepath)
    }
}
