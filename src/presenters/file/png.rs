use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::controllers::ports::file_presenter::{FilePresenterPort, SinkError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::atomic_file::write_atomically;

#[derive(Debug, Clone, Copy, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn extension(&self) -> &'static str {
        "png"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), SinkError> {
        write_atomically(filepath, |e| SinkError::io(filepath, e), |file| {
            PngEncoder::new(file)
                .write_image(
                    buffer.buffer(),
                    buffer.width(),
                    buffer.height(),
                    ExtendedColorType::Rgb8,
                )
                .map_err(|source| SinkError::Encode {
                    path: filepath.to_path_buf(),
                    source,
                })
        })
    }
}
