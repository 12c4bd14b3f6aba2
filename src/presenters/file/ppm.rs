use crate::controllers::ports::file_presenter::{FilePresenterPort, SinkError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::atomic_file::write_atomically;
use std::io::Write;
use std::path::Path;

/// Binary (P6) portable pixmap writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm(file: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    // P6 means binary RGB, then width, height and max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", buffer.width(), buffer.height())?;
    writeln!(file, "255")?;
    file.write_all(buffer.buffer())
}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &'static str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), SinkError> {
        let io_error = |e: std::io::Error| SinkError::io(filepath, e);

        write_atomically(filepath, io_error, |file| write_ppm(file, buffer).map_err(io_error))
    }
}
