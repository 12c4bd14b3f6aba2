use std::path::{Path, PathBuf};
use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageError};
use thiserror::Error;
use tracing::{debug, info};

use crate::storage::atomic_file::write_atomically;
use crate::storage::natural_sort::sort_naturally;

pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no .{extension} files found in {path}")]
    Empty { path: PathBuf, extension: String },
    #[error("failed to decode frame {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("frame {path} is {actual:?}, expected {expected:?}")]
    FrameSize {
        path: PathBuf,
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("no frames to write to {path}")]
    NoFrames { path: PathBuf },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// `frames/` becomes `frames.gif` next to the directory.
#[must_use]
pub fn gif_path_for(directory: &Path) -> PathBuf {
    let directory: PathBuf = directory.components().collect();
    let mut name = directory.into_os_string();
    name.push(".gif");

    PathBuf::from(name)
}

/// Files in `directory` with `extension` (with or without the dot, any
/// case), in natural order.
pub fn list_frames(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, SequenceError> {
    let extension = extension.trim_start_matches('.');
    let read_dir_error = |source| SequenceError::ReadDir {
        path: directory.to_path_buf(),
        source,
    };

    let mut frames = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));

        if matches && path.is_file() {
            frames.push(path);
        }
    }

    sort_naturally(&mut frames);

    Ok(frames)
}

/// Assembles every `extension` file in `directory` into `<directory>.gif`,
/// looping forever with `frame_delay` between frames.
pub fn assemble_gif(
    directory: &Path,
    extension: &str,
    frame_delay: Duration,
) -> Result<PathBuf, SequenceError> {
    let frames = list_frames(directory, extension)?;
    if frames.is_empty() {
        return Err(SequenceError::Empty {
            path: directory.to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        });
    }

    let output = gif_path_for(directory);
    assemble_gif_from(&frames, &output, frame_delay)?;

    Ok(output)
}

/// Encodes `frames`, in the given order, into a looping GIF at `output`.
///
/// Every frame must have the size of the first. Nothing is written to
/// `output` unless all of them decode and encode.
pub fn assemble_gif_from(
    frames: &[PathBuf],
    output: &Path,
    frame_delay: Duration,
) -> Result<(), SequenceError> {
    if frames.is_empty() {
        return Err(SequenceError::NoFrames {
            path: output.to_path_buf(),
        });
    }

    let io_error = |source: std::io::Error| SequenceError::Write {
        path: output.to_path_buf(),
        source,
    };
    let encode_error = |source: ImageError| SequenceError::Encode {
        path: output.to_path_buf(),
        source,
    };

    write_atomically(output, io_error, |writer| {
        let mut encoder = GifEncoder::new(writer);
        encoder.set_repeat(Repeat::Infinite).map_err(encode_error)?;

        let delay = Delay::from_saturating_duration(frame_delay);
        let mut expected_size = None;

        for path in frames {
            debug!(frame = %path.display(), "adding frame");

            let image = image::open(path)
                .map_err(|source| SequenceError::Decode {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();

            let size = image.dimensions();
            match expected_size {
                None => expected_size = Some(size),
                Some(expected) if expected != size => {
                    return Err(SequenceError::FrameSize {
                        path: path.clone(),
                        expected,
                        actual: size,
                    });
                }
                Some(_) => {}
            }

            encoder
                .encode_frame(Frame::from_parts(image, 0, 0, delay))
                .map_err(encode_error)?;
        }

        Ok(())
    })?;

    info!(output = %output.display(), frames = frames.len(), "wrote gif");

    Ok(())
}
