use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::progress::ProgressObserver;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Failure of a cancelable generation run.
///
/// Cancellation is expected control flow and is kept apart from algorithm
/// failures so callers can ignore it.
#[derive(Debug, Error)]
pub enum GenerateFractalError<E> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}

/// Generates fractal data in parallel with cancellation and progress support.
///
/// Rows are spread over rayon's work-stealing pool and the results come back
/// row-major. The token is polled at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row. `progress` is told
/// about every completed row.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C, P>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
    cancel: &C,
    progress: &P,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
    P: ProgressObserver,
{
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;
    let total_rows = pixel_rect.height();
    let rows_completed = AtomicU32::new(0);

    let rows: Vec<Vec<Alg::Success>> = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (x_start..=x_end).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            let done = rows_completed.fetch_add(1, Ordering::Relaxed) + 1;
            progress.on_row_completed(done, total_rows);

            Ok(row)
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}
