/// Receives row completion counts from a running render.
///
/// Called from rayon worker threads, so rows may be reported out of order,
/// but `rows_completed` itself only ever grows.
pub trait ProgressObserver: Send + Sync {
    fn on_row_completed(&self, rows_completed: u32, total_rows: u32);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    #[inline]
    fn on_row_completed(&self, _rows_completed: u32, _total_rows: u32) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(u32, u32) + Send + Sync,
{
    #[inline]
    fn on_row_completed(&self, rows_completed: u32, total_rows: u32) {
        self(rows_completed, total_rows)
    }
}
