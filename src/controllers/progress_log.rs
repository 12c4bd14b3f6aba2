use std::sync::atomic::{AtomicU32, Ordering};

use tracing::debug;

use crate::core::actions::progress::ProgressObserver;

/// Logs render progress at debug level every tenth of the rows.
#[derive(Debug, Default)]
pub struct LogProgress {
    last_decile: AtomicU32,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for LogProgress {
    fn on_row_completed(&self, rows_completed: u32, total_rows: u32) {
        if total_rows == 0 {
            return;
        }

        let decile = (rows_completed as u64 * 10 / total_rows as u64) as u32;
        let previous = self.last_decile.fetch_max(decile, Ordering::Relaxed);

        if decile > previous {
            debug!(rows_completed, total_rows, "{}% rendered", decile * 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_highest_decile() {
        let progress = LogProgress::new();

        progress.on_row_completed(5, 10);
        progress.on_row_completed(3, 10);
        progress.on_row_completed(10, 10);

        assert_eq!(progress.last_decile.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn test_zero_rows_is_ignored() {
        let progress = LogProgress::new();

        progress.on_row_completed(0, 0);

        assert_eq!(progress.last_decile.load(Ordering::Relaxed), 0);
    }
}
