// src/progress.rs
/// Lightweight progress reporting for the collection run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of queries to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A book was collected. `index` is 1-based.
    fn item_done(&mut self, _index: usize, _title: &str) {}

    /// A query was skipped; `reason` is already short enough to print.
    fn item_failed(&mut self, _index: usize, _query: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes every event through the `log` facade as `[i/n] ...` lines.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        log::info!("Collecting {total} books");
    }
    fn log(&mut self, msg: &str) {
        log::info!("{msg}");
    }
    fn item_done(&mut self, index: usize, title: &str) {
        self.done += 1;
        log::info!("[{index}/{}] Added: {title}", self.total);
    }
    fn item_failed(&mut self, index: usize, query: &str, reason: &str) {
        self.failed += 1;
        log::warn!("[{index}/{}] Skipped {query}: {reason}", self.total);
    }
    fn finish(&mut self) {
        log::info!("Collected {}/{} books ({} skipped)", self.done, self.total, self.failed);
    }
}
