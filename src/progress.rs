// src/progress.rs
/// Lightweight progress reporting used by the fetch cycle.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of cards.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One card finished (fetched or served from cache). `index` is 0-based.
    fn item_done(&mut self, _index: usize, _label: &str, _cached: bool) {}

    /// A request failed. Shown to the user right away, not just in the table.
    fn notify_error(&mut self, _msg: &str) {}

    /// Called at the end of the cycle.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
