//! Progress reporting for a collection cycle.
//!
//! The pipeline reports one unit of work per region through
//! [`ProgressCallback`]; rendering is left to the caller (an `indicatif`
//! bar in the CLI, nothing at all in the server).

use std::sync::Arc;

/// Receives progress updates from [`crate::pipeline::collect_all`].
pub trait ProgressCallback: Send + Sync {
    /// Sets the number of regions in the cycle.
    fn set_total(&self, total: u64);

    /// Advances by `delta` completed regions.
    fn inc(&self, delta: u64);

    /// Updates the message shown next to the indicator.
    fn set_message(&self, msg: String);

    /// Marks the cycle as complete.
    fn finish(&self, msg: String);
}

/// A [`ProgressCallback`] that ignores every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// Returns a shared [`NullProgress`].
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
