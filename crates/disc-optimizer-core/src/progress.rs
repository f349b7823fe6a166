use crate::error::Error;
use std::path::Path;

/// Trait for reporting scan progress.
///
/// The CLI implements it with an indicatif spinner; library callers that do not
/// care use [`SilentReporter`]. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self, _path: &Path) {}
    fn on_scan_progress(&self, _discs_found: usize, _current: &str) {}
    fn on_scan_complete(&self, _total_discs: usize, _duration_secs: f64) {}
    /// Called instead of `on_scan_complete` when the scan aborts.
    fn on_scan_failed(&self, _error: &Error) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
