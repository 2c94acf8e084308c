//! Executor errors.

use thiserror::Error;

/// Errors creating a debouncer.
#[derive(Debug, Error)]
pub enum DebounceError {
    /// No tokio runtime was running on the calling thread.
    #[error("no tokio runtime is running; use Debouncer::with_handle")]
    NoRuntime,
}
