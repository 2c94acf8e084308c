//! Trailing-edge debouncing.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::DebounceError;

type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Delays a function until calls stop arriving.
///
/// Every [`call`](Debouncer::call) cancels the execution scheduled by the
/// previous one and schedules a new one `wait` later. Once `wait` passes
/// with no further call, the function runs once with the latest arguments.
///
/// Executions are tasks on the tokio runtime the debouncer was built on.
/// Dropping the debouncer does not cancel a scheduled execution; call
/// [`cancel`](Debouncer::cancel) first if that is wanted.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use shop_executor::Debouncer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let search = Debouncer::new(
///     move |query: String| sink.lock().unwrap().push(query),
///     Duration::from_millis(10),
/// )
/// .unwrap();
///
/// search.call("m".to_string());
/// search.call("mu".to_string());
/// search.call("mug".to_string());
/// tokio::time::sleep(Duration::from_millis(50)).await;
///
/// assert_eq!(*seen.lock().unwrap(), ["mug"]);
/// # }
/// ```
pub struct Debouncer<A> {
    func: Callback<A>,
    wait: Duration,
    handle: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer on the current tokio runtime.
    pub fn new<F>(func: F, wait: Duration) -> Result<Self, DebounceError>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let handle = Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;
        Ok(Self::with_handle(func, wait, handle))
    }

    /// Create a debouncer that schedules onto `handle`.
    pub fn with_handle<F>(func: F, wait: Duration, handle: Handle) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            wait,
            handle,
            pending: Mutex::new(None),
        }
    }

    /// The quiet period before an execution.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule an execution with `args`, replacing any pending one.
    pub fn call(&self, args: A) {
        let func = Arc::clone(&self.func);
        let wait = self.wait;

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
            tracing::trace!("debounced call superseded");
        }

        *pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(wait).await;
            func(args);
        }));
    }

    /// Drop the pending execution, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    /// Whether an execution is scheduled and has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait", &self.wait)
            .finish_non_exhaustive()
    }
}
