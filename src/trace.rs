//! Process-wide trace callback for singleton and factory events.
//!
//! Every singleton cell and factory table reports through the same callback, so a
//! single hook observes the whole crate. Log records go through `tracing` independently
//! of whether a callback is installed.

use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use crate::PatternEvent;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `PatternEvent` every time a singleton is
/// constructed, fails to construct or is torn down, and every time a factory dispatches.
/// It must be thread-safe because it is globally shared.
pub type TraceCallback = dyn Fn(&PatternEvent) + Send + Sync + 'static;

static TRACE_CALLBACK: LazyLock<Mutex<Option<Arc<TraceCallback>>>> =
    LazyLock::new(|| Mutex::new(None));

/// Sets a tracing callback that will be invoked on every reported event.
///
/// Replaces any previously installed callback.
///
/// # Example
/// ```rust
/// use singleton_patterns::{clear_trace_callback, set_trace_callback};
///
/// set_trace_callback(|event| println!("[patterns-trace] {}", event));
/// clear_trace_callback();
/// ```
pub fn set_trace_callback(callback: impl Fn(&PatternEvent) + Send + Sync + 'static) {
    let mut guard = TRACE_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Arc::new(callback));
}

/// Clears the tracing callback.
pub fn clear_trace_callback() {
    let mut guard = TRACE_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Invokes the current callback, if any.
///
/// The callback is cloned out of the lock before it runs, so a callback may itself
/// touch singletons or factories without deadlocking.
pub(crate) fn emit_event(event: &PatternEvent) {
    let callback = TRACE_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    if let Some(callback) = callback {
        callback(event);
    }
}
