//! A lazily constructed, process-wide shared instance.
//!
//! `LazySingleton<T>` constructs its value at most once, on first request, no matter how
//! many threads race for it. Every caller receives an `Arc<T>` pointing at the same
//! allocation.
//!
//! Acquisition is double-checked: a lock-free read of the published slot serves every call
//! after the first, and only callers that find the slot empty take the init lock, re-check,
//! and construct. A constructor that fails (returns `Err` or panics) leaves the slot empty,
//! so the next caller tries again.
//!
//! # Examples
//!
//! ```
//! use singleton_patterns::LazySingleton;
//! use std::sync::Arc;
//!
//! static GREETING: LazySingleton<String> = LazySingleton::new();
//!
//! let a = GREETING.get_or_init(|| "Hello, World!".to_string());
//! let b = GREETING.get_or_init(|| unreachable!());
//!
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(&*a, "Hello, World!");
//! ```

use std::{
    any::type_name,
    convert::Infallible,
    fmt,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use tracing::{debug, info, warn};

use crate::{trace::emit_event, PatternEvent};

/// Thread-safe, lazily initialized holder of a single shared instance.
///
/// Usable in `static` position (see [`LazySingleton::new`]) or as an owned value passed to
/// callers explicitly, for instance inside an `Arc`.
pub struct LazySingleton<T> {
    /// Published instance. Written once per lifetime, only while `init_lock` is held.
    slot: OnceLock<Arc<T>>,
    init_lock: Mutex<()>,
}

impl<T> LazySingleton<T> {
    /// Creates an empty cell. Nothing is constructed until the first request.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Returns the instance if it has already been constructed. Never constructs, never blocks.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.get().cloned()
    }

    /// Whether the instance has been constructed and published.
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the shared instance, constructing it with `init` on first call.
    ///
    /// If `init` panics the panic propagates to this caller and the cell stays empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use singleton_patterns::LazySingleton;
    ///
    /// let cell = LazySingleton::new();
    /// assert_eq!(*cell.get_or_init(|| 42), 42);
    /// assert_eq!(*cell.get_or_init(|| 0), 42);
    /// ```
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Arc<T> {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }

    /// Returns the shared instance, constructing it with the fallible `init` on first call.
    ///
    /// # Errors
    ///
    /// Returns the constructor's error unchanged. The cell stays empty, so a later call
    /// runs a constructor again.
    ///
    /// # Deadlocks
    ///
    /// `init` runs while the init lock is held. It must not request the same cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use singleton_patterns::LazySingleton;
    ///
    /// let cell: LazySingleton<u32> = LazySingleton::new();
    ///
    /// assert!(cell.get_or_try_init(|| "not yet".parse::<u32>()).is_err());
    /// assert!(!cell.is_initialized());
    ///
    /// let value = cell.get_or_try_init(|| "7".parse::<u32>()).unwrap();
    /// assert_eq!(*value, 7);
    /// ```
    pub fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<Arc<T>, E> {
        if let Some(instance) = self.slot.get() {
            return Ok(Arc::clone(instance));
        }

        // Declared before the lock guard so its report runs after the lock is released.
        let mut attempt = ConstructionAttempt::new(type_name::<T>());

        let _guard = self
            .init_lock
            .lock()
            // The slot is only written after a successful construction, so a poisoned
            // lock never guards a half-built instance.
            .unwrap_or_else(PoisonError::into_inner);

        // Another thread may have published while we waited for the lock.
        if let Some(instance) = self.slot.get() {
            return Ok(Arc::clone(instance));
        }

        attempt.start();
        let instance = Arc::new(init()?);
        let published = Arc::clone(self.slot.get_or_init(|| instance));
        attempt.finish();

        Ok(published)
    }

    /// Tears the cell down, returning the instance if one was published.
    ///
    /// Handles already given out stay valid. The next request constructs a fresh
    /// instance. Requires exclusive access, so a `static` cell lives for the whole
    /// process.
    pub fn take(&mut self) -> Option<Arc<T>> {
        let instance = self.slot.take();

        if instance.is_some() {
            debug!(type_name = type_name::<T>(), "singleton torn down");
            emit_event(&PatternEvent::TornDown {
                type_name: type_name::<T>(),
            });
        }

        instance
    }
}

impl<T> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LazySingleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySingleton")
            .field("instance", &self.slot.get())
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Construction reporting
// -------------------------------------------------------------------------------------------------

enum AttemptState {
    Idle,
    Running,
    Done,
}

/// Reports the outcome of one construction when dropped.
///
/// Dropping while `Running` means the constructor returned `Err` or unwound.
struct ConstructionAttempt {
    type_name: &'static str,
    state: AttemptState,
}

impl ConstructionAttempt {
    fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            state: AttemptState::Idle,
        }
    }

    fn start(&mut self) {
        self.state = AttemptState::Running;
    }

    fn finish(&mut self) {
        self.state = AttemptState::Done;
    }
}

impl Drop for ConstructionAttempt {
    fn drop(&mut self) {
        match self.state {
            AttemptState::Idle => {}
            AttemptState::Running => {
                warn!(type_name = self.type_name, "singleton construction failed");
                emit_event(&PatternEvent::ConstructionFailed {
                    type_name: self.type_name,
                });
            }
            AttemptState::Done => {
                info!(type_name = self.type_name, "singleton constructed");
                emit_event(&PatternEvent::Constructed {
                    type_name: self.type_name,
                });
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
