//! Core trait defining singleton accessor behavior.
//!
//! This module provides the `SingletonApi` trait with default implementations for
//! lazily constructing and retrieving one shared instance of `Self::Target`.
//!
//! Implementors only say *where* the instance lives (`cell`) and *how* it is built
//! (`construct`). Everything else comes from the default methods.

use std::sync::Arc;

use crate::{InitError, LazySingleton};

/// Core trait defining singleton accessor behavior.
///
/// Usually implemented by a zero-sized type, either by hand or through
/// [`define_singleton!`](crate::define_singleton).
///
/// # Examples
///
/// ```rust
/// use singleton_patterns::{InitError, LazySingleton, SingletonApi};
/// use std::sync::Arc;
///
/// struct Settings {
///     retries: u32,
/// }
///
/// static SETTINGS: LazySingleton<Settings> = LazySingleton::new();
///
/// struct SettingsApi;
///
/// impl SingletonApi for SettingsApi {
///     type Target = Settings;
///
///     fn cell() -> &'static LazySingleton<Settings> {
///         &SETTINGS
///     }
///
///     fn construct() -> Result<Settings, InitError> {
///         Ok(Settings { retries: 3 })
///     }
/// }
///
/// let settings: Arc<Settings> = SettingsApi.instance().unwrap();
/// assert_eq!(settings.retries, 3);
/// ```
pub trait SingletonApi {
    /// The type of the shared instance.
    type Target: Send + Sync + 'static;

    /// Access the cell holding the shared instance.
    ///
    /// This method must be implemented to provide access to the singleton's storage.
    fn cell() -> &'static LazySingleton<Self::Target>;

    /// Build the instance. Called at most once per successful initialization.
    ///
    /// # Errors
    ///
    /// Any error leaves the cell empty; the next `instance` call calls `construct` again.
    fn construct() -> Result<Self::Target, InitError>;

    /// Retrieve the shared instance, constructing it on first call.
    ///
    /// # Errors
    ///
    /// - `InitError::Construction` if `construct` failed on this call
    fn instance(&self) -> Result<Arc<Self::Target>, InitError> {
        Self::cell().get_or_try_init(Self::construct)
    }

    /// Retrieve the shared instance only if it already exists.
    fn peek(&self) -> Option<Arc<Self::Target>> {
        Self::cell().get()
    }

    /// Check whether the shared instance has been constructed.
    fn is_initialized(&self) -> bool {
        Self::cell().is_initialized()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::SingletonApi;
    use crate::{InitError, LazySingleton};

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct Connection {
        generation: usize,
    }

    static CONNECTION: LazySingleton<Connection> = LazySingleton::new();
    static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

    struct Api;

    impl SingletonApi for Api {
        type Target = Connection;

        fn cell() -> &'static LazySingleton<Connection> {
            &CONNECTION
        }

        // Fails on the first attempt, succeeds afterwards.
        fn construct() -> Result<Connection, InitError> {
            let attempt = ATTEMPTS.fetch_add(1, Ordering::SeqCst);
            if attempt == 0 {
                Err(InitError::construction::<Connection>("server not ready"))
            } else {
                Ok(Connection {
                    generation: attempt,
                })
            }
        }
    }

    const API: Api = Api;

    #[test]
    fn test_failure_then_retry_then_cached() {
        assert!(!API.is_initialized());
        assert!(API.peek().is_none());

        let err = API.instance().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Failed to construct {}: server not ready",
                std::any::type_name::<Connection>()
            )
        );
        assert!(!API.is_initialized());

        let first = API.instance().unwrap();
        assert_eq!(first.generation, 1);

        let second = API.instance().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &API.peek().unwrap()));

        // Constructor was not called again once published.
        assert_eq!(ATTEMPTS.load(Ordering::SeqCst), 2);
    }
}
