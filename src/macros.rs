//! Macros for declaring singletons.
//!
//! This module provides a macro-based approach to declare type-safe,
//! thread-safe, lazily constructed singletons in one line.

/// Declares a lazily constructed singleton with a single macro invocation.
///
/// The macro generates a module containing:
/// - The `static` cell holding the instance (hidden)
/// - An `Api` struct that implements `SingletonApi`, plus an `API` constant
/// - Free functions `get_instance`, `get` and `is_initialized`
///
/// Type and constructor paths are resolved from the enclosing module, so invoke the
/// macro at module level next to the types it refers to.
///
/// # Infallible construction
///
/// ```rust
/// use singleton_patterns::define_singleton;
/// use std::sync::Arc;
///
/// pub struct Settings {
///     pub retries: u32,
/// }
///
/// define_singleton!(settings, Settings, Settings { retries: 3 });
///
/// fn main() {
///     let a: Arc<Settings> = settings::get_instance();
///     let b = settings::get_instance();
///
///     assert_eq!(a.retries, 3);
///     assert!(Arc::ptr_eq(&a, &b));
/// }
/// ```
///
/// # Fallible construction
///
/// Prefix the constructor with `fallible`. It must evaluate to
/// `Result<Type, InitError>`, and `get_instance` then returns that `Result`.
///
/// ```rust
/// use singleton_patterns::{define_singleton, InitError};
///
/// pub struct Port(u16);
///
/// fn open_port() -> Result<Port, InitError> {
///     Err(InitError::construction::<Port>("address in use"))
/// }
///
/// define_singleton!(port, Port, fallible open_port());
///
/// fn main() {
///     assert!(port::get_instance().is_err());
///     assert!(!port::is_initialized());
/// }
/// ```
///
/// # Trait-Based Usage
///
/// If you need trait-based usage, the `API` constant is available:
///
/// ```rust
/// use singleton_patterns::{define_singleton, SingletonApi};
///
/// define_singleton!(answer, u64, 42);
///
/// fn main() {
///     assert!(answer::API.peek().is_none());
///     assert_eq!(*answer::API.instance().unwrap(), 42);
/// }
/// ```
#[macro_export]
macro_rules! define_singleton {
    (@module $name:ident, $ty:ty, $construct:expr, { $($accessor:tt)* }) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            // Cell holding the shared instance (module-private)
            static INSTANCE: $crate::LazySingleton<$ty> = $crate::LazySingleton::new();

            /// Zero-sized type that implements the singleton API.
            pub struct Api;

            impl $crate::SingletonApi for Api {
                type Target = $ty;

                fn cell() -> &'static $crate::LazySingleton<$ty> {
                    &INSTANCE
                }

                fn construct() -> ::std::result::Result<$ty, $crate::InitError> {
                    $construct
                }
            }

            /// Convenient constant for accessing the singleton API.
            #[allow(dead_code)]
            pub const API: Api = Api;

            $($accessor)*

            /// Retrieve the instance only if it has already been constructed.
            #[allow(dead_code)]
            pub fn get() -> ::std::option::Option<::std::sync::Arc<$ty>> {
                INSTANCE.get()
            }

            /// Check whether the instance has been constructed.
            #[allow(dead_code)]
            pub fn is_initialized() -> bool {
                INSTANCE.is_initialized()
            }
        }
    };

    ($name:ident, $ty:ty, fallible $init:expr) => {
        $crate::define_singleton!(@module $name, $ty, $init, {
            /// Retrieve the instance, constructing it on first call.
            #[allow(dead_code)]
            pub fn get_instance(
            ) -> ::std::result::Result<::std::sync::Arc<$ty>, $crate::InitError> {
                use $crate::SingletonApi;
                API.instance()
            }
        });
    };

    ($name:ident, $ty:ty, $init:expr) => {
        $crate::define_singleton!(@module $name, $ty, ::std::result::Result::Ok($init), {
            /// Retrieve the instance, constructing it on first call.
            #[allow(dead_code)]
            pub fn get_instance() -> ::std::sync::Arc<$ty> {
                INSTANCE.get_or_init(|| $init)
            }
        });
    };
}
