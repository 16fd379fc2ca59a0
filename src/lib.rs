//! # Singleton Patterns
//!
//! Thread-safe lazy singletons and tag-dispatched object creation.
//!
//! ## Quick Start
//!
//! ```rust
//! use singleton_patterns::{LazySingleton, SensorFactory, Strategy};
//! use std::sync::Arc;
//!
//! // One shared instance, built on first use
//! static MESSAGE: LazySingleton<String> = LazySingleton::new();
//! let message = MESSAGE.get_or_init(|| "Hello, World!".to_string());
//! assert!(Arc::ptr_eq(&message, &MESSAGE.get().unwrap()));
//!
//! // Factory: tag -> implementation, unknown tags fall back
//! assert_eq!(SensorFactory::create("SO2").data(), 's');
//! assert_eq!(SensorFactory::create("???").data(), 'n');
//!
//! // Strategy: swap algorithms behind one interface
//! let mut strategy = Strategy::new();
//! strategy.set_strategy("a");
//! assert_eq!(strategy.current().label(), "a");
//! ```
//!
//! ## Features
//!
//! - **Construct once**: concurrent first callers race safely; exactly one constructor runs
//! - **Retry on failure**: a failing constructor leaves the cell empty for the next caller
//! - **Permissive dispatch**: unknown tags produce a defined fallback, never an error
//! - **Tracing support**: `tracing` records plus an optional callback for every event
//!
//! ## Main Items
//!
//! - [`LazySingleton`] - Lazily constructed shared instance
//! - [`SingletonApi`] / [`define_singleton!`] - Declare singletons with their constructor
//! - [`CapabilityFactory`] - Tag to constructor table with a fallback
//! - [`SensorFactory`] - Sensors by name
//! - [`Strategy`] / [`strategy::select`] - Algorithms by tag
//! - [`set_trace_callback`] - Observe construction and dispatch events

mod factory;
mod init_error;
mod lazy_singleton;
mod macros;
mod pattern_event;
mod sensor;
mod singleton_trait;
pub mod strategy;
mod trace;

pub use factory::{CapabilityFactory, Constructor};
pub use init_error::InitError;
pub use lazy_singleton::LazySingleton;
pub use pattern_event::PatternEvent;
pub use sensor::{
    CarbonDioxideSensor, GenericSensor, Sensor, SensorFactory, SensorType, SulfurDioxideSensor,
    TemperatureSensor,
};
pub use singleton_trait::SingletonApi;
pub use strategy::{Algorithm, Strategy};
pub use trace::{clear_trace_callback, set_trace_callback, TraceCallback};
