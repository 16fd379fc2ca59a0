//! Interchangeable algorithms behind one interface.
//!
//! [`select`] maps a tag to an algorithm: `"a"`, `"b"` and `"c"` pick the matching
//! algorithm and anything else picks [`DefaultAlgorithm`]. A [`Strategy`] holds the
//! current algorithm and can also be handed an algorithm the tag table does not know.
//!
//! # Examples
//!
//! ```
//! use singleton_patterns::Strategy;
//!
//! let mut strategy = Strategy::new();
//! strategy.set_strategy("b");
//! assert_eq!(strategy.strategy_result(), "result by algorithm B");
//! ```

use std::fmt;
use std::sync::LazyLock;

use tracing::info;

use crate::CapabilityFactory;

/// One interchangeable algorithm.
pub trait Algorithm: Send + Sync {
    /// Short label identifying the algorithm (the tag that selects it, for built-ins).
    fn label(&self) -> &'static str;

    /// Run the algorithm.
    fn result(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmA;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmB;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmC;

/// Used for unrecognized tags and by a fresh [`Strategy`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultAlgorithm;

impl Algorithm for AlgorithmA {
    fn label(&self) -> &'static str {
        "a"
    }

    fn result(&self) -> String {
        "result by algorithm A".to_string()
    }
}

impl Algorithm for AlgorithmB {
    fn label(&self) -> &'static str {
        "b"
    }

    fn result(&self) -> String {
        "result by algorithm B".to_string()
    }
}

impl Algorithm for AlgorithmC {
    fn label(&self) -> &'static str {
        "c"
    }

    fn result(&self) -> String {
        "result by algorithm C".to_string()
    }
}

impl Algorithm for DefaultAlgorithm {
    fn label(&self) -> &'static str {
        "default"
    }

    fn result(&self) -> String {
        "result by default algorithm".to_string()
    }
}

static ALGORITHMS: LazyLock<CapabilityFactory<dyn Algorithm>> = LazyLock::new(|| {
    CapabilityFactory::<dyn Algorithm>::new("algorithm", "DefaultAlgorithm", || {
        Box::new(DefaultAlgorithm)
    })
    .with("a", "AlgorithmA", || Box::new(AlgorithmA))
    .with("b", "AlgorithmB", || Box::new(AlgorithmB))
    .with("c", "AlgorithmC", || Box::new(AlgorithmC))
});

/// Returns the algorithm for `tag`, or [`DefaultAlgorithm`].
pub fn select(tag: &str) -> Box<dyn Algorithm> {
    ALGORITHMS.create(tag)
}

/// The dispatch table behind [`select`].
pub fn table() -> &'static CapabilityFactory<dyn Algorithm> {
    &ALGORITHMS
}

// -------------------------------------------------------------------------------------------------
// Strategy context
// -------------------------------------------------------------------------------------------------

/// Holds the algorithm currently in use.
pub struct Strategy {
    algorithm: Box<dyn Algorithm>,
}

impl Strategy {
    /// Starts with [`DefaultAlgorithm`].
    pub fn new() -> Self {
        Self {
            algorithm: Box::new(DefaultAlgorithm),
        }
    }

    /// Starts with the given algorithm.
    pub fn with_algorithm(algorithm: Box<dyn Algorithm>) -> Self {
        Self { algorithm }
    }

    /// Replaces the current algorithm with the one selected by `tag`.
    pub fn set_strategy(&mut self, tag: &str) {
        self.algorithm = select(tag);
    }

    /// Replaces the current algorithm with any implementation, registered or not.
    pub fn use_algorithm(&mut self, algorithm: Box<dyn Algorithm>) {
        self.algorithm = algorithm;
    }

    pub fn current(&self) -> &dyn Algorithm {
        self.algorithm.as_ref()
    }

    /// Runs the current algorithm.
    pub fn strategy_result(&self) -> String {
        let result = self.algorithm.result();
        info!(algorithm = self.algorithm.label(), %result, "strategy result");
        result
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("algorithm", &self.algorithm.label())
            .finish()
    }
}
