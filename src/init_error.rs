use thiserror::Error;

/// Error returned when a singleton's constructor fails.
///
/// The cell stays uninitialized after this error, so a later call may try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("Failed to construct {type_name}: {reason}")]
    Construction {
        type_name: &'static str,
        reason: String,
    },
}

impl InitError {
    /// Builds a construction error for type `T`.
    pub fn construction<T: ?Sized>(reason: impl Into<String>) -> Self {
        InitError::Construction {
            type_name: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }

    /// The type whose construction failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            InitError::Construction { type_name, .. } => type_name,
        }
    }
}
