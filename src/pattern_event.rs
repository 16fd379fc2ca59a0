/// Events emitted by singletons and factories.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use singleton_patterns::PatternEvent;
///
/// let event = PatternEvent::Constructed { type_name: "i32" };
/// assert_eq!(event.to_string(), "constructed { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternEvent {
    /// A singleton instance was constructed and published.
    Constructed {
        /// The type name of the instance (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// A singleton constructor returned an error or panicked. The cell stays empty.
    ConstructionFailed {
        /// The type name of the instance that failed to construct
        type_name: &'static str,
    },

    /// An owned singleton cell was torn down with `take`.
    TornDown {
        /// The type name of the released instance
        type_name: &'static str,
    },

    /// A factory resolved a tag to one of its variants.
    Dispatched {
        /// Name of the factory table (e.g. "sensor", "algorithm")
        factory: &'static str,
        /// The tag as supplied by the caller
        tag: String,
        /// The variant that was produced
        variant: &'static str,
        /// Whether the tag was unrecognized and the fallback variant was used
        fallback: bool,
    },
}

impl std::fmt::Display for PatternEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternEvent::Constructed { type_name } => {
                write!(f, "constructed {{ type_name: {} }}", type_name)
            }
            PatternEvent::ConstructionFailed { type_name } => {
                write!(f, "construction_failed {{ type_name: {} }}", type_name)
            }
            PatternEvent::TornDown { type_name } => {
                write!(f, "torn_down {{ type_name: {} }}", type_name)
            }
            PatternEvent::Dispatched {
                factory,
                tag,
                variant,
                fallback,
            } => write!(
                f,
                "dispatch {{ factory: {}, tag: {:?}, variant: {}, fallback: {} }}",
                factory, tag, variant, fallback
            ),
        }
    }
}
