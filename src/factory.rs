//! Tag-dispatched construction of capability implementations.
//!
//! A [`CapabilityFactory`] maps string tags to constructors for implementations of one
//! shared trait (`C` is usually a `dyn Trait`). Matching is exact and case-sensitive.
//! Any tag that is not registered, the empty string included, produces the fallback
//! implementation instead of an error.
//!
//! # Examples
//!
//! ```
//! use singleton_patterns::CapabilityFactory;
//!
//! trait Greeter {
//!     fn greet(&self) -> &'static str;
//! }
//!
//! struct English;
//! struct Silent;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> &'static str { "hello" }
//! }
//! impl Greeter for Silent {
//!     fn greet(&self) -> &'static str { "" }
//! }
//!
//! let factory = CapabilityFactory::<dyn Greeter>::new("greeter", "silent", || Box::new(Silent))
//!     .with("en", "english", || Box::new(English));
//!
//! assert_eq!(factory.create("en").greet(), "hello");
//! assert_eq!(factory.create("fr").greet(), "");
//! ```

use std::fmt;

use tracing::debug;

use crate::{trace::emit_event, PatternEvent};

/// Constructor producing a uniquely owned implementation.
pub type Constructor<C> = fn() -> Box<C>;

struct Entry<C: ?Sized> {
    tag: &'static str,
    variant: &'static str,
    construct: Constructor<C>,
}

/// A closed table of tag → constructor, with a fallback for everything else.
pub struct CapabilityFactory<C: ?Sized> {
    name: &'static str,
    entries: Vec<Entry<C>>,
    fallback_variant: &'static str,
    fallback: Constructor<C>,
}

impl<C: ?Sized> CapabilityFactory<C> {
    /// Creates a factory that knows no tags yet; every tag yields `fallback`.
    ///
    /// `name` identifies the table in trace events and log records.
    pub fn new(
        name: &'static str,
        fallback_variant: &'static str,
        fallback: Constructor<C>,
    ) -> Self {
        Self {
            name,
            entries: Vec::new(),
            fallback_variant,
            fallback,
        }
    }

    /// Registers `tag`. Registering a tag twice replaces the earlier entry.
    pub fn with(mut self, tag: &'static str, variant: &'static str, construct: Constructor<C>) -> Self {
        let entry = Entry {
            tag,
            variant,
            construct,
        };

        match self.entries.iter_mut().find(|e| e.tag == tag) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }

        self
    }

    /// Name of this table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `tag` is registered (exact match).
    pub fn recognizes(&self, tag: &str) -> bool {
        self.entry(tag).is_some()
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.tag)
    }

    /// Name of the variant `create(tag)` would produce, without constructing it.
    pub fn resolve(&self, tag: &str) -> &'static str {
        self.entry(tag)
            .map_or(self.fallback_variant, |entry| entry.variant)
    }

    /// Constructs the implementation registered for `tag`, or the fallback.
    pub fn create(&self, tag: &str) -> Box<C> {
        let (variant, construct, fallback) = match self.entry(tag) {
            Some(entry) => (entry.variant, entry.construct, false),
            None => (self.fallback_variant, self.fallback, true),
        };

        debug!(factory = self.name, tag, variant, fallback, "dispatch");
        emit_event(&PatternEvent::Dispatched {
            factory: self.name,
            tag: tag.to_string(),
            variant,
            fallback,
        });

        construct()
    }

    fn entry(&self, tag: &str) -> Option<&Entry<C>> {
        self.entries.iter().find(|e| e.tag == tag)
    }
}

impl<C: ?Sized> fmt::Debug for CapabilityFactory<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityFactory")
            .field("name", &self.name)
            .field("tags", &self.tags().collect::<Vec<_>>())
            .field("fallback", &self.fallback_variant)
            .finish()
    }
}
