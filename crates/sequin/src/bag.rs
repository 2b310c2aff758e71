//! Transient property bags supplied to the resolver.

use crate::value::PropValue;

/// An ordered collection of named style attributes for one resolution
/// call.
///
/// Bags are created per call and discarded; the resolver never retains
/// one. Insertion order does not matter — the resolver imposes its own
/// documented processing order — but setting the same attribute twice
/// replaces the earlier value.
///
/// ```rust
/// use sequin::{PropertyBag, PropValue};
///
/// let bag = PropertyBag::new()
///     .set("padding-x", 12)
///     .set("color", "accent")
///     .set("width", PropValue::new(320).at("lg", 480))
///     .raw("outline: none");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    entries: Vec<(String, PropValue)>,
    raw: Option<String>,
}

impl PropertyBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning `self` for chaining. A repeated
    /// name replaces the earlier value in place.
    pub fn set(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(entry, _)| entry == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name.to_string(), value)),
        }
        self
    }

    /// Sets the raw-literal escape hatch: `;`-separated `prop: value`
    /// declarations appended after everything else, overriding any
    /// computed declaration.
    pub fn raw(mut self, css: &str) -> Self {
        self.raw = Some(css.to_string());
        self
    }

    /// Value for an attribute, if set.
    pub(crate) fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| value)
    }

    /// Attribute names in insertion order.
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The raw-literal content, if set.
    pub(crate) fn raw_css(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Returns true if the bag has no attributes and no raw literal.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.raw.is_none()
    }

    /// Number of named attributes (the raw literal not included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
