//! Scalar values and per-breakpoint overrides for property bags.

use std::collections::BTreeMap;

/// A single attribute value: either a number (given the theme's length
/// unit when rendered) or text (a token name or a literal).
///
/// Conversions mirror the usual builder ergonomics — numbers and
/// strings both convert directly:
///
/// ```rust
/// use sequin::Scalar;
///
/// let width: Scalar = 240.into();
/// let color: Scalar = "accent".into();
/// assert!(matches!(width, Scalar::Number(_)));
/// assert!(matches!(color, Scalar::Text(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A raw number; the resolver appends the theme's unit unless the
    /// target property is unitless.
    Number(f64),
    /// A token name or a literal value passed through verbatim.
    Text(String),
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(f64::from(value))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// An attribute value plus optional per-breakpoint overrides.
///
/// The base value applies everywhere; an override replaces it when the
/// resolver runs for that breakpoint.
///
/// ```rust
/// use sequin::PropValue;
///
/// let padding = PropValue::new(8).at("lg", 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropValue {
    base: Scalar,
    overrides: BTreeMap<String, Scalar>,
}

impl PropValue {
    /// Creates a value with no breakpoint overrides.
    pub fn new(base: impl Into<Scalar>) -> Self {
        Self {
            base: base.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Adds an override for one breakpoint, returning `self` for
    /// chaining. A repeated key replaces the earlier override.
    pub fn at(mut self, breakpoint: &str, value: impl Into<Scalar>) -> Self {
        self.overrides.insert(breakpoint.to_string(), value.into());
        self
    }

    /// The value in effect for the given breakpoint (base when no
    /// override exists, or when resolving without a breakpoint).
    pub(crate) fn for_breakpoint(&self, breakpoint: Option<&str>) -> &Scalar {
        breakpoint
            .and_then(|key| self.overrides.get(key))
            .unwrap_or(&self.base)
    }

    /// Breakpoint keys this value overrides.
    pub fn override_keys(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }
}

impl From<Scalar> for PropValue {
    fn from(value: Scalar) -> Self {
        PropValue::new(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::new(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::new(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::new(value)
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_from_number() {
        assert_eq!(Scalar::from(16.0), Scalar::Number(16.0));
        assert_eq!(Scalar::from(3), Scalar::Number(3.0));
    }

    #[test]
    fn test_scalar_from_text() {
        assert_eq!(Scalar::from("md"), Scalar::Text("md".to_string()));
        assert_eq!(
            Scalar::from(String::from("red")),
            Scalar::Text("red".to_string())
        );
    }

    #[test]
    fn test_prop_value_base_only() {
        let value = PropValue::new(8);
        assert_eq!(value.for_breakpoint(None), &Scalar::Number(8.0));
        assert_eq!(value.for_breakpoint(Some("lg")), &Scalar::Number(8.0));
    }

    #[test]
    fn test_prop_value_override() {
        let value = PropValue::new(8).at("lg", 16);
        assert_eq!(value.for_breakpoint(None), &Scalar::Number(8.0));
        assert_eq!(value.for_breakpoint(Some("lg")), &Scalar::Number(16.0));
        assert_eq!(value.for_breakpoint(Some("sm")), &Scalar::Number(8.0));
    }

    #[test]
    fn test_repeated_override_replaces() {
        let value = PropValue::new(8).at("lg", 16).at("lg", 24);
        assert_eq!(value.for_breakpoint(Some("lg")), &Scalar::Number(24.0));
        assert_eq!(value.override_keys().count(), 1);
    }
}
