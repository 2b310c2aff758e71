//! Property-bag resolution: abstract attributes to concrete
//! declarations.
//!
//! Resolution walks a fixed attribute table rather than the bag's
//! insertion order, so precedence is documented and stable:
//!
//! 1. spacing shorthands (`margin`, `margin-x`, `margin-y`, `padding`,
//!    `padding-x`, `padding-y`)
//! 2. individual spacing sides
//! 3. layout/sizing
//! 4. flex/grid
//! 5. position
//! 6. color/border/shadow
//! 7. typography
//! 8. overflow
//!
//! Later rows overwrite earlier ones for the same output property, so
//! an explicit `padding-left` always beats the `padding` or `padding-x`
//! shorthand, regardless of the order the caller filled the bag in. The
//! raw-literal escape hatch is applied after the whole table and
//! overrides anything.
//!
//! ```rust
//! use sequin::{resolve, PropertyBag, Theme};
//!
//! let theme = Theme::new().add("space-md", 24);
//! let bag = PropertyBag::new()
//!     .set("padding-x", "space-md")
//!     .set("color", "tomato");
//!
//! let decls = resolve(&bag, &theme).unwrap();
//! assert_eq!(decls.get("padding-left"), Some("24"));
//! assert_eq!(decls.get("color"), Some("tomato"));
//! ```

use std::collections::BTreeMap;

use crate::bag::PropertyBag;
use crate::error::{ResolveError, Result};
use crate::theme::{Theme, DEFAULT_COLOR};
use crate::value::Scalar;

/// How one input attribute maps to output properties.
#[derive(Debug, Clone, Copy)]
enum Expansion {
    /// One declaration.
    Single(&'static str),
    /// Two declarations sharing one value, fixed internal order.
    Pair(&'static str, &'static str),
    /// Four declarations sharing one value (top, right, bottom, left).
    Quad([&'static str; 4]),
}

#[derive(Debug, Clone, Copy)]
struct AttrSpec {
    name: &'static str,
    expansion: Expansion,
    /// Numbers for this attribute render without the theme unit.
    unitless: bool,
    /// The attribute takes a color value; numbers are never valid and
    /// fall back to [`DEFAULT_COLOR`] instead of gaining a unit.
    color: bool,
}

const fn single(name: &'static str) -> AttrSpec {
    AttrSpec {
        name,
        expansion: Expansion::Single(name),
        unitless: false,
        color: false,
    }
}

const fn unitless(name: &'static str) -> AttrSpec {
    AttrSpec {
        name,
        expansion: Expansion::Single(name),
        unitless: true,
        color: false,
    }
}

const fn color_attr(name: &'static str) -> AttrSpec {
    AttrSpec {
        name,
        expansion: Expansion::Single(name),
        unitless: false,
        color: true,
    }
}

/// Every attribute the resolver understands, in processing order.
///
/// This table IS the precedence rule: rows are processed top to bottom
/// and later writes win.
const ATTRIBUTES: &[AttrSpec] = &[
    // Spacing shorthands.
    AttrSpec {
        name: "margin",
        expansion: Expansion::Quad(["margin-top", "margin-right", "margin-bottom", "margin-left"]),
        unitless: false,
        color: false,
    },
    AttrSpec {
        name: "margin-x",
        expansion: Expansion::Pair("margin-left", "margin-right"),
        unitless: false,
        color: false,
    },
    AttrSpec {
        name: "margin-y",
        expansion: Expansion::Pair("margin-top", "margin-bottom"),
        unitless: false,
        color: false,
    },
    AttrSpec {
        name: "padding",
        expansion: Expansion::Quad([
            "padding-top",
            "padding-right",
            "padding-bottom",
            "padding-left",
        ]),
        unitless: false,
        color: false,
    },
    AttrSpec {
        name: "padding-x",
        expansion: Expansion::Pair("padding-left", "padding-right"),
        unitless: false,
        color: false,
    },
    AttrSpec {
        name: "padding-y",
        expansion: Expansion::Pair("padding-top", "padding-bottom"),
        unitless: false,
        color: false,
    },
    // Individual spacing sides.
    single("margin-top"),
    single("margin-right"),
    single("margin-bottom"),
    single("margin-left"),
    single("padding-top"),
    single("padding-right"),
    single("padding-bottom"),
    single("padding-left"),
    // Layout and sizing.
    single("width"),
    single("height"),
    single("min-width"),
    single("max-width"),
    single("min-height"),
    single("max-height"),
    single("display"),
    single("gap"),
    // Flex and grid.
    single("flex-direction"),
    single("justify-content"),
    single("align-items"),
    single("flex-wrap"),
    single("grid-template-columns"),
    // Position.
    single("position"),
    single("top"),
    single("right"),
    single("bottom"),
    single("left"),
    unitless("z-index"),
    // Color, border, shadow.
    color_attr("color"),
    color_attr("background"),
    single("border"),
    color_attr("border-color"),
    single("border-radius"),
    single("box-shadow"),
    unitless("opacity"),
    // Typography.
    single("font-size"),
    unitless("font-weight"),
    unitless("line-height"),
    single("letter-spacing"),
    single("text-align"),
    // Overflow.
    single("overflow"),
    single("overflow-x"),
    single("overflow-y"),
];

/// A resolved set of `property -> value` declarations.
///
/// Iteration order is the property name order, so structurally
/// identical inputs produce byte-identical [`to_css`](Self::to_css)
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclarationSet {
    decls: BTreeMap<String, String>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, property: &str, value: String) {
        self.decls.insert(property.to_string(), value);
    }

    /// Resolved value for a property, if present.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls.get(property).map(String::as_str)
    }

    /// Declarations in property-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Renders `property: value;` lines, one per declaration.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (property, value) in self.iter() {
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }
}

/// Resolves one attribute value against the theme.
///
/// - `None` resolves to nothing.
/// - Text matching a token-table key resolves to the token's
///   stringified value (no unit appended; the table owns its values).
/// - A number resolves to the number plus the theme's unit, or bare for
///   unitless properties.
/// - Any other text passes through verbatim as a literal.
pub fn process_value(value: Option<&Scalar>, theme: &Theme, unitless: bool) -> Option<String> {
    match value? {
        Scalar::Text(text) => match theme.get(text) {
            Some(token) => Some(token.render()),
            None => Some(text.clone()),
        },
        Scalar::Number(number) => {
            if unitless {
                Some(format!("{}", number))
            } else {
                Some(format!("{}{}", number, theme.unit()))
            }
        }
    }
}

/// Resolves a property bag without breakpoint selection.
///
/// # Errors
///
/// Returns [`ResolveError::UnknownAttribute`] if the bag names an
/// attribute outside the resolver's table, or
/// [`ResolveError::MalformedRaw`] for a raw segment without a
/// `prop: value` shape.
pub fn resolve(bag: &PropertyBag, theme: &Theme) -> Result<DeclarationSet> {
    resolve_at(bag, theme, None)
}

/// Resolves a property bag for one breakpoint.
///
/// Attributes with an override for `breakpoint` use it; everything else
/// uses its base value. `None` always resolves base values.
///
/// # Errors
///
/// As [`resolve`], plus [`ResolveError::UnknownBreakpoint`] when the
/// key is not declared by the theme.
pub fn resolve_at(
    bag: &PropertyBag,
    theme: &Theme,
    breakpoint: Option<&str>,
) -> Result<DeclarationSet> {
    if let Some(key) = breakpoint {
        if !theme.has_breakpoint(key) {
            return Err(ResolveError::UnknownBreakpoint {
                name: key.to_string(),
            });
        }
    }
    for name in bag.names() {
        if !ATTRIBUTES.iter().any(|spec| spec.name == name) {
            return Err(ResolveError::UnknownAttribute {
                name: name.to_string(),
            });
        }
    }

    let mut decls = DeclarationSet::new();
    for spec in ATTRIBUTES {
        let Some(value) = bag.get(spec.name) else {
            continue;
        };
        let scalar = value.for_breakpoint(breakpoint);
        let rendered = if spec.color {
            process_color(scalar, theme)
        } else {
            let Some(rendered) = process_value(Some(scalar), theme, spec.unitless) else {
                continue;
            };
            rendered
        };
        match spec.expansion {
            Expansion::Single(property) => decls.insert(property, rendered),
            Expansion::Pair(first, second) => {
                decls.insert(first, rendered.clone());
                decls.insert(second, rendered);
            }
            Expansion::Quad(properties) => {
                for property in properties {
                    decls.insert(property, rendered.clone());
                }
            }
        }
    }

    if let Some(raw) = bag.raw_css() {
        apply_raw(raw, &mut decls)?;
    }

    Ok(decls)
}

/// Resolves a color-typed attribute.
///
/// Themed lookups go through [`Theme::color_or_default`], so a token
/// that (incorrectly) holds a number yields [`DEFAULT_COLOR`] rather
/// than a bare numeral. A bare numeric value is not a color either and
/// gets the same fallback; unmatched text passes through verbatim.
fn process_color(scalar: &Scalar, theme: &Theme) -> String {
    match scalar {
        Scalar::Text(text) => {
            if theme.get(text).is_some() {
                theme.color_or_default(text)
            } else {
                text.clone()
            }
        }
        Scalar::Number(_) => DEFAULT_COLOR.to_string(),
    }
}

/// Parses the raw-literal escape hatch and applies it last.
fn apply_raw(raw: &str, decls: &mut DeclarationSet) -> Result<()> {
    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (property, value) = segment
            .split_once(':')
            .ok_or_else(|| ResolveError::MalformedRaw {
                segment: segment.to_string(),
            })?;
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            return Err(ResolveError::MalformedRaw {
                segment: segment.to_string(),
            });
        }
        decls.insert(property, value.to_string());
    }
    Ok(())
}
