//! # Sequin - Design-token resolution and stagger scheduling
//!
//! `sequin` turns abstract bags of named style attributes into concrete
//! `property: value` declarations, and assigns per-element animation
//! delays so sequential reveals look organic rather than mechanical.
//! The numeric constants underneath — golden-ratio scalars, Fibonacci
//! tables, and the scales derived from them — live in
//! [`sequin-scale`](sequin_scale) and are re-exported here.
//!
//! The whole engine is pure and synchronous: no I/O beyond optional
//! theme-file loading, no global mutable state beyond the Fibonacci
//! memo table, and every call is independent.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: token table, base length unit, and breakpoint keys,
//!   built programmatically or loaded from YAML
//! - [`PropertyBag`]: the per-call input naming which attributes to
//!   compute, with optional per-breakpoint overrides and a raw-literal
//!   escape hatch
//! - [`resolve`] / [`resolve_at`]: produce a [`DeclarationSet`] in a
//!   fixed, documented precedence order
//! - [`compute_delay`] / [`delays`]: linear or Fibonacci-weighted
//!   stagger offsets
//!
//! ## Quick Start
//!
//! ```rust
//! use sequin::{resolve, delays, Direction, PropertyBag, Theme};
//!
//! let theme = Theme::named("brand")
//!     .add("space-md", 24)
//!     .add("accent", "#c9a227");
//!
//! let bag = PropertyBag::new()
//!     .set("padding-x", "space-md")
//!     .set("color", "accent")
//!     .set("width", 320);
//!
//! let decls = resolve(&bag, &theme).unwrap();
//! assert_eq!(decls.get("padding-left"), Some("24"));
//! assert_eq!(decls.get("color"), Some("#c9a227"));
//! assert_eq!(decls.get("width"), Some("320px"));
//!
//! // Delay each of five cards by an organically growing offset.
//! let offsets = delays(5, 120.0, true, Direction::Forward).unwrap();
//! assert_eq!(offsets.len(), 5);
//! assert!(offsets.iter().all(|d| d.is_finite() && *d >= 0.0));
//! ```

pub mod bag;
pub mod error;
pub mod prelude;
pub mod resolver;
pub mod stagger;
pub mod theme;
pub mod value;

pub use bag::PropertyBag;
pub use error::{ResolveError, Result, StaggerError};
pub use resolver::{process_value, resolve, resolve_at, DeclarationSet};
pub use stagger::{compute_delay, delays, Direction, StaggerParams};
pub use theme::{Theme, TokenValue, DEFAULT_BREAKPOINTS, DEFAULT_COLOR, DEFAULT_UNIT};
pub use value::{PropValue, Scalar};

// Constant generator, re-exported for callers that build their token
// tables from the generated scales.
pub use sequin_scale::{
    fibonacci, golden_ratio, DurationScale, Easing, RadiusScale, ScaleError, SpacingScale,
    SpacingSystem, TokenSnapshot, PHI, PHI_INVERSE,
};
