//! Convenient one-line import for the common surface.
//!
//! ```rust,ignore
//! use sequin::prelude::*;
//!
//! let theme = Theme::new().add("space-md", 24);
//! let decls = resolve(&PropertyBag::new().set("gap", "space-md"), &theme)?;
//! ```

pub use crate::bag::PropertyBag;
pub use crate::error::{ResolveError, StaggerError};
pub use crate::resolver::{resolve, resolve_at, DeclarationSet};
pub use crate::stagger::{compute_delay, delays, Direction, StaggerParams};
pub use crate::theme::{Theme, TokenValue};
pub use crate::value::{PropValue, Scalar};

pub use sequin_scale::{SpacingScale, TokenSnapshot, PHI, PHI_INVERSE};
