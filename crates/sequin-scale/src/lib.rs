//! # Sequin Scale - Generated design-token constants
//!
//! `sequin-scale` is the constant generator underneath the `sequin`
//! token engine. It produces two primitives — the golden-ratio scalars
//! and a memoized Fibonacci table — and derives every named scale from
//! them: spacing, corner radius, animation duration, and easing curves.
//! A fixed 8-unit grid spacing scale is also provided as a separate,
//! explicitly named system.
//!
//! Everything here is deterministic and side-effect free. The only
//! mutable state is the Fibonacci memoization cache, which extends
//! under a write lock and never rewrites a published entry, so it is
//! safe to hit from concurrent first-access.
//!
//! ## Quick Start
//!
//! ```rust
//! use sequin_scale::{fibonacci, SpacingScale, TokenSnapshot, PHI, PHI_INVERSE};
//!
//! assert_eq!(fibonacci(6).unwrap(), 8);
//! assert!((PHI * PHI_INVERSE - 1.0).abs() < 1e-9);
//!
//! let spacing = SpacingScale::golden(4.0);
//! assert_eq!(spacing.get("lg").unwrap(), 32.0);
//!
//! // Versioned export for cross-implementation regression pinning.
//! let snapshot = TokenSnapshot::capture(4.0, 300.0);
//! assert!(snapshot.to_json().unwrap().contains("golden.phi"));
//! ```

pub mod error;
pub mod fib;
pub mod golden;
pub mod scale;
pub mod snapshot;

pub use error::{Result, ScaleError};
pub use fib::{fibonacci, shared, FibTable, MAX_INDEX, MAX_TERMS};
pub use golden::{golden_ratio, PHI, PHI_INVERSE};
pub use scale::{
    DurationScale, Easing, RadiusScale, SpacingScale, SpacingSystem, DURATION_STEPS, STEP_NAMES,
};
pub use snapshot::{SnapshotEntry, TokenSnapshot, SNAPSHOT_VERSION};
