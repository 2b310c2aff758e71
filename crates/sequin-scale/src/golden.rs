//! Golden-ratio scalars.
//!
//! Every derived scale in this crate is a pure function of these two
//! constants and the Fibonacci table.

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_894_9;

/// The reciprocal of [`PHI`], equal to `PHI - 1`.
pub const PHI_INVERSE: f64 = 0.618_033_988_749_894_9;

/// Returns `(PHI, PHI_INVERSE)` for callers that want both at once.
pub fn golden_ratio() -> (f64, f64) {
    (PHI, PHI_INVERSE)
}
