//! Named token scales derived from the golden ratio and Fibonacci table.
//!
//! Two spacing systems coexist deliberately: a Fibonacci-derived scale
//! ([`SpacingScale::golden`]) and a fixed 8-unit grid
//! ([`SpacingScale::grid`]). They are independently configurable and are
//! never merged; a caller picks one per context and the snapshot labels
//! them separately.
//!
//! # Example
//!
//! ```rust
//! use sequin_scale::SpacingScale;
//!
//! let golden = SpacingScale::golden(4.0);
//! assert_eq!(golden.get("md").unwrap(), 20.0); // 4 * F(5)
//!
//! let grid = SpacingScale::grid(1.0);
//! assert_eq!(grid.get("md").unwrap(), 16.0); // 2 * 8
//! ```

use crate::error::{Result, ScaleError};
use crate::fib::fib_prefix;
use crate::golden::{PHI, PHI_INVERSE};

/// Step names shared by the spacing and radius scales, smallest first.
pub const STEP_NAMES: [&str; 6] = ["xs", "sm", "md", "lg", "xl", "xxl"];

/// Step names of the duration scale, shortest first.
pub const DURATION_STEPS: [&str; 5] = ["instant", "fast", "normal", "slow", "glacial"];

/// The grid system's unit multiple.
const GRID_UNIT: f64 = 8.0;

/// Grid steps as multiples of [`GRID_UNIT`].
const GRID_MULTIPLES: [f64; 6] = [0.5, 1.0, 1.5, 2.0, 3.0, 4.0];

/// Fibonacci indices backing the golden spacing steps (`F(3)..F(8)`).
///
/// Starting at `F(3)` skips the degenerate `0, 1, 1` head so the
/// smallest step is still a usable distance.
const SPACING_FIB_INDICES: [usize; 6] = [3, 4, 5, 6, 7, 8];

/// Fibonacci indices backing the radius steps (`F(2)..F(7)`).
const RADIUS_FIB_INDICES: [usize; 6] = [2, 3, 4, 5, 6, 7];

fn lookup(steps: &[(&'static str, f64)], name: &str) -> Result<f64> {
    steps
        .iter()
        .find(|(step, _)| *step == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| ScaleError::UnknownStep {
            name: name.to_string(),
        })
}

/// Which generator a [`SpacingScale`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingSystem {
    /// Fibonacci terms scaled by the base unit.
    Golden,
    /// Fixed multiples of an 8-unit grid.
    Grid,
}

impl SpacingSystem {
    /// Stable lowercase label, used in snapshot entry names.
    pub fn label(self) -> &'static str {
        match self {
            SpacingSystem::Golden => "golden",
            SpacingSystem::Grid => "grid",
        }
    }
}

/// A named spacing scale with steps `xs` through `xxl`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingScale {
    system: SpacingSystem,
    base: f64,
    steps: [(&'static str, f64); 6],
}

impl SpacingScale {
    /// Builds the Fibonacci-derived scale: `base * F(3..=8)`, i.e.
    /// `2, 3, 5, 8, 13, 21` base units.
    pub fn golden(base: f64) -> Self {
        let fib = fib_prefix::<9>();
        let mut steps = [("", 0.0); 6];
        for (slot, (name, index)) in steps
            .iter_mut()
            .zip(STEP_NAMES.iter().zip(SPACING_FIB_INDICES))
        {
            *slot = (*name, base * fib[index] as f64);
        }
        Self {
            system: SpacingSystem::Golden,
            base,
            steps,
        }
    }

    /// Builds the fixed 8-unit grid scale: `base * {4, 8, 12, 16, 24, 32}`.
    pub fn grid(base: f64) -> Self {
        let mut steps = [("", 0.0); 6];
        for (slot, (name, multiple)) in steps
            .iter_mut()
            .zip(STEP_NAMES.iter().zip(GRID_MULTIPLES))
        {
            *slot = (*name, base * multiple * GRID_UNIT);
        }
        Self {
            system: SpacingSystem::Grid,
            base,
            steps,
        }
    }

    /// Looks up a step by name.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::UnknownStep`] for a name outside
    /// [`STEP_NAMES`].
    pub fn get(&self, name: &str) -> Result<f64> {
        lookup(&self.steps, name)
    }

    /// Steps in fixed order, smallest first.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.steps.iter().copied()
    }

    /// The generator this scale was built from.
    pub fn system(&self) -> SpacingSystem {
        self.system
    }

    /// The base unit the scale was built with.
    pub fn base(&self) -> f64 {
        self.base
    }
}

/// Corner-radius steps derived from Fibonacci terms `F(2)..=F(7)`
/// (`1, 2, 3, 5, 8, 13` base units).
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusScale {
    base: f64,
    steps: [(&'static str, f64); 6],
}

impl RadiusScale {
    pub fn new(base: f64) -> Self {
        let fib = fib_prefix::<8>();
        let mut steps = [("", 0.0); 6];
        for (slot, (name, index)) in steps
            .iter_mut()
            .zip(STEP_NAMES.iter().zip(RADIUS_FIB_INDICES))
        {
            *slot = (*name, base * fib[index] as f64);
        }
        Self { base, steps }
    }

    /// Looks up a step by name.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::UnknownStep`] for an undefined name.
    pub fn get(&self, name: &str) -> Result<f64> {
        lookup(&self.steps, name)
    }

    /// Steps in fixed order, smallest first.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.steps.iter().copied()
    }

    pub fn base(&self) -> f64 {
        self.base
    }
}

/// Animation-duration steps in milliseconds.
///
/// The `normal` step equals the base duration; neighbours are spaced by
/// powers of [`PHI`], so each step is ~1.618x the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationScale {
    base_ms: f64,
    steps: [(&'static str, f64); 5],
}

impl DurationScale {
    pub fn new(base_ms: f64) -> Self {
        let mut steps = [("", 0.0); 5];
        for (slot, (i, name)) in steps.iter_mut().zip(DURATION_STEPS.iter().enumerate()) {
            let exponent = i as i32 - 2;
            *slot = (*name, base_ms * PHI.powi(exponent));
        }
        Self { base_ms, steps }
    }

    /// Looks up a step by name.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::UnknownStep`] for an undefined name.
    pub fn get(&self, name: &str) -> Result<f64> {
        lookup(&self.steps, name)
    }

    /// Steps in fixed order, shortest first.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.steps.iter().copied()
    }

    pub fn base_ms(&self) -> f64 {
        self.base_ms
    }
}

/// Named cubic-bezier easing curves with golden-ratio control points.
///
/// Each curve is the `(x1, y1, x2, y2)` coefficient quadruple of a CSS
/// `cubic-bezier()` timing function.
#[derive(Debug, Clone, PartialEq)]
pub struct Easing {
    curves: [(&'static str, [f64; 4]); 3],
}

impl Easing {
    pub fn new() -> Self {
        let inv = PHI_INVERSE;
        Self {
            curves: [
                ("ease-golden", [inv, 0.0, 1.0 - inv, 1.0]),
                ("ease-in-golden", [inv, 0.0, 1.0, 1.0]),
                ("ease-out-golden", [0.0, 0.0, 1.0 - inv, 1.0]),
            ],
        }
    }

    /// Looks up a curve by name.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::UnknownStep`] for an undefined name.
    pub fn get(&self, name: &str) -> Result<[f64; 4]> {
        self.curves
            .iter()
            .find(|(curve, _)| *curve == name)
            .map(|(_, coefficients)| *coefficients)
            .ok_or_else(|| ScaleError::UnknownStep {
                name: name.to_string(),
            })
    }

    /// Curves in fixed order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, [f64; 4])> + '_ {
        self.curves.iter().copied()
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fib::shared;

    #[test]
    fn test_golden_spacing_steps() {
        let scale = SpacingScale::golden(1.0);
        assert_eq!(scale.get("xs").unwrap(), 2.0);
        assert_eq!(scale.get("sm").unwrap(), 3.0);
        assert_eq!(scale.get("md").unwrap(), 5.0);
        assert_eq!(scale.get("lg").unwrap(), 8.0);
        assert_eq!(scale.get("xl").unwrap(), 13.0);
        assert_eq!(scale.get("xxl").unwrap(), 21.0);
        assert_eq!(scale.system(), SpacingSystem::Golden);
    }

    #[test]
    fn test_golden_spacing_matches_memoized_table() {
        let scale = SpacingScale::golden(4.0);
        for ((_, value), index) in scale.entries().zip(SPACING_FIB_INDICES) {
            assert_eq!(value, 4.0 * shared().value(index) as f64);
        }
    }

    #[test]
    fn test_grid_spacing_steps() {
        let scale = SpacingScale::grid(1.0);
        let values: Vec<f64> = scale.entries().map(|(_, value)| value).collect();
        assert_eq!(values, vec![4.0, 8.0, 12.0, 16.0, 24.0, 32.0]);
        assert_eq!(scale.system(), SpacingSystem::Grid);
    }

    #[test]
    fn test_systems_stay_independent() {
        let golden = SpacingScale::golden(1.0);
        let grid = SpacingScale::grid(1.0);
        assert_ne!(golden.get("md").unwrap(), grid.get("md").unwrap());
        assert_ne!(golden.system().label(), grid.system().label());
    }

    #[test]
    fn test_unknown_step() {
        let scale = SpacingScale::grid(1.0);
        assert!(matches!(
            scale.get("huge"),
            Err(ScaleError::UnknownStep { .. })
        ));
    }

    #[test]
    fn test_radius_steps() {
        let scale = RadiusScale::new(2.0);
        assert_eq!(scale.get("xs").unwrap(), 2.0);
        assert_eq!(scale.get("xxl").unwrap(), 26.0);
    }

    #[test]
    fn test_duration_normal_is_base() {
        let scale = DurationScale::new(300.0);
        assert_eq!(scale.get("normal").unwrap(), 300.0);
    }

    #[test]
    fn test_duration_steps_are_phi_spaced() {
        let scale = DurationScale::new(300.0);
        let values: Vec<f64> = scale.entries().map(|(_, value)| value).collect();
        for pair in values.windows(2) {
            assert!((pair[1] / pair[0] - PHI).abs() < 1e-9);
        }
    }

    #[test]
    fn test_duration_monotonic() {
        let scale = DurationScale::new(250.0);
        let values: Vec<f64> = scale.entries().map(|(_, value)| value).collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_easing_curves_in_unit_range() {
        let easing = Easing::new();
        for (_, [x1, y1, x2, y2]) in easing.entries() {
            for coord in [x1, y1, x2, y2] {
                assert!((0.0..=1.0).contains(&coord));
            }
        }
    }

    #[test]
    fn test_easing_unknown_curve() {
        let easing = Easing::new();
        assert!(easing.get("linear").is_err());
    }
}
