//! Stagger scheduling: per-element animation start offsets.
//!
//! Given an ordered collection of `total` elements, the scheduler
//! assigns each index a non-negative, finite delay. Linear mode spaces
//! elements evenly; Fibonacci mode weights each element by its share of
//! the sequence's prefix sum and damps the result with `PHI_INVERSE`,
//! which makes sequential reveals accelerate organically instead of
//! ticking like a metronome.
//!
//! Monotonicity of delay in the index is NOT guaranteed by construction
//! in Fibonacci mode. It does hold for collection sizes comfortably
//! inside the table's capacity, and the test suite verifies that
//! per configuration rather than assuming it.
//!
//! ```rust
//! use sequin::{compute_delay, Direction, StaggerParams};
//!
//! let delay = compute_delay(&StaggerParams {
//!     index: 2,
//!     total: 5,
//!     base_delay: 100.0,
//!     fibonacci: false,
//!     direction: Direction::Forward,
//! }).unwrap();
//! assert_eq!(delay, 200.0);
//! ```

use sequin_scale::{fib, PHI_INVERSE};

use crate::error::StaggerError;

/// Iteration direction for a staggered reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// First element starts first.
    Forward,
    /// Last element starts first.
    Reverse,
}

/// Inputs for one delay computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerParams {
    /// Position of the element, in `[0, total)`.
    pub index: usize,
    /// Size of the ordered collection.
    pub total: usize,
    /// Base delay in the caller's time unit (typically milliseconds).
    pub base_delay: f64,
    /// Weight delays by the Fibonacci sequence instead of linearly.
    pub fibonacci: bool,
    /// Which end of the collection starts first.
    pub direction: Direction,
}

/// Offset into the Fibonacci table, skipping the near-duplicate
/// `0, 1, 1` head so the first element still gets a usable delay.
const FIB_OFFSET: usize = 3;

/// Computes the delay for one element.
///
/// The result is always finite and `>= 0`. Both Fibonacci denominators
/// fall back to `1` rather than divide by zero.
///
/// # Errors
///
/// Returns [`StaggerError::DegenerateInput`] when `index >= total` or
/// `base_delay` is negative or non-finite.
pub fn compute_delay(params: &StaggerParams) -> Result<f64, StaggerError> {
    validate_base_delay(params.base_delay)?;
    if params.index >= params.total {
        return Err(StaggerError::DegenerateInput {
            reason: format!(
                "index {} out of range for total {}",
                params.index, params.total
            ),
        });
    }

    let effective = match params.direction {
        Direction::Forward => params.index,
        Direction::Reverse => params.total - 1 - params.index,
    };

    if !params.fibonacci {
        return Ok(effective as f64 * params.base_delay);
    }

    let table = fib::shared();
    let len = table.ensure_len(params.total.saturating_add(FIB_OFFSET));

    let fib_index = effective.saturating_add(FIB_OFFSET).min(len - 1);
    let fib_value = table.get(fib_index).unwrap_or(1) as f64;

    let sum = table.prefix_sum(params.total.saturating_add(2).min(len - 1));
    let fib_sum = if sum == 0 { 1.0 } else { sum as f64 };

    let proportional = fib_value / fib_sum;
    Ok(proportional * params.base_delay * params.total as f64 * PHI_INVERSE)
}

/// Computes the delays for every index of a collection.
///
/// Returns an empty vector for `total == 0`.
///
/// # Errors
///
/// Returns [`StaggerError::DegenerateInput`] when `base_delay` is
/// negative or non-finite.
pub fn delays(
    total: usize,
    base_delay: f64,
    fibonacci: bool,
    direction: Direction,
) -> Result<Vec<f64>, StaggerError> {
    validate_base_delay(base_delay)?;
    (0..total)
        .map(|index| {
            compute_delay(&StaggerParams {
                index,
                total,
                base_delay,
                fibonacci,
                direction,
            })
        })
        .collect()
}

fn validate_base_delay(base_delay: f64) -> Result<(), StaggerError> {
    if !base_delay.is_finite() {
        return Err(StaggerError::DegenerateInput {
            reason: format!("base delay {} is not finite", base_delay),
        });
    }
    if base_delay < 0.0 {
        return Err(StaggerError::DegenerateInput {
            reason: format!("base delay {} is negative", base_delay),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(index: usize, total: usize, fibonacci: bool, direction: Direction) -> StaggerParams {
        StaggerParams {
            index,
            total,
            base_delay: 100.0,
            fibonacci,
            direction,
        }
    }

    #[test]
    fn test_linear_forward() {
        for index in 0..5 {
            let delay = compute_delay(&params(index, 5, false, Direction::Forward)).unwrap();
            assert_eq!(delay, index as f64 * 100.0);
        }
    }

    #[test]
    fn test_reverse_mirrors_forward() {
        for index in 0..7 {
            let reverse = compute_delay(&params(index, 7, true, Direction::Reverse)).unwrap();
            let mirrored = compute_delay(&params(6 - index, 7, true, Direction::Forward)).unwrap();
            assert_eq!(reverse, mirrored);
        }
    }

    #[test]
    fn test_fibonacci_first_element_nonzero() {
        // The offset of 3 skips the 0, 1, 1 head: the first element's
        // weight is F(3) = 2, never zero.
        let delay = compute_delay(&params(0, 4, true, Direction::Forward)).unwrap();
        assert!(delay > 0.0);
    }

    #[test]
    fn test_fibonacci_delays_finite_and_nonnegative() {
        for total in 1..40 {
            for index in 0..total {
                let delay = compute_delay(&params(index, total, true, Direction::Forward)).unwrap();
                assert!(delay.is_finite());
                assert!(delay >= 0.0);
            }
        }
    }

    #[test]
    fn test_fibonacci_known_value() {
        // total = 4: table holds >= 7 terms; sum over indices 0..6 is
        // 0+1+1+2+3+5 = 12. index 0 -> F(3) = 2.
        let delay = compute_delay(&StaggerParams {
            index: 0,
            total: 4,
            base_delay: 100.0,
            fibonacci: true,
            direction: Direction::Forward,
        })
        .unwrap();
        let expected = 2.0 / 12.0 * 100.0 * 4.0 * sequin_scale::PHI_INVERSE;
        assert!((delay - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fibonacci_delays_monotonic_for_small_totals() {
        // Not a construction-level guarantee; checked per configuration.
        // Within table capacity the weight index grows with the
        // effective index, so forward delays never decrease.
        for total in 2..60 {
            let all = delays(total, 120.0, true, Direction::Forward).unwrap();
            assert!(
                all.windows(2).all(|pair| pair[0] <= pair[1]),
                "delays not monotonic for total {}",
                total
            );
        }
    }

    #[test]
    fn test_index_out_of_range() {
        assert!(compute_delay(&params(5, 5, false, Direction::Forward)).is_err());
        assert!(compute_delay(&params(0, 0, false, Direction::Forward)).is_err());
    }

    #[test]
    fn test_degenerate_base_delay() {
        let mut bad = params(0, 3, false, Direction::Forward);
        bad.base_delay = f64::NAN;
        assert!(compute_delay(&bad).is_err());
        bad.base_delay = f64::INFINITY;
        assert!(compute_delay(&bad).is_err());
        bad.base_delay = -1.0;
        assert!(compute_delay(&bad).is_err());
    }

    #[test]
    fn test_delays_empty_for_zero_total() {
        let all = delays(0, 100.0, true, Direction::Forward).unwrap();
        assert!(all.is_empty());
    }

    #[test]
    fn test_delays_matches_compute_delay() {
        let all = delays(6, 80.0, true, Direction::Reverse).unwrap();
        assert_eq!(all.len(), 6);
        for (index, delay) in all.iter().enumerate() {
            let single = compute_delay(&StaggerParams {
                index,
                total: 6,
                base_delay: 80.0,
                fibonacci: true,
                direction: Direction::Reverse,
            })
            .unwrap();
            assert_eq!(*delay, single);
        }
    }

    #[test]
    fn test_zero_base_delay_is_all_zero() {
        let all = delays(5, 0.0, true, Direction::Forward).unwrap();
        assert!(all.iter().all(|delay| *delay == 0.0));
    }

    #[test]
    fn test_large_total_does_not_panic_or_overflow() {
        // Past the u64 table capacity the index and sum clamp to the
        // last term; the result must stay finite.
        let delay = compute_delay(&StaggerParams {
            index: 499,
            total: 500,
            base_delay: 10.0,
            fibonacci: true,
            direction: Direction::Forward,
        })
        .unwrap();
        assert!(delay.is_finite());
        assert!(delay >= 0.0);
    }
}
