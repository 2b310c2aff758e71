//! Memoized Fibonacci table.
//!
//! The table grows lazily: the first access past the computed prefix
//! extends it under a write lock, and entries already handed out are
//! never rewritten. Any value returned once therefore stays valid for
//! the life of the process (stable-prefix invariant).
//!
//! A process-wide shared table is available through [`shared`]; the
//! top-level [`fibonacci`] function is the usual entry point.
//!
//! # Example
//!
//! ```rust
//! use sequin_scale::fibonacci;
//!
//! assert_eq!(fibonacci(0).unwrap(), 0);
//! assert_eq!(fibonacci(9).unwrap(), 34);
//! assert!(fibonacci(-1).is_err());
//! ```

use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::error::{Result, ScaleError};

/// Largest index whose Fibonacci value fits in a `u64`.
pub const MAX_INDEX: i64 = 93;

/// Number of terms in a fully extended table (`F(0)` through `F(93)`).
pub const MAX_TERMS: usize = MAX_INDEX as usize + 1;

static SHARED: Lazy<FibTable> = Lazy::new(FibTable::new);

/// Returns the process-wide shared Fibonacci table.
pub fn shared() -> &'static FibTable {
    &SHARED
}

/// Returns the Fibonacci term at `index` from the shared table.
///
/// # Errors
///
/// Returns [`ScaleError::InvalidSequenceIndex`] for a negative index and
/// [`ScaleError::SequenceOverflow`] for an index past [`MAX_INDEX`].
pub fn fibonacci(index: i64) -> Result<u64> {
    if index < 0 {
        return Err(ScaleError::InvalidSequenceIndex { index });
    }
    if index > MAX_INDEX {
        return Err(ScaleError::SequenceOverflow { index });
    }
    Ok(shared().value(index as usize))
}

/// Computes the first `N` Fibonacci terms as a fixed array.
///
/// Runs at compile time where possible. Scale constructors use this for
/// the short prefixes they need, keeping them infallible; consistency
/// with the memoized table is covered by tests.
pub(crate) const fn fib_prefix<const N: usize>() -> [u64; N] {
    let mut terms = [0u64; N];
    let mut i = 0;
    while i < N {
        terms[i] = match i {
            0 => 0,
            1 => 1,
            _ => terms[i - 1] + terms[i - 2],
        };
        i += 1;
    }
    terms
}

/// A grow-only memoized Fibonacci table.
///
/// Seeds are pinned: `F(0) = 0`, `F(1) = 1`, and `F(n) = F(n-1) + F(n-2)`
/// for `n >= 2`. The table caps itself at [`MAX_TERMS`] entries, the last
/// index representable in a `u64`.
#[derive(Debug)]
pub struct FibTable {
    terms: RwLock<Vec<u64>>,
}

impl FibTable {
    /// Creates a table holding only the two seed terms.
    pub fn new() -> Self {
        Self {
            terms: RwLock::new(vec![0, 1]),
        }
    }

    /// Returns the term at `index`, computing any missing prefix first.
    ///
    /// `index` must be at most [`MAX_INDEX`]; the typed entry point
    /// [`fibonacci`] enforces this, so the internal accessor clamps.
    pub fn value(&self, index: usize) -> u64 {
        let len = self.ensure_len(index + 1);
        let terms = self.read();
        terms[index.min(len - 1)]
    }

    /// Returns the term at `index` without extending the table.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.read().get(index).copied()
    }

    /// Extends the table to at least `len` terms, clamping at
    /// [`MAX_TERMS`]. Returns the resulting length.
    ///
    /// Extension happens under the write lock and only appends, so
    /// concurrent first-access cannot observe a partially written
    /// prefix or a rewritten entry.
    pub fn ensure_len(&self, len: usize) -> usize {
        let target = len.min(MAX_TERMS);
        {
            let terms = self.read();
            if terms.len() >= target {
                return terms.len();
            }
        }
        let mut terms = self
            .terms
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        while terms.len() < target {
            let n = terms.len();
            // Cannot overflow: MAX_TERMS caps the index at 93.
            let next = terms[n - 1] + terms[n - 2];
            terms.push(next);
        }
        terms.len()
    }

    /// Number of terms computed so far.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Always false; the seeds are present from construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Saturating sum of the first `upto` computed terms.
    ///
    /// `upto` past the computed prefix is clamped, never extended; the
    /// caller decides how long the table must be via [`ensure_len`](Self::ensure_len).
    pub fn prefix_sum(&self, upto: usize) -> u64 {
        let terms = self.read();
        terms[..upto.min(terms.len())]
            .iter()
            .fold(0u64, |acc, term| acc.saturating_add(*term))
    }

    /// A copy of the currently computed prefix.
    pub fn prefix(&self) -> Vec<u64> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<u64>> {
        self.terms
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for FibTable {
    fn default() -> Self {
        Self::new()
    }
}
