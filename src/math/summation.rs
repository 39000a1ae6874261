//! Summation primitives with distinct NaN semantics.
//!
//! ## Purpose
//!
//! This module provides the two accumulation primitives used by the ITCZ
//! estimators. They differ only in how NaN terms are treated, and that
//! difference is load-bearing: the centroid estimator skips NaN contributions
//! term by term, while the median-flux estimator lets a single NaN poison the
//! whole total.
//!
//! ## Key concepts
//!
//! * **NaN-ignoring sum**: NaN terms contribute zero; infinities still propagate.
//! * **Propagating sum**: a plain fold, NaN and infinity both propagate.
//!
//! ## Invariants
//!
//! * The NaN-ignoring sum of an all-NaN sequence is zero.
//! * Both sums of an empty sequence are zero.
//!
//! ## Non-goals
//!
//! * This module does not unify the two primitives behind a policy flag;
//!   callers pick the semantics they need explicitly.
//! * This module does not provide compensated (Kahan) summation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Summation Functions
// ============================================================================

/// Sum the terms, treating NaN terms as zero.
pub fn nan_ignoring_sum<T, I>(terms: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    terms.into_iter().fold(T::zero(), |acc, t| {
        if t.is_nan() {
            acc
        } else {
            acc + t
        }
    })
}

/// Sum the terms with ordinary IEEE semantics; NaN propagates.
pub fn propagating_sum<T, I>(terms: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    terms.into_iter().fold(T::zero(), |acc, t| acc + t)
}
