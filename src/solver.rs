//! Recursive divide-and-conquer maximum-sum span solver.
//!
//! The solver walks a read-only slice with `(lo, hi)` index views only; the
//! input is never copied. Each single-element range becomes a
//! [`RegionSummary::leaf`], and adjacent ranges combine in O(1) via
//! [`RegionSummary::merge`], giving O(n log n) time and O(log n) stack depth
//! over the 2n-1 nodes of the recursion tree.

use crate::summary::RegionSummary;

/// Below this range length the `parallel` feature recurses serially; forking
/// rayon tasks for tiny ranges costs more than the merge saves.
#[cfg(feature = "parallel")]
const PARALLEL_CUTOFF: usize = 4096;

/// Compute the maximum-sum contiguous span of `scores`.
///
/// Returns the [`RegionSummary`] for the whole slice; `summary.best` is the
/// caller-visible answer. The empty span (value 0) is always a candidate, so
/// an all-non-positive input yields an empty `best` rather than the least
/// negative element; callers that want a least-bad single element instead
/// apply their own override (see [`crate::ratings::recommend`]).
///
/// ```
/// use maxspan::max_sum_span;
///
/// let summary = max_sum_span(&[-2.0, 1.0, -3.0, 4.0, -1.0, 2.0, 1.0, -5.0, 4.0]);
/// assert_eq!(summary.best.value(), 6.0);
/// let bounds = summary.best.bounds().unwrap();
/// assert_eq!((bounds.begin, bounds.end), (3, 6));
/// ```
///
/// # Panics
/// Panics if `scores` is empty; non-emptiness is the caller's contract.
pub fn max_sum_span(scores: &[f64]) -> RegionSummary {
    assert!(!scores.is_empty(), "scores must be non-empty");
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("max_sum_span", len = scores.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    solve(scores, 0, scores.len() - 1)
}

/// Summary for the inclusive index range `[lo, hi]`.
fn solve(scores: &[f64], lo: usize, hi: usize) -> RegionSummary {
    if lo == hi {
        return RegionSummary::leaf(scores[lo], lo);
    }
    let mid = lo + (hi - lo) / 2;
    let (left, right) = solve_halves(scores, lo, mid, hi);
    RegionSummary::merge(&left, &right)
}

#[cfg(feature = "parallel")]
fn solve_halves(scores: &[f64], lo: usize, mid: usize, hi: usize) -> (RegionSummary, RegionSummary) {
    if hi - lo >= PARALLEL_CUTOFF {
        rayon::join(|| solve(scores, lo, mid), || solve(scores, mid + 1, hi))
    } else {
        (solve(scores, lo, mid), solve(scores, mid + 1, hi))
    }
}

#[cfg(not(feature = "parallel"))]
fn solve_halves(scores: &[f64], lo: usize, mid: usize, hi: usize) -> (RegionSummary, RegionSummary) {
    (solve(scores, lo, mid), solve(scores, mid + 1, hi))
}
