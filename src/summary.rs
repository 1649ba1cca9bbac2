//! Region summaries and the O(1) adjacent-region merge.
//!
//! A [`RegionSummary`] captures everything the divide-and-conquer solver
//! needs to know about a contiguous region `[begin, end]` of the input:
//! the region total, the best span anywhere inside, and the best spans
//! pinned to the region's left and right edges. Two summaries for adjacent
//! regions combine in O(1) via [`RegionSummary::merge`].
//!
//! All comparisons in the merge are strict `>`: ties retain the left-side
//! (or previously-held) candidate, so results are reproducible on inputs
//! with equal-valued spans.

use crate::span::Span;

/// Analysis of a contiguous region `[begin, end]` of the source array.
///
/// Invariants maintained by [`leaf`](Self::leaf) and [`merge`](Self::merge):
/// - `best.value() >= prefix.value()` and `best.value() >= suffix.value()`;
/// - `best.value() >= 0` (the empty span is always a candidate);
/// - a non-empty `prefix` starts at `begin`; a non-empty `suffix` ends at
///   `end`; every span lies inside `[begin, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSummary {
    /// First index of the analyzed region (inclusive).
    pub begin: usize,
    /// Last index of the analyzed region (inclusive).
    pub end: usize,
    /// Sum of all elements in the region.
    pub total: f64,
    /// Maximum-sum span anywhere within the region.
    pub best: Span,
    /// Maximum-sum span constrained to start at `begin`.
    pub prefix: Span,
    /// Maximum-sum span constrained to end at `end`.
    pub suffix: Span,
}

impl RegionSummary {
    /// Summary of the single-element region `[index, index]`.
    ///
    /// A positive element forms a one-element span; anything else yields the
    /// empty span, since choosing nothing (value 0) beats a non-positive
    /// element. The all-negative override belongs to the caller, not here
    /// (see [`crate::ratings::recommend`]).
    pub fn leaf(value: f64, index: usize) -> Self {
        let chosen = if value > 0.0 {
            Span::single(value, index)
        } else {
            Span::EMPTY
        };
        Self {
            begin: index,
            end: index,
            total: value,
            best: chosen,
            prefix: chosen,
            suffix: chosen,
        }
    }

    /// Combine the summaries of two adjacent regions into the summary of
    /// their union, in O(1).
    ///
    /// `left` must end exactly where `right` begins (`left.end + 1 ==
    /// right.begin`); this is debug-asserted.
    pub fn merge(left: &Self, right: &Self) -> Self {
        debug_assert_eq!(
            left.end + 1,
            right.begin,
            "merged regions must be adjacent"
        );

        let total = left.total + right.total;

        // Prefix of the union: either left's own prefix, or all of left plus
        // right's prefix. When the combined form strictly wins, right's
        // prefix is necessarily non-empty (an empty one could not lift the
        // value above left's), so the span runs from the union's left edge.
        let prefix = match right.prefix.bounds() {
            Some(rp) if left.total + right.prefix.value() > left.prefix.value() => {
                Span::new(left.total + right.prefix.value(), left.begin, rp.end)
            }
            _ => left.prefix,
        };

        // Suffix: mirror image.
        let suffix = match left.suffix.bounds() {
            Some(ls) if right.total + left.suffix.value() > right.suffix.value() => {
                Span::new(right.total + left.suffix.value(), ls.begin, right.end)
            }
            _ => right.suffix,
        };

        // Best: the crossing candidate straddles the join, formed from
        // left's suffix and right's prefix. It wins only when strictly
        // greater than both halves' bests; otherwise ties go to the left.
        let best = match (left.suffix.bounds(), right.prefix.bounds()) {
            (Some(ls), Some(rp)) => {
                let crossing = left.suffix.value() + right.prefix.value();
                if crossing > left.best.value() && crossing > right.best.value() {
                    Span::new(crossing, ls.begin, rp.end)
                } else {
                    pick_best(left.best, right.best)
                }
            }
            _ => pick_best(left.best, right.best),
        };

        Self {
            begin: left.begin,
            end: right.end,
            total,
            best,
            prefix,
            suffix,
        }
    }
}

/// Larger of the two bests; ties favor the left half.
fn pick_best(left: Span, right: Span) -> Span {
    if right.value() > left.value() {
        right
    } else {
        left
    }
}
