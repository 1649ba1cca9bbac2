//! Algebraic laws of the O(1) region-summary merge.
//!
//! Merging the summaries of two adjacent sub-regions must reproduce the
//! whole-region answer regardless of where the region is split. The span
//! *values* (total, best, prefix, suffix) are split-invariant; the chosen
//! indices are only pinned down at the solver's own midpoint split, because
//! equal-valued spans are tie-broken by merge order.

use maxspan::max_sum_span;
use maxspan::summary::RegionSummary;
use proptest::prelude::*;

/// Canonical midpoint recursion over an absolute index range, expressed
/// through the public leaf/merge operations.
fn solve_region(scores: &[f64], lo: usize, hi: usize) -> RegionSummary {
    if lo == hi {
        return RegionSummary::leaf(scores[lo], lo);
    }
    let mid = lo + (hi - lo) / 2;
    RegionSummary::merge(
        &solve_region(scores, lo, mid),
        &solve_region(scores, mid + 1, hi),
    )
}

fn integer_scores() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-100i32..=100, 2..120)
        .prop_map(|v| v.into_iter().map(f64::from).collect())
}

proptest! {
    #[test]
    fn any_split_reproduces_whole_region_values(
        scores in integer_scores(),
        split_seed in any::<usize>(),
    ) {
        let n = scores.len();
        let split = 1 + split_seed % (n - 1);

        let whole = max_sum_span(&scores);
        let left = solve_region(&scores, 0, split - 1);
        let right = solve_region(&scores, split, n - 1);
        let merged = RegionSummary::merge(&left, &right);

        prop_assert_eq!(merged.total, whole.total);
        prop_assert_eq!(merged.best.value(), whole.best.value());
        prop_assert_eq!(merged.prefix.value(), whole.prefix.value());
        prop_assert_eq!(merged.suffix.value(), whole.suffix.value());
        prop_assert_eq!((merged.begin, merged.end), (0, n - 1));
    }

    #[test]
    fn midpoint_split_reproduces_whole_summary_exactly(scores in integer_scores()) {
        let n = scores.len();
        let mid = (n - 1) / 2;

        let whole = max_sum_span(&scores);
        let merged = RegionSummary::merge(
            &solve_region(&scores, 0, mid),
            &solve_region(&scores, mid + 1, n - 1),
        );
        prop_assert_eq!(merged, whole);
    }

    #[test]
    fn merge_values_are_associative(
        scores in proptest::collection::vec(-100i32..=100, 3..120)
            .prop_map(|v| v.into_iter().map(f64::from).collect::<Vec<f64>>()),
        seed_a in any::<usize>(),
        seed_b in any::<usize>(),
    ) {
        let n = scores.len();
        let a = 1 + seed_a % (n - 2);
        let b = a + 1 + seed_b % (n - a - 1);

        let first = solve_region(&scores, 0, a - 1);
        let second = solve_region(&scores, a, b - 1);
        let third = solve_region(&scores, b, n - 1);

        let left_assoc = RegionSummary::merge(&RegionSummary::merge(&first, &second), &third);
        let right_assoc = RegionSummary::merge(&first, &RegionSummary::merge(&second, &third));

        prop_assert_eq!(left_assoc.total, right_assoc.total);
        prop_assert_eq!(left_assoc.best.value(), right_assoc.best.value());
        prop_assert_eq!(left_assoc.prefix.value(), right_assoc.prefix.value());
        prop_assert_eq!(left_assoc.suffix.value(), right_assoc.suffix.value());
    }

    #[test]
    fn merge_is_deterministic(scores in integer_scores(), split_seed in any::<usize>()) {
        let n = scores.len();
        let split = 1 + split_seed % (n - 1);
        let left = solve_region(&scores, 0, split - 1);
        let right = solve_region(&scores, split, n - 1);
        prop_assert_eq!(
            RegionSummary::merge(&left, &right),
            RegionSummary::merge(&left, &right)
        );
    }
}
