//! Maximum-sum contiguous span via divide-and-conquer.
//!
//! This crate solves the classic Maximum Subarray problem recursively: split
//! the array, solve both halves, and combine in O(1) by carrying, per
//! region, the total, the best span, and the best spans pinned to the
//! region's edges. Total work is O(n log n) with O(log n) stack depth.
//!
//! ## Core idea
//! 1. A single element is a [`RegionSummary`] leaf: a positive value forms a
//!    one-element span, anything else the empty span (value 0).
//! 2. Adjacent summaries merge in O(1): the union's best is the larger of
//!    the halves' bests or the crossing span built from the left half's
//!    suffix and the right half's prefix.
//! 3. [`max_sum_span`] drives the recursion over a borrowed slice.
//!
//! The empty span is always a candidate, so the best span never has a
//! negative sum. Callers that prefer a least-bad single element for
//! all-negative input apply that as a post-processing override; the
//! [`ratings`] module does exactly this for the "friends rate shows"
//! stream format.
//!
//! ## Quick start
//! ```
//! use maxspan::max_sum_span;
//!
//! let summary = max_sum_span(&[-2.0, 1.0, -3.0, 4.0, -1.0, 2.0, 1.0, -5.0, 4.0]);
//! assert_eq!(summary.best.value(), 6.0);
//! let bounds = summary.best.bounds().unwrap();
//! assert_eq!((bounds.begin, bounds.end), (3, 6));
//! ```
//!
//! ## Features
//! - `parallel`: recurse into the two halves with `rayon::join` above a
//!   fixed cutoff. Results are identical to the serial build.
//! - `tracing`: emit `tracing` spans around solves and session queries.

pub mod ratings;
pub mod solver;
pub mod span;
pub mod summary;
pub mod utils;

pub use crate::solver::max_sum_span;
pub use crate::span::{Bounds, Span};
pub use crate::summary::RegionSummary;
