//! Span value types used throughout the crate.
//!
//! A [`Span`] is a contiguous index range of the source array together with
//! the sum of the elements it covers. The empty span (no elements chosen,
//! value 0) is a first-class variant: [`Span::bounds`] returns `None` for it
//! instead of a magic index.

/// Inclusive 0-based index range `[begin, end]` of a non-empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub begin: usize,
    pub end: usize,
}

impl Bounds {
    /// # Panics
    /// Panics if `begin > end`.
    pub fn new(begin: usize, end: usize) -> Self {
        assert!(begin <= end, "span bounds must satisfy begin <= end");
        Self { begin, end }
    }

}

/// A contiguous region of the source array plus its summed value.
///
/// The empty span carries value 0 and no bounds; it stands for "choose no
/// elements" and is preferred over any negative-sum alternative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    value: f64,
    bounds: Option<Bounds>,
}

impl Span {
    /// The empty span: no elements chosen, value 0.
    pub const EMPTY: Span = Span {
        value: 0.0,
        bounds: None,
    };

    /// A non-empty span over `[begin, end]` with the given summed value.
    ///
    /// # Panics
    /// Panics if `begin > end`.
    pub fn new(value: f64, begin: usize, end: usize) -> Self {
        Self {
            value,
            bounds: Some(Bounds::new(begin, end)),
        }
    }

    /// A single-element span at `index`.
    pub fn single(value: f64, index: usize) -> Self {
        Self::new(value, index, index)
    }

    /// Sum of the covered elements (0 for the empty span).
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Index range, or `None` for the empty span.
    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// True when no elements are chosen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }
}
