//! Assorted small helpers.

/// Index of the maximum value, first occurrence on ties.
///
/// Returns `None` for an empty slice. Used by the ratings layer to track the
/// least-bad single element independently of the span solver.
pub fn argmax_first(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some(b) if values[b] >= v => {}
            _ => best = Some(i),
        }
    }
    best
}
