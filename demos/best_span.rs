//! Example: best contiguous span of aggregated show ratings.
//!
//! Run with:
//! `cargo run --example best_span`

use maxspan::max_sum_span;

fn main() {
    // Two friends' ratings for seven shows, summed per show.
    let friend_a = [1.0, -3.5, 2.0, 2.5, -1.0, 4.0, -6.0];
    let friend_b = [0.5, -1.0, 1.0, 0.5, -0.5, 1.0, -2.0];

    let scores: Vec<f64> = friend_a
        .iter()
        .zip(&friend_b)
        .map(|(a, b)| a + b)
        .collect();

    let summary = max_sum_span(&scores);
    println!("aggregated scores: {scores:?}");
    println!("best span value: {}", summary.best.value());

    match summary.best.bounds() {
        Some(b) => println!("watch shows {} through {} (1-based)", b.begin + 1, b.end + 1),
        None => println!("every aggregate is non-positive; no span worth watching"),
    }
}
