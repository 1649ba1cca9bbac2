//! The "friends rate shows" session layer.
//!
//! Each query is a matrix of ratings, one row per friend and one column per
//! show. The rows are summed element-wise into a single score per show, the
//! span solver picks the best contiguous block of shows, and the answer is
//! rendered as two 1-based inclusive indices.
//!
//! The solver itself never reports a negative-sum span: when every aggregate
//! is negative its best span is empty. The session layer therefore tracks
//! the per-show maximum independently while summing, and falls back to that
//! single least-bad show. This override is a post-processing decision on top
//! of the solver's [`RegionSummary`], not part of the algorithm.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use thiserror::Error;

use crate::solver::max_sum_span;
use crate::utils::argmax_first;

/// Failures while reading or answering a query stream.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The stream ended inside a query header or rating matrix.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// A token could not be parsed as the expected number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// A header declared a zero count without being the `0 0` sentinel.
    #[error("query header declares friends={friends}, shows={shows}; both must be positive")]
    ZeroCount { friends: usize, shows: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Element-wise accumulator for the per-show score vector.
#[derive(Debug, Clone)]
pub struct ScoreAccumulator {
    scores: Vec<f64>,
}

impl ScoreAccumulator {
    /// # Panics
    /// Panics if `shows == 0`.
    pub fn new(shows: usize) -> Self {
        assert!(shows > 0, "show count must be positive");
        Self {
            scores: vec![0.0; shows],
        }
    }

    /// Add one friend's ratings.
    ///
    /// # Panics
    /// Panics if `row.len()` differs from the show count.
    pub fn add_row(&mut self, row: &[f64]) {
        assert_eq!(row.len(), self.scores.len(), "row length must match show count");
        for (score, rating) in self.scores.iter_mut().zip(row) {
            *score += rating;
        }
    }

    /// Finish accumulation and record the per-show maximum.
    pub fn finish(self) -> Aggregate {
        let max_index = argmax_first(&self.scores).expect("score vector is non-empty");
        let max_value = self.scores[max_index];
        Aggregate {
            scores: self.scores,
            max_value,
            max_index,
        }
    }
}

/// Aggregated per-show scores plus the independently tracked maximum.
#[derive(Debug, Clone)]
pub struct Aggregate {
    scores: Vec<f64>,
    max_value: f64,
    max_index: usize,
}

impl Aggregate {
    /// One summed score per show.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Largest aggregate score.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// 0-based index of the largest aggregate, first occurrence on ties.
    pub fn max_index(&self) -> usize {
        self.max_index
    }
}

/// 1-based inclusive show range reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub first: usize,
    pub last: usize,
}

impl Recommendation {
    fn single(index: usize) -> Self {
        Self {
            first: index + 1,
            last: index + 1,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Answer one aggregated query.
///
/// When every aggregate is negative the solver's best span is empty, so the
/// single show with the largest (least negative) aggregate is reported
/// instead. The same fallback covers the remaining empty-best case, where
/// the maximum aggregate is exactly zero: that show alone is a legitimate
/// zero-valued span.
pub fn recommend(aggregate: &Aggregate) -> Recommendation {
    if aggregate.max_value < 0.0 {
        return Recommendation::single(aggregate.max_index);
    }
    let summary = max_sum_span(aggregate.scores());
    match summary.best.bounds() {
        Some(b) => Recommendation {
            first: b.begin + 1,
            last: b.end + 1,
        },
        None => Recommendation::single(aggregate.max_index),
    }
}

/// Streaming reader for `(friends, shows)` queries.
///
/// Queries are whitespace-separated: a two-integer header followed by
/// `friends x shows` ratings. The `0 0` header is the end-of-session
/// sentinel; clean end-of-stream before a header is treated the same way.
pub struct QueryReader<R> {
    tokens: Tokens<R>,
}

impl<R: BufRead> QueryReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokens: Tokens::new(reader),
        }
    }

    /// Read and aggregate the next query; `None` at the sentinel or a clean
    /// end of stream.
    pub fn next_query(&mut self) -> Result<Option<Aggregate>, SessionError> {
        let friends = match self.tokens.next_token()? {
            Some(tok) => parse_usize(tok)?,
            None => return Ok(None),
        };
        let shows = self.tokens.next_usize()?;

        if friends == 0 && shows == 0 {
            return Ok(None);
        }
        if friends == 0 || shows == 0 {
            return Err(SessionError::ZeroCount { friends, shows });
        }

        let mut accumulator = ScoreAccumulator::new(shows);
        let mut row = vec![0.0; shows];
        for _ in 0..friends {
            for rating in row.iter_mut() {
                *rating = self.tokens.next_f64()?;
            }
            accumulator.add_row(&row);
        }
        Ok(Some(accumulator.finish()))
    }
}

/// Answer every query on `input`, one line per query, until the sentinel.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W) -> Result<(), SessionError> {
    let mut reader = QueryReader::new(input);
    while let Some(aggregate) = reader.next_query()? {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("query", shows = aggregate.scores().len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        writeln!(output, "{}", recommend(&aggregate))?;
    }
    Ok(())
}

/// Whitespace-separated token scanner over a buffered reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    fn next_usize(&mut self) -> Result<usize, SessionError> {
        let tok = self.next_token()?.ok_or(SessionError::UnexpectedEof)?;
        parse_usize(tok)
    }

    fn next_f64(&mut self) -> Result<f64, SessionError> {
        let tok = self.next_token()?.ok_or(SessionError::UnexpectedEof)?;
        tok.parse::<f64>()
            .map_err(|_| SessionError::InvalidNumber(tok))
    }
}

fn parse_usize(tok: String) -> Result<usize, SessionError> {
    tok.parse::<usize>()
        .map_err(|_| SessionError::InvalidNumber(tok))
}

#[cfg(test)]
mod tests {
    use super::{recommend, Aggregate, Recommendation, ScoreAccumulator};

    fn aggregate_of(rows: &[&[f64]]) -> Aggregate {
        let mut acc = ScoreAccumulator::new(rows[0].len());
        for row in rows {
            acc.add_row(row);
        }
        acc.finish()
    }

    #[test]
    fn rows_sum_per_show() {
        let agg = aggregate_of(&[&[1.0, -2.0, 3.0], &[0.5, 1.0, -1.0]]);
        assert_eq!(agg.scores(), &[1.5, -1.0, 2.0]);
        assert_eq!(agg.max_index(), 2);
        assert_eq!(agg.max_value(), 2.0);
    }

    #[test]
    fn positive_aggregates_use_the_solver() {
        let agg = aggregate_of(&[&[-2.0, 4.0, 3.0, -1.0]]);
        assert_eq!(recommend(&agg), Recommendation { first: 2, last: 3 });
    }

    #[test]
    fn all_negative_reports_least_bad_show() {
        let agg = aggregate_of(&[&[-5.0, -3.0, -8.0]]);
        assert_eq!(recommend(&agg), Recommendation { first: 2, last: 2 });
    }

    #[test]
    fn all_zero_reports_first_show() {
        let agg = aggregate_of(&[&[0.0, 0.0, 0.0]]);
        assert_eq!(recommend(&agg), Recommendation { first: 1, last: 1 });
    }

    #[test]
    fn display_is_space_separated() {
        let rec = Recommendation { first: 3, last: 7 };
        assert_eq!(rec.to_string(), "3 7");
    }

    #[test]
    #[should_panic]
    fn mismatched_row_length_panics() {
        let mut acc = ScoreAccumulator::new(3);
        acc.add_row(&[1.0, 2.0]);
    }
}
