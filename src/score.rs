//! Heuristic scoring and ranking of statistics rows.
//!
//! Five independent, additive criteria map a [`MethodStats`] row to an
//! integer in roughly `[-1, 4]`:
//!
//! ```text
//! +1  chunk count in a reasonable retrieval range   10 <= n <= 100
//! +1  mean size suitable for embedding              30 <= mean <= 200 words
//! +1  homogeneous sizes                             std < 0.5 * mean
//! +1  no oversized chunk                            max < 300 words
//! -1  degenerate tiny chunks                        min < 3 words
//! ```
//!
//! The thresholds are arbitrary by their own admission. They are fixed
//! constants rather than configuration: changing them changes what the
//! harness means by "better", and the comparisons in the test suite pin the
//! exact boundaries (`<` vs `<=` included).

use serde::Serialize;

use crate::MethodStats;

/// Inclusive lower bound on chunk count for criterion 1.
pub const CHUNK_COUNT_MIN: usize = 10;
/// Inclusive upper bound on chunk count for criterion 1.
pub const CHUNK_COUNT_MAX: usize = 100;
/// Inclusive lower bound on mean words for criterion 2.
pub const MEAN_WORDS_MIN: f64 = 30.0;
/// Inclusive upper bound on mean words for criterion 2.
pub const MEAN_WORDS_MAX: f64 = 200.0;
/// Criterion 3: std must stay below this fraction of the mean.
pub const STD_MEAN_RATIO: f64 = 0.5;
/// Exclusive upper bound on max words for criterion 4.
pub const MAX_WORDS_LIMIT: usize = 300;
/// Chunks below this many words trigger the criterion 5 penalty.
pub const MIN_WORDS_FLOOR: usize = 3;

/// A statistics row together with its heuristic score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredStats {
    /// The underlying statistics row.
    pub stats: MethodStats,
    /// Sum of the five signed criterion contributions, unclamped.
    pub score: i32,
}

/// Score one statistics row.
///
/// Pure and deterministic: identical rows always score identically.
#[must_use]
pub fn score(stats: &MethodStats) -> i32 {
    let mut total = 0;

    if (CHUNK_COUNT_MIN..=CHUNK_COUNT_MAX).contains(&stats.num_chunks) {
        total += 1;
    }
    if (MEAN_WORDS_MIN..=MEAN_WORDS_MAX).contains(&stats.mean_words) {
        total += 1;
    }
    if stats.std_words < STD_MEAN_RATIO * stats.mean_words {
        total += 1;
    }
    if stats.max_words < MAX_WORDS_LIMIT {
        total += 1;
    }
    if stats.min_words < MIN_WORDS_FLOOR {
        total -= 1;
    }

    total
}

/// Score a batch of rows and sort them best-first.
///
/// The sort is stable, so rows with equal scores keep their input order and
/// the first row is the method to report as best.
#[must_use]
pub fn rank(rows: Vec<MethodStats>) -> Vec<ScoredStats> {
    let mut scored: Vec<ScoredStats> = rows
        .into_iter()
        .map(|stats| {
            let score = score(&stats);
            ScoredStats { stats, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}
