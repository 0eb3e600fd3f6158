//! Per-method summary statistics over chunk records.
//!
//! One [`MethodStats`] row is derived per splitting method. Word figures are
//! based on each chunk's `token_count` (the whitespace word proxy); char
//! figures are Unicode scalar counts.

use serde::Serialize;

use crate::Chunk;

/// Summary statistics for one splitting method.
///
/// Derived from a chunk sequence by [`aggregate`]; never constructed
/// independently outside of tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodStats {
    /// Method name, e.g. `"token"`.
    pub method: String,
    /// Number of chunks the method produced.
    pub num_chunks: usize,
    /// Smallest chunk in words.
    pub min_words: usize,
    /// Largest chunk in words.
    pub max_words: usize,
    /// Mean chunk size in words.
    pub mean_words: f64,
    /// Smallest chunk in characters.
    pub min_chars: usize,
    /// Largest chunk in characters.
    pub max_chars: usize,
    /// Mean chunk size in characters.
    pub mean_chars: f64,
    /// Population standard deviation of chunk word counts.
    pub std_words: f64,
}

impl MethodStats {
    /// An all-zero row for a method that produced no chunks.
    ///
    /// An empty chunk list is a legitimate outcome (empty input), not an
    /// error, so it aggregates to zeros rather than failing.
    #[must_use]
    pub fn empty(method: &str) -> Self {
        Self {
            method: method.to_string(),
            num_chunks: 0,
            min_words: 0,
            max_words: 0,
            mean_words: 0.0,
            min_chars: 0,
            max_chars: 0,
            mean_chars: 0.0,
            std_words: 0.0,
        }
    }
}

/// Reduce one method's chunk sequence to a statistics row.
#[must_use]
pub fn aggregate(method: &str, chunks: &[Chunk]) -> MethodStats {
    if chunks.is_empty() {
        return MethodStats::empty(method);
    }

    let n = chunks.len();
    let words: Vec<usize> = chunks.iter().map(|c| c.token_count).collect();
    let chars: Vec<usize> = chunks.iter().map(Chunk::char_count).collect();

    let mean_words = words.iter().sum::<usize>() as f64 / n as f64;
    let mean_chars = chars.iter().sum::<usize>() as f64 / n as f64;

    // Population standard deviation, second pass over the word counts.
    let variance = words
        .iter()
        .map(|&w| {
            let d = w as f64 - mean_words;
            d * d
        })
        .sum::<f64>()
        / n as f64;

    MethodStats {
        method: method.to_string(),
        num_chunks: n,
        min_words: words.iter().copied().min().unwrap_or(0),
        max_words: words.iter().copied().max().unwrap_or(0),
        mean_words,
        min_chars: chars.iter().copied().min().unwrap_or(0),
        max_chars: chars.iter().copied().max().unwrap_or(0),
        mean_chars,
        std_words: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Metadata;

    fn chunk(text: &str) -> Chunk {
        Chunk::new(text, Metadata::new())
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let stats = aggregate("token", &[]);
        assert_eq!(stats, MethodStats::empty("token"));
        assert_eq!(stats.num_chunks, 0);
        assert_eq!(stats.mean_words, 0.0);
    }

    #[test]
    fn test_counts_and_means() {
        let chunks = [chunk("one two"), chunk("three four five six")];
        let stats = aggregate("character", &chunks);

        assert_eq!(stats.num_chunks, 2);
        assert_eq!(stats.min_words, 2);
        assert_eq!(stats.max_words, 4);
        assert_eq!(stats.mean_words, 3.0);
        assert_eq!(stats.min_chars, 7);
        assert_eq!(stats.max_chars, 19);
        assert_eq!(stats.mean_chars, 13.0);
    }

    #[test]
    fn test_population_std_dev() {
        // Word counts 2 and 4: mean 3, variance ((1)^2 + (1)^2) / 2 = 1.
        let chunks = [chunk("one two"), chunk("three four five six")];
        let stats = aggregate("recursive", &chunks);
        assert!((stats.std_words - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_chunks_zero_std() {
        let chunks = [chunk("a b c"), chunk("d e f"), chunk("g h i")];
        let stats = aggregate("token", &chunks);
        assert_eq!(stats.std_words, 0.0);
        assert_eq!(stats.mean_words, 3.0);
    }

    #[test]
    fn test_single_chunk() {
        let chunks = [chunk("only one chunk here")];
        let stats = aggregate("token", &chunks);
        assert_eq!(stats.num_chunks, 1);
        assert_eq!(stats.min_words, stats.max_words);
        assert_eq!(stats.std_words, 0.0);
    }
}
