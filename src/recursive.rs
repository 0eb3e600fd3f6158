//! Recursive splitting via the external `text-splitter` library, sized in
//! words.
//!
//! The library walks a hierarchy of semantic levels (paragraphs, lines,
//! sentences, words) and keeps each chunk at the highest level that fits,
//! which is the recursive-character approach popularized by LangChain. Here
//! the capacity is measured with a whitespace word counter instead of
//! characters, so "300" means roughly 300 words per chunk:
//!
//! ```text
//! capacity = 300 words
//!
//! 1. Paragraph fits in 300 words?  keep it whole
//! 2. Too big? split into sentences and regroup
//! 3. A single sentence too big? split on words
//! ```
//!
//! Word-sized capacity makes this method directly comparable to the scoring
//! thresholds, which are all expressed in words.

use text_splitter::{ChunkConfig, ChunkSizer, TextSplitter};

use crate::{Chunk, Metadata, Result, Splitter};

/// Sizer that measures text in whitespace-separated words.
struct WordSizer;

impl ChunkSizer for WordSizer {
    fn size(&self, chunk: &str) -> usize {
        chunk.split_whitespace().count()
    }
}

/// Recursive splitter adapter with word-based capacity.
///
/// ## Example
///
/// ```rust
/// use splitbench::{Metadata, RecursiveSplitter, Splitter};
///
/// let splitter = RecursiveSplitter::new(300, 50);
/// let chunks = splitter.split("some document", &Metadata::new()).unwrap();
/// assert_eq!(chunks.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    words_per_chunk: usize,
    chunk_overlap: usize,
}

impl RecursiveSplitter {
    /// Default chunk size in words.
    pub const DEFAULT_WORDS_PER_CHUNK: usize = 300;
    /// Default overlap in words.
    pub const DEFAULT_OVERLAP: usize = 50;

    /// Create a recursive splitter.
    ///
    /// Invalid combinations are rejected by the external library when
    /// splitting runs, not here.
    #[must_use]
    pub fn new(words_per_chunk: usize, chunk_overlap: usize) -> Self {
        Self {
            words_per_chunk,
            chunk_overlap,
        }
    }
}

impl Default for RecursiveSplitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORDS_PER_CHUNK, Self::DEFAULT_OVERLAP)
    }
}

impl Splitter for RecursiveSplitter {
    fn name(&self) -> &str {
        "recursive"
    }

    fn split(&self, text: &str, metadata: &Metadata) -> Result<Vec<Chunk>> {
        let config = ChunkConfig::new(self.words_per_chunk)
            .with_sizer(WordSizer)
            .with_overlap(self.chunk_overlap)?;
        let splitter = TextSplitter::new(config);

        Ok(splitter
            .chunks(text)
            .map(|c| Chunk::new(c, metadata.clone()))
            .collect())
    }
}
