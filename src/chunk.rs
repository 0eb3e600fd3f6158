//! The Chunk type: a piece of split text with metadata and a word count.

use std::collections::BTreeMap;

use serde::Serialize;

/// Flat string-to-string metadata attached to every chunk of one document.
///
/// A `BTreeMap` keeps log lines and serialized output deterministically
/// ordered.
pub type Metadata = BTreeMap<String, String>;

/// A contiguous segment of an input document produced by a splitting
/// strategy.
///
/// All three adapters normalize their library's output into this record, so
/// downstream stages never see a strategy-specific shape.
///
/// ## Token Count
///
/// `token_count` is a whitespace word count, used as a cheap proxy for
/// language-model token count:
///
/// ```rust
/// use splitbench::{Chunk, Metadata};
///
/// let chunk = Chunk::new("La voiture est rouge", Metadata::new());
/// assert_eq!(chunk.token_count, 4);
/// ```
///
/// The token-based *splitter* sizes chunks with a real BPE tokenizer; the
/// count stored here is always the word proxy, matching what the statistics
/// and scoring stages expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Metadata inherited from the source document, never mutated downstream.
    pub metadata: Metadata,
    /// Whitespace word count of `text`.
    pub token_count: usize,
}

impl Chunk {
    /// Create a chunk, computing the word count from the text.
    #[must_use]
    pub fn new(text: impl Into<String>, metadata: Metadata) -> Self {
        let text = text.into();
        let token_count = text.split_whitespace().count();
        Self {
            text,
            metadata,
            token_count,
        }
    }

    /// The length of this chunk in Unicode scalar values.
    ///
    /// Character count, not byte count: statistics over mixed-script text
    /// should not depend on UTF-8 encoding width.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this chunk contains no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ words: {}, chars: {} }}",
            self.token_count,
            self.char_count()
        )
    }
}
