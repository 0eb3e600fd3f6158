//! Token-based splitting via the external `text-splitter` library.
//!
//! Chunk size is measured in BPE tokens rather than characters. This is the
//! strategy closest to how an embedding model actually sees the text: a
//! 300-token chunk fits a 512-token encoder regardless of how many
//! characters it spans.
//!
//! The tokenizer is `cl100k_base`, which ships embedded in `tiktoken-rs`, so
//! splitting never touches the network. Note that the `token_count` recorded
//! on each produced [`Chunk`] is still the whitespace word proxy used by the
//! statistics stage; the BPE count only drives where the library places
//! chunk boundaries.

use text_splitter::{ChunkConfig, ChunkSizer, TextSplitter};
use tiktoken_rs::CoreBPE;

use crate::{Chunk, Error, Metadata, Result, Splitter};

/// Sizer that measures text in `cl100k_base` BPE tokens.
struct BpeSizer(CoreBPE);

impl ChunkSizer for BpeSizer {
    fn size(&self, chunk: &str) -> usize {
        self.0.encode_with_special_tokens(chunk).len()
    }
}

/// Token-based splitter adapter.
///
/// ## Example
///
/// ```rust,no_run
/// use splitbench::{Metadata, Splitter, TokenSplitter};
///
/// let splitter = TokenSplitter::new(300, 50);
/// let chunks = splitter.split("some long document", &Metadata::new()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TokenSplitter {
    tokens_per_chunk: usize,
    chunk_overlap: usize,
}

impl TokenSplitter {
    /// Default chunk size in BPE tokens.
    pub const DEFAULT_TOKENS_PER_CHUNK: usize = 300;
    /// Default overlap in BPE tokens.
    pub const DEFAULT_OVERLAP: usize = 50;

    /// Create a token splitter.
    ///
    /// Invalid combinations (e.g. overlap exceeding the chunk size) are not
    /// checked here; the external library rejects them when splitting runs.
    #[must_use]
    pub fn new(tokens_per_chunk: usize, chunk_overlap: usize) -> Self {
        Self {
            tokens_per_chunk,
            chunk_overlap,
        }
    }
}

impl Default for TokenSplitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TOKENS_PER_CHUNK, Self::DEFAULT_OVERLAP)
    }
}

impl Splitter for TokenSplitter {
    fn name(&self) -> &str {
        "token"
    }

    fn split(&self, text: &str, metadata: &Metadata) -> Result<Vec<Chunk>> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| Error::Tokenizer(e.to_string()))?;
        let config = ChunkConfig::new(self.tokens_per_chunk)
            .with_sizer(BpeSizer(bpe))
            .with_overlap(self.chunk_overlap)?;
        let splitter = TextSplitter::new(config);

        Ok(splitter
            .chunks(text)
            .map(|c| Chunk::new(c, metadata.clone()))
            .collect())
    }
}
