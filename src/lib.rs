//! # splitbench
//!
//! An evaluation harness that compares text chunking strategies for
//! retrieval-augmented generation (RAG) pipelines.
//!
//! ## The Problem
//!
//! Before a document reaches an embedding model it has to be split into
//! chunks, and there is more than one defensible way to do that. Size by
//! tokens? By words? By characters? Respect paragraph boundaries or cut
//! wherever the budget runs out? Every RAG pipeline answers these questions,
//! usually by copying whatever its framework defaults to.
//!
//! This crate makes the comparison explicit. It runs three external
//! splitting strategies over the same document, reduces each strategy's
//! output to summary statistics, scores those statistics against fixed
//! heuristics, and renders the result side by side.
//!
//! ## The Three Strategies
//!
//! | Method | Sized in | Backed by |
//! |-----------|------------|--------------------------------------------|
//! | token | BPE tokens | `text-splitter` + `tiktoken-rs` cl100k |
//! | recursive | words | `text-splitter` with a word-count sizer |
//! | character | characters | single-separator split-and-merge |
//!
//! The first two delegate to the [`text-splitter`] library; the third keeps
//! the classic merge-based `CharacterTextSplitter` behavior (an oversized
//! piece is kept whole), which that library deliberately does not offer.
//!
//! [`text-splitter`]: https://docs.rs/text-splitter
//!
//! ## The Scoring Heuristic
//!
//! Each method's statistics row earns an integer score from five additive
//! criteria aimed at retrieval use: a sane chunk count (10–100), an
//! embeddable mean size (30–200 words), homogeneous sizes (stddev below half
//! the mean), no oversized chunk (max below 300 words), and a penalty for
//! degenerate tiny chunks (min below 3 words). The thresholds are admittedly
//! arbitrary; they are fixed constants, not knobs. See [`score`].
//!
//! ## Quick Start
//!
//! ```rust
//! use splitbench::{harness, Metadata, RunConfig};
//!
//! let text = "The quick brown fox jumps over the lazy dog. \
//!             Pack my box with five dozen liquor jugs.";
//!
//! let ranked = harness::compare(text, &Metadata::new(), &RunConfig::default()).unwrap();
//!
//! assert_eq!(ranked.len(), 3);
//! // Rows are sorted by score, best first.
//! assert!(ranked[0].score >= ranked[1].score);
//! ```
//!
//! Everything runs single-threaded and synchronously: one method finishes
//! before the next starts, and the only artifacts are the optional CSV table
//! and SVG chart controlled by [`RunConfig`].

mod character;
mod chunk;
mod config;
mod error;
mod recursive;
mod token;

pub mod harness;
pub mod report;
pub mod score;
pub mod stats;

pub use character::CharacterSplitter;
pub use chunk::{Chunk, Metadata};
pub use config::RunConfig;
pub use error::{Error, Result};
pub use recursive::RecursiveSplitter;
pub use score::ScoredStats;
pub use stats::MethodStats;
pub use token::TokenSplitter;

/// A text splitting strategy adapter.
///
/// Each adapter forwards its configuration to one external splitting
/// strategy and normalizes the output into [`Chunk`] records, enabling the
/// harness to treat all methods uniformly:
///
/// ```rust
/// use splitbench::{CharacterSplitter, Chunk, Metadata, RecursiveSplitter, Splitter};
///
/// fn run(splitter: &dyn Splitter, text: &str) -> splitbench::Result<Vec<Chunk>> {
///     splitter.split(text, &Metadata::new())
/// }
///
/// let character = CharacterSplitter::default();
/// let recursive = RecursiveSplitter::default();
///
/// let text = "Hello world. This is a test.";
/// let chunks1 = run(&character, text).unwrap();
/// let chunks2 = run(&recursive, text).unwrap();
/// ```
pub trait Splitter: Send + Sync {
    /// Short method name used in statistics rows, logs, and charts.
    fn name(&self) -> &str;

    /// Split text into chunks, attaching the document metadata to each.
    ///
    /// Chunks are produced eagerly and preserve document order.
    ///
    /// # Errors
    ///
    /// Configuration errors from the external splitting library propagate
    /// unmodified; there is no local recovery.
    fn split(&self, text: &str, metadata: &Metadata) -> Result<Vec<Chunk>>;
}
