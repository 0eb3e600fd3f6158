//! Error types for splitbench.

/// Errors that can occur while running the comparison harness.
///
/// There is deliberately no recovery anywhere: a misconfigured splitter or a
/// failed artifact write is fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external splitting library rejected a chunk configuration.
    #[error("invalid chunk configuration: {0}")]
    ChunkConfig(#[from] text_splitter::ChunkConfigError),

    /// The BPE tokenizer for the token-based method failed to load.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Writing the results table failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Rendering the comparison chart failed.
    #[error("chart error: {0}")]
    Chart(String),

    /// Filesystem error while saving artifacts.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for splitbench operations.
pub type Result<T> = std::result::Result<T, Error>;
