//! The comparison pipeline: adapters, aggregation, scoring, reporting.
//!
//! Control flow is strictly sequential: each splitter runs to completion on
//! the shared read-only input before the next starts, then the aggregated
//! rows flow through scoring into reporting. Any adapter error aborts the
//! whole run.

use crate::{
    report, score, stats, CharacterSplitter, Metadata, RecursiveSplitter, Result, RunConfig,
    ScoredStats, Splitter, TokenSplitter,
};

/// The three compared methods with their stock configurations.
#[must_use]
pub fn default_splitters() -> Vec<Box<dyn Splitter>> {
    vec![
        Box::new(TokenSplitter::default()),
        Box::new(RecursiveSplitter::default()),
        Box::new(CharacterSplitter::default()),
    ]
}

/// Run the full comparison with the default splitter set.
///
/// Returns the scored rows, best method first.
///
/// # Errors
///
/// Propagates adapter configuration errors and artifact write failures.
pub fn compare(text: &str, metadata: &Metadata, config: &RunConfig) -> Result<Vec<ScoredStats>> {
    compare_with(&default_splitters(), text, metadata, config)
}

/// Run the comparison with an explicit splitter set.
///
/// # Errors
///
/// Propagates adapter configuration errors and artifact write failures.
pub fn compare_with(
    splitters: &[Box<dyn Splitter>],
    text: &str,
    metadata: &Metadata,
    config: &RunConfig,
) -> Result<Vec<ScoredStats>> {
    let mut rows = Vec::with_capacity(splitters.len());

    for splitter in splitters {
        let chunks = splitter.split(text, metadata)?;
        report::log_chunks(splitter.name(), &chunks, text);
        rows.push(stats::aggregate(splitter.name(), &chunks));
    }

    let ranked = score::rank(rows);
    report::log_ranking(&ranked);
    report::persist(&ranked, config)?;

    Ok(ranked)
}
