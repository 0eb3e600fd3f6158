//! Fixed-character splitting on a single separator.
//!
//! The classic `CharacterTextSplitter`: split the text on one separator,
//! then greedily merge the pieces back together until adding another piece
//! would exceed the chunk size.
//!
//! ```text
//! separator = "\n", chunk_size = 12, overlap = 0
//!
//! "alpha\nbeta\ngamma\ndelta"
//!   split -> ["alpha", "beta", "gamma", "delta"]
//!   merge -> ["alpha\nbeta", "gamma\ndelta"]
//! ```
//!
//! Two properties follow from merge-based sizing and matter to the
//! comparison:
//!
//! - A piece larger than `chunk_size` is **kept whole**. The size limit
//!   bounds merging, it never cuts inside a piece. In particular a text that
//!   does not contain the separator comes back as exactly one chunk,
//!   whatever its length.
//! - Overlap is carried in whole pieces: the next chunk starts with the
//!   trailing pieces of the previous one, as many as fit in
//!   `chunk_overlap` characters.
//!
//! This is the one strategy implemented in this crate rather than delegated:
//! the external library always enforces its capacity as a hard ceiling and
//! cannot reproduce the keep-whole behavior.

use crate::{Chunk, Metadata, Result, Splitter};

/// Fixed-character splitter with a single separator and piece-level overlap.
///
/// All sizes are in Unicode scalar values, not bytes.
///
/// ## Example
///
/// ```rust
/// use splitbench::{CharacterSplitter, Metadata, Splitter};
///
/// let splitter = CharacterSplitter::new(10, 5, "\n");
/// let chunks = splitter.split("La voiture est rouge", &Metadata::new()).unwrap();
///
/// // No newline in the text: one chunk, kept whole despite chunk_size = 10.
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].text, "La voiture est rouge");
/// ```
#[derive(Debug, Clone)]
pub struct CharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separator: String,
}

impl CharacterSplitter {
    /// Default chunk size in characters.
    pub const DEFAULT_CHUNK_SIZE: usize = 1000;
    /// Default overlap in characters.
    pub const DEFAULT_OVERLAP: usize = 200;
    /// Default separator.
    pub const DEFAULT_SEPARATOR: &'static str = "\n";

    /// Create a character splitter.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size == 0` or `chunk_overlap >= chunk_size`.
    #[must_use]
    pub fn new(chunk_size: usize, chunk_overlap: usize, separator: impl Into<String>) -> Self {
        assert!(chunk_size > 0, "chunk size must be > 0");
        assert!(chunk_overlap < chunk_size, "overlap must be < chunk size");
        Self {
            chunk_size,
            chunk_overlap,
            separator: separator.into(),
        }
    }

    /// Split the text into pieces on the configured separator.
    fn pieces<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if self.separator.is_empty() || !text.contains(&self.separator) {
            return vec![text];
        }
        text.split(self.separator.as_str())
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Greedily merge pieces into chunks of at most `chunk_size` characters,
    /// re-joining with the separator and carrying trailing pieces as overlap.
    fn merge(&self, pieces: Vec<&str>) -> Vec<String> {
        let sep_len = self.separator.chars().count();
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0;

        for piece in pieces {
            let piece_len = piece.chars().count();
            let join_len = if current.is_empty() { 0 } else { sep_len };

            if !current.is_empty() && current_len + join_len + piece_len > self.chunk_size {
                chunks.push(current.join(&self.separator));

                // Re-seed the next chunk with trailing pieces that fit the
                // overlap budget.
                let mut overlap: Vec<&str> = Vec::new();
                let mut overlap_len = 0;
                for prev in current.iter().rev() {
                    let prev_len =
                        prev.chars().count() + if overlap.is_empty() { 0 } else { sep_len };
                    if overlap_len + prev_len > self.chunk_overlap {
                        break;
                    }
                    overlap_len += prev_len;
                    overlap.insert(0, prev);
                }
                current = overlap;
                current_len = overlap_len;
            }

            let join_len = if current.is_empty() { 0 } else { sep_len };
            current.push(piece);
            current_len += join_len + piece_len;
        }

        if !current.is_empty() {
            chunks.push(current.join(&self.separator));
        }

        chunks
    }
}

impl Default for CharacterSplitter {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_CHUNK_SIZE,
            Self::DEFAULT_OVERLAP,
            Self::DEFAULT_SEPARATOR,
        )
    }
}

impl Splitter for CharacterSplitter {
    fn name(&self) -> &str {
        "character"
    }

    fn split(&self, text: &str, metadata: &Metadata) -> Result<Vec<Chunk>> {
        if text.is_empty() {
            return Ok(vec![]);
        }

        Ok(self
            .merge(self.pieces(text))
            .into_iter()
            .map(|c| Chunk::new(c, metadata.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_separator_keeps_text_whole() {
        let splitter = CharacterSplitter::new(10, 5, "\n");
        let chunks = splitter
            .split("La voiture est rouge", &Metadata::new())
            .unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "La voiture est rouge");
    }

    #[test]
    fn test_merges_up_to_chunk_size() {
        let splitter = CharacterSplitter::new(12, 0, "\n");
        let chunks = splitter
            .split("alpha\nbeta\ngamma\ndelta", &Metadata::new())
            .unwrap();

        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha\nbeta", "gamma\ndelta"]);
    }

    #[test]
    fn test_oversized_piece_kept_whole() {
        let splitter = CharacterSplitter::new(5, 0, "\n");
        let chunks = splitter
            .split("tiny\nan oversized line\nend", &Metadata::new())
            .unwrap();

        assert!(chunks.iter().any(|c| c.text == "an oversized line"));
    }

    #[test]
    fn test_overlap_carries_trailing_piece() {
        let splitter = CharacterSplitter::new(10, 4, "\n");
        let chunks = splitter.split("aaa\nbbb\nccc\nddd", &Metadata::new()).unwrap();

        // Each flush re-seeds with the previous trailing piece (3 chars <= 4).
        assert!(chunks.len() >= 2);
        for pair in chunks.windows(2) {
            let tail = pair[0].text.split('\n').next_back().unwrap();
            assert!(pair[1].text.starts_with(tail));
        }
    }

    #[test]
    fn test_empty_text() {
        let splitter = CharacterSplitter::default();
        let chunks = splitter.split("", &Metadata::new()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_multibyte_lengths_counted_in_chars() {
        let splitter = CharacterSplitter::new(8, 0, "\n");
        // Each line is 5 chars but more bytes.
        let chunks = splitter.split("héllo\nwörld", &Metadata::new()).unwrap();

        // 5 + 1 + 5 = 11 chars > 8, so the two lines cannot merge.
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        let _ = CharacterSplitter::new(0, 0, "\n");
    }

    #[test]
    #[should_panic]
    fn test_overlap_exceeds_size_panics() {
        let _ = CharacterSplitter::new(10, 10, "\n");
    }
}
