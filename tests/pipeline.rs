//! End-to-end tests for the comparison harness.
//!
//! These run the real adapters over the shipped sample document and check
//! the cross-stage invariants: chunk counts match statistics, chunks map
//! back onto the source, ranking orders rows by score, and configured
//! artifacts land on disk.

use splitbench::{
    harness, report, score, stats, CharacterSplitter, Metadata, MethodStats, RecursiveSplitter,
    RunConfig, Splitter, TokenSplitter,
};

const SAMPLE: &str = include_str!("../data/sample.md");

#[test]
fn character_splitter_keeps_separator_free_text_whole() {
    // chunk_size far below the text length, but no newline to split on.
    let splitter = CharacterSplitter::new(10, 5, "\n");
    let chunks = splitter
        .split("La voiture est rouge", &Metadata::new())
        .unwrap();

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "La voiture est rouge");
    assert_eq!(chunks[0].token_count, 4);
}

#[test]
fn num_chunks_and_mean_match_the_chunk_list() {
    for splitter in harness::default_splitters() {
        let chunks = splitter.split(SAMPLE, &Metadata::new()).unwrap();
        let row = stats::aggregate(splitter.name(), &chunks);

        assert_eq!(row.num_chunks, chunks.len(), "{}", splitter.name());

        let mean = chunks.iter().map(|c| c.token_count).sum::<usize>() as f64
            / chunks.len().max(1) as f64;
        assert!(
            (row.mean_words - mean).abs() < 1e-9,
            "{}: {} != {}",
            splitter.name(),
            row.mean_words,
            mean
        );
    }
}

#[test]
fn all_methods_preserve_the_sample_document() {
    for splitter in harness::default_splitters() {
        let chunks = splitter.split(SAMPLE, &Metadata::new()).unwrap();
        assert!(!chunks.is_empty(), "{}", splitter.name());
        assert!(
            report::preserves_source(&chunks, SAMPLE),
            "{} chunks do not map back onto the source",
            splitter.name()
        );
    }
}

#[test]
fn delegated_methods_preserve_document_order() {
    // The library-backed adapters return contiguous spans of the source, so
    // each chunk must be findable at or after the previous chunk's start.
    let splitters: Vec<Box<dyn Splitter>> = vec![
        Box::new(TokenSplitter::default()),
        Box::new(RecursiveSplitter::default()),
    ];

    for splitter in splitters {
        let chunks = splitter.split(SAMPLE, &Metadata::new()).unwrap();
        let mut offset = 0;
        for chunk in &chunks {
            let pos = SAMPLE[offset..]
                .find(&chunk.text)
                .map(|p| p + offset)
                .unwrap_or_else(|| panic!("{}: chunk not found in source", splitter.name()));
            offset = pos;
        }
    }
}

#[test]
fn metadata_reaches_every_chunk_unchanged() {
    let mut metadata = Metadata::new();
    metadata.insert("source".to_string(), "test".to_string());
    metadata.insert("langue".to_string(), "français".to_string());

    for splitter in harness::default_splitters() {
        let chunks = splitter.split(SAMPLE, &metadata).unwrap();
        assert!(chunks.iter().all(|c| c.metadata == metadata));
    }
}

#[test]
fn ranking_reorders_known_scores() {
    fn row(method: &str, num_chunks: usize, max_words: usize, std_words: f64) -> MethodStats {
        MethodStats {
            method: method.to_string(),
            num_chunks,
            min_words: 5,
            max_words,
            mean_words: 100.0,
            min_chars: 0,
            max_chars: 0,
            mean_chars: 0.0,
            std_words,
        }
    }

    // Scores: 2, 4, 1 in input order.
    let rows = vec![
        row("a", 50, 400, 80.0), // count + mean            -> 2
        row("b", 50, 200, 10.0), // all four positives      -> 4
        row("c", 5, 400, 80.0),  // mean only               -> 1
    ];

    let ranked = score::rank(rows);
    let scores: Vec<i32> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![4, 2, 1]);
    assert_eq!(ranked[0].stats.method, "b");
}

#[test]
fn compare_saves_artifacts_when_configured() {
    let tmp = tempfile::tempdir().unwrap();
    let config = RunConfig::saving_to(tmp.path().join("run"));

    let ranked = harness::compare(SAMPLE, &Metadata::new(), &config).unwrap();

    assert_eq!(ranked.len(), 3);
    let csv = config.results_path().unwrap();
    let svg = config.chart_path().unwrap();
    assert!(csv.exists());
    assert!(svg.exists());

    let table = std::fs::read_to_string(csv).unwrap();
    assert!(table.starts_with("method,score,num_chunks,mean_words"));
    assert_eq!(table.lines().count(), 4); // header + one row per method
}

#[test]
fn compare_without_save_dir_touches_no_files() {
    let ranked = harness::compare(SAMPLE, &Metadata::new(), &RunConfig::default()).unwrap();
    assert_eq!(ranked.len(), 3);
}

#[test]
fn deterministic_across_runs() {
    let metadata = Metadata::new();
    let config = RunConfig::default();

    let first = harness::compare(SAMPLE, &metadata, &config).unwrap();
    let second = harness::compare(SAMPLE, &metadata, &config).unwrap();

    assert_eq!(first, second);
}
