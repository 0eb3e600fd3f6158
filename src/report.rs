//! Reporting: structured logs, the results table, and the comparison chart.
//!
//! Everything here is a side-effecting consumer of already-computed rows; no
//! business logic lives in this module. Log output goes through `tracing`
//! and is shaped by whatever subscriber the embedding binary installed.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info, warn};

use crate::{Chunk, Error, Result, RunConfig, ScoredStats};

/// Columns of the persisted results table, in order.
const CSV_HEADER: [&str; 7] = [
    "method",
    "score",
    "num_chunks",
    "mean_words",
    "std_words",
    "max_words",
    "min_words",
];

/// Collapse all whitespace runs to single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Informal preservation check: every chunk, whitespace-normalized, must
/// occur in the whitespace-normalized source.
///
/// Overlapping chunks repeat source text, so full reconstruction by
/// concatenation is not expected; substring containment is the useful
/// invariant. An empty chunk list preserves only an empty source.
#[must_use]
pub fn preserves_source(chunks: &[Chunk], source: &str) -> bool {
    let normalized = normalize_whitespace(source);
    if chunks.is_empty() {
        return normalized.is_empty();
    }
    chunks
        .iter()
        .all(|c| normalized.contains(&normalize_whitespace(&c.text)))
}

/// Log one method's chunk output: each chunk at debug level, the summary and
/// preservation check at info.
pub fn log_chunks(method: &str, chunks: &[Chunk], source: &str) {
    if chunks.is_empty() {
        warn!(method, "no chunks produced");
        return;
    }

    for (i, chunk) in chunks.iter().enumerate() {
        debug!(
            method,
            index = i,
            words = chunk.token_count,
            chars = chunk.char_count(),
            text = %chunk.text,
            "chunk"
        );
    }

    let preserved = preserves_source(chunks, source);
    info!(method, chunks = chunks.len(), preserved, "split complete");
    if !preserved {
        warn!(method, "chunks do not map back onto the source text");
    }
}

/// Log the ranked rows and the winning method.
pub fn log_ranking(rows: &[ScoredStats]) {
    for row in rows {
        info!(
            method = %row.stats.method,
            score = row.score,
            num_chunks = row.stats.num_chunks,
            mean_words = row.stats.mean_words,
            std_words = row.stats.std_words,
            max_words = row.stats.max_words,
            min_words = row.stats.min_words,
            "scored"
        );
    }

    if let Some(best) = rows.first() {
        info!(method = %best.stats.method, score = best.score, "best method");
    }
}

/// Write the scored table as CSV.
///
/// # Errors
///
/// Propagates filesystem and CSV formatting errors.
pub fn save_csv(rows: &[ScoredStats], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record([
            row.stats.method.clone(),
            row.score.to_string(),
            row.stats.num_chunks.to_string(),
            format!("{:.2}", row.stats.mean_words),
            format!("{:.2}", row.stats.std_words),
            row.stats.max_words.to_string(),
            row.stats.min_words.to_string(),
        ])?;
    }

    writer.flush()?;
    info!(path = %path.display(), "results table saved");
    Ok(())
}

fn chart_err(e: impl std::fmt::Display) -> Error {
    Error::Chart(e.to_string())
}

/// Render the comparison chart: one bar panel per variable, methods on the
/// x-axis, the top-ranked method highlighted.
///
/// Rows are expected in ranked order (best first), as produced by
/// [`crate::score::rank`].
///
/// # Errors
///
/// Returns [`Error::Chart`] if the backend fails to draw or write the SVG.
pub fn render_chart(rows: &[ScoredStats], path: &Path) -> Result<()> {
    if rows.is_empty() {
        warn!("no rows to chart");
        return Ok(());
    }

    let root = SVGBackend::new(path, (1080, 400)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let panels = root.split_evenly((1, 3));
    draw_panel(&panels[0], rows, "mean_words", |r| r.stats.mean_words)?;
    draw_panel(&panels[1], rows, "mean_chars", |r| r.stats.mean_chars)?;
    draw_panel(&panels[2], rows, "num_chunks", |r| r.stats.num_chunks as f64)?;

    root.present().map_err(chart_err)?;
    info!(path = %path.display(), "comparison chart saved");
    Ok(())
}

/// Draw one bar panel for a single variable.
fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    rows: &[ScoredStats],
    title: &str,
    value: impl Fn(&ScoredStats) -> f64,
) -> Result<()> {
    let y_max = rows.iter().map(&value).fold(0.0_f64, f64::max).max(1.0) * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(48)
        .build_cartesian_2d((0..rows.len()).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) => rows
                .get(*i)
                .map(|r| r.stats.method.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, row)| {
            // Rows arrive ranked, so index 0 is the best method.
            let style = if i == 0 { RED.filled() } else { BLUE.filled() };
            Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), value(row)),
                ],
                style,
            )
        }))
        .map_err(chart_err)?;

    Ok(())
}

/// Persist whatever artifacts the configuration asks for.
///
/// # Errors
///
/// Propagates directory creation, CSV, and chart errors.
pub fn persist(rows: &[ScoredStats], config: &RunConfig) -> Result<()> {
    if config.save_dir.is_some() {
        config.ensure_save_dir()?;
    }
    if let Some(path) = config.results_path() {
        save_csv(rows, &path)?;
    }
    if let Some(path) = config.chart_path() {
        render_chart(rows, &path)?;
    }
    Ok(())
}
