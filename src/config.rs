//! Run configuration for the comparison harness.

use std::path::{Path, PathBuf};

/// Explicit configuration for one harness run.
///
/// This replaces environment-variable style configuration with a plain
/// struct passed into the entry point, so tests can run the harness with any
/// settings without touching process state.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Directory for saved artifacts. `None` disables all file output.
    pub save_dir: Option<PathBuf>,
    /// Whether to persist the scored table as CSV.
    pub save_results: bool,
}

impl RunConfig {
    /// Configuration that writes both the results table and the chart into
    /// `dir`.
    #[must_use]
    pub fn saving_to(dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: Some(dir.into()),
            save_results: true,
        }
    }

    /// Path of the results table, if saving is fully enabled.
    #[must_use]
    pub fn results_path(&self) -> Option<PathBuf> {
        if !self.save_results {
            return None;
        }
        self.save_dir
            .as_deref()
            .map(|d| d.join("chunking_results.csv"))
    }

    /// Path of the comparison chart, if a save directory is set.
    #[must_use]
    pub fn chart_path(&self) -> Option<PathBuf> {
        self.save_dir
            .as_deref()
            .map(|d| d.join("chunking_comparison.svg"))
    }

    /// Create the save directory if configured and missing.
    ///
    /// Idempotent: an existing directory is not an error.
    ///
    /// # Errors
    ///
    /// Propagates filesystem errors other than "already exists".
    pub fn ensure_save_dir(&self) -> std::io::Result<Option<&Path>> {
        match self.save_dir.as_deref() {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                Ok(Some(dir))
            }
            None => Ok(None),
        }
    }
}
