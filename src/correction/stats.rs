// Correction statistics - counts applied corrections and the word-count churn
// they caused; persisted like the other settings files

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::storage;

/// Running totals shown by the popup and badge
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CorrectionStats {
    pub corrections_count: u64,
    /// Sum of word-count differences between original and corrected text
    pub words_improved: u64,
}

impl CorrectionStats {
    /// Count one applied correction.
    ///
    /// Ignored, returning `false`, when either text is empty.
    pub fn log_correction(&mut self, original: &str, corrected: &str) -> bool {
        if original.is_empty() || corrected.is_empty() {
            return false;
        }

        let delta = word_count(corrected).abs_diff(word_count(original));
        self.corrections_count += 1;
        self.words_improved += delta as u64;
        true
    }

    /// Badge label: the correction count, or `ON` before the first one
    pub fn badge_text(&self) -> String {
        if self.corrections_count > 0 {
            self.corrections_count.to_string()
        } else {
            "ON".to_string()
        }
    }
}

/// Number of pieces left after splitting on whitespace runs.
/// Leading or trailing whitespace adds an empty piece, so `""` counts 1.
fn word_count(text: &str) -> usize {
    let mut pieces = 1;
    let mut in_gap = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_gap {
                pieces += 1;
                in_gap = true;
            }
        } else {
            in_gap = false;
        }
    }
    pieces
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Failed to persist correction stats: {0}")]
    PersistenceError(String),
    #[error("Failed to load correction stats: {0}")]
    LoadError(String),
}

/// File-backed store for [`CorrectionStats`]
pub struct StatsStore {
    stats: CorrectionStats,
    config_path: PathBuf,
}

impl StatsStore {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            stats: CorrectionStats::default(),
            config_path,
        }
    }

    /// Create a store using the default config path
    pub fn with_default_path() -> Result<Self, StatsError> {
        let config_dir = crate::paths::get_config_dir().map_err(|e| {
            StatsError::LoadError(format!("Could not determine config directory: {}", e))
        })?;
        Ok(Self::new(config_dir.join(crate::paths::CORRECTION_STATS_FILE)))
    }

    pub fn load(&mut self) -> Result<(), StatsError> {
        crate::debug!("Loading correction stats from {:?}", self.config_path);

        self.stats = storage::read_json(&self.config_path)
            .map_err(|e| StatsError::LoadError(e.to_string()))?
            .unwrap_or_default();

        Ok(())
    }

    pub fn stats(&self) -> CorrectionStats {
        self.stats
    }

    /// Count a correction and persist the new totals.
    /// Returns `Ok(false)` without writing when the correction was ignored.
    pub fn log_correction(&mut self, original: &str, corrected: &str) -> Result<bool, StatsError> {
        let mut next = self.stats;
        if !next.log_correction(original, corrected) {
            return Ok(false);
        }

        storage::write_json_atomic(&self.config_path, &next)
            .map_err(|e| StatsError::PersistenceError(e.to_string()))?;
        self.stats = next;

        crate::info!(
            "Correction logged: {} total, {} words improved",
            next.corrections_count,
            next.words_improved
        );
        Ok(true)
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
