// Answer store - persists saved question/answer pairs for autofill
// Order is kept as recorded because the matcher's tie-break depends on it

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use super::StoredEntry;
use crate::events::{SavedEntriesUpdatedPayload, SettingsEventEmitter, UpdateAction};
use crate::storage;

/// Error types for answer store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerStoreError {
    /// Question or answer was empty after trimming
    #[error("Both question and answer are required")]
    EmptyField,
    /// An entry with this question already exists (case-insensitive)
    #[error("An entry for \"{0}\" already exists")]
    DuplicateQuestion(String),
    /// No entry at this position
    #[error("No entry at index {0}")]
    NotFound(usize),
    /// Import document was not understood
    #[error("Invalid import file: {0}")]
    InvalidImport(String),
    /// Failed to persist entries
    #[error("Failed to persist entries: {0}")]
    PersistenceError(String),
    /// Failed to load entries
    #[error("Failed to load entries: {0}")]
    LoadError(String),
}

/// Result of recording a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Added,
    Updated,
    /// Nothing to record (missing label/value, disabled, or unsupported field)
    Skipped,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    saved_entries: &'a [StoredEntry],
    exported_at: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImportDocument {
    Wrapped {
        #[serde(rename = "savedEntries")]
        saved_entries: Vec<StoredEntry>,
    },
    Bare(Vec<StoredEntry>),
}

/// Store for saved answers with file-based persistence
pub struct AnswerStore {
    entries: Vec<StoredEntry>,
    config_path: PathBuf,
    emitter: Option<Arc<dyn SettingsEventEmitter>>,
}

impl AnswerStore {
    /// Create a new store with the given config path
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            entries: Vec::new(),
            config_path,
            emitter: None,
        }
    }

    /// Create a store using the default config path
    pub fn with_default_path() -> Result<Self, AnswerStoreError> {
        let config_dir = crate::paths::get_config_dir().map_err(|e| {
            AnswerStoreError::LoadError(format!("Could not determine config directory: {}", e))
        })?;
        Ok(Self::new(config_dir.join(crate::paths::SAVED_ENTRIES_FILE)))
    }

    /// Attach an emitter notified after every successful mutation
    pub fn with_emitter(mut self, emitter: Arc<dyn SettingsEventEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Load entries from the persistence file
    pub fn load(&mut self) -> Result<(), AnswerStoreError> {
        crate::debug!("Loading saved entries from {:?}", self.config_path);

        match storage::read_json::<Vec<StoredEntry>>(&self.config_path) {
            Ok(Some(entries)) => self.entries = entries,
            Ok(None) => {
                crate::debug!("No saved entries file found, starting with empty store");
                self.entries.clear();
            }
            Err(e) => return Err(AnswerStoreError::LoadError(e.to_string())),
        }

        crate::info!("Loaded {} saved entries", self.entries.len());
        Ok(())
    }

    fn save(&self) -> Result<(), AnswerStoreError> {
        crate::debug!(
            "Persisting {} saved entries to {:?}",
            self.entries.len(),
            self.config_path
        );
        storage::write_json_atomic(&self.config_path, &self.entries)
            .map_err(|e| AnswerStoreError::PersistenceError(e.to_string()))
    }

    fn notify(&self, action: UpdateAction, question: Option<String>) {
        if let Some(emitter) = &self.emitter {
            emitter.emit_saved_entries_updated(SavedEntriesUpdatedPayload {
                action,
                question,
                total: self.entries.len(),
            });
        }
    }

    /// Persist the current entries, restoring `previous` if that fails
    fn commit(&mut self, previous: Vec<StoredEntry>) -> Result<(), AnswerStoreError> {
        if let Err(e) = self.save() {
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    /// List all entries in stored order
    pub fn list(&self) -> &[StoredEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&StoredEntry> {
        self.entries.get(index)
    }

    /// Record a value typed into a labelled field.
    ///
    /// The question is matched exactly: an existing entry gets its answer
    /// replaced, otherwise a new entry is appended. Empty input is skipped.
    pub fn record(&mut self, question: &str, answer: &str) -> Result<RecordOutcome, AnswerStoreError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Ok(RecordOutcome::Skipped);
        }

        let previous = self.entries.clone();
        let existing = self.entries.iter().position(|e| e.question == question);
        let outcome = match existing {
            Some(index) => {
                self.entries[index].answer = answer.to_string();
                RecordOutcome::Updated
            }
            None => {
                self.entries.push(StoredEntry {
                    question: question.to_string(),
                    answer: answer.to_string(),
                });
                RecordOutcome::Added
            }
        };
        self.commit(previous)?;

        crate::debug!("Recorded answer for \"{}\" ({:?})", question, outcome);
        let action = match outcome {
            RecordOutcome::Added => UpdateAction::Add,
            _ => UpdateAction::Update,
        };
        self.notify(action, Some(question.to_string()));
        Ok(outcome)
    }

    /// Add an entry by hand, rejecting case-insensitive duplicate questions
    #[must_use = "this returns a Result that should be handled"]
    pub fn add(&mut self, question: &str, answer: &str) -> Result<StoredEntry, AnswerStoreError> {
        let entry = Self::validated(question, answer)?;
        let lowered = entry.question.to_lowercase();
        if self
            .entries
            .iter()
            .any(|e| e.question.to_lowercase() == lowered)
        {
            return Err(AnswerStoreError::DuplicateQuestion(entry.question));
        }

        let previous = self.entries.clone();
        self.entries.push(entry.clone());
        self.commit(previous)?;

        crate::info!("Added saved entry: {}", entry.question);
        self.notify(UpdateAction::Add, Some(entry.question.clone()));
        Ok(entry)
    }

    /// Replace the entry at `index`
    #[must_use = "this returns a Result that should be handled"]
    pub fn update(
        &mut self,
        index: usize,
        question: &str,
        answer: &str,
    ) -> Result<StoredEntry, AnswerStoreError> {
        let entry = Self::validated(question, answer)?;
        if index >= self.entries.len() {
            return Err(AnswerStoreError::NotFound(index));
        }

        let previous = self.entries.clone();
        self.entries[index] = entry.clone();
        self.commit(previous)?;

        crate::info!("Updated saved entry {}: {}", index, entry.question);
        self.notify(UpdateAction::Update, Some(entry.question.clone()));
        Ok(entry)
    }

    /// Delete the entry at `index`
    #[must_use = "this returns a Result that should be handled"]
    pub fn delete(&mut self, index: usize) -> Result<StoredEntry, AnswerStoreError> {
        if index >= self.entries.len() {
            return Err(AnswerStoreError::NotFound(index));
        }

        let previous = self.entries.clone();
        let removed = self.entries.remove(index);
        self.commit(previous)?;

        crate::info!("Deleted saved entry: {}", removed.question);
        self.notify(UpdateAction::Delete, Some(removed.question.clone()));
        Ok(removed)
    }

    /// Serialize all entries as a pretty JSON export document
    pub fn export_json(&self) -> Result<String, AnswerStoreError> {
        let document = ExportDocument {
            saved_entries: &self.entries,
            exported_at: Utc::now().to_rfc3339(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| AnswerStoreError::PersistenceError(e.to_string()))
    }

    /// Replace all entries with the contents of an export document.
    ///
    /// Accepts either `{"savedEntries": [...]}` or a bare array. Entries with
    /// an empty question or answer are dropped. Returns the number imported.
    pub fn import_json(&mut self, json: &str) -> Result<usize, AnswerStoreError> {
        let document: ImportDocument = serde_json::from_str(json)
            .map_err(|e| AnswerStoreError::InvalidImport(e.to_string()))?;
        let imported = match document {
            ImportDocument::Wrapped { saved_entries } => saved_entries,
            ImportDocument::Bare(entries) => entries,
        };

        let previous = std::mem::take(&mut self.entries);
        self.entries = imported
            .into_iter()
            .filter_map(|e| Self::validated(&e.question, &e.answer).ok())
            .collect();
        self.commit(previous)?;

        crate::info!("Imported {} saved entries", self.entries.len());
        self.notify(UpdateAction::Import, None);
        Ok(self.entries.len())
    }

    fn validated(question: &str, answer: &str) -> Result<StoredEntry, AnswerStoreError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Err(AnswerStoreError::EmptyField);
        }
        Ok(StoredEntry {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
