// Shortcut store - persists text expansion settings
// The on-disk and export shapes match the extension's `textExpansion` key

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use super::{Shortcut, ShortcutExpander, TextExpansionSettings};
use crate::events::{SettingsEventEmitter, TextExpansionUpdatedPayload, UpdateAction};
use crate::storage;

/// Error types for shortcut store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShortcutStoreError {
    /// Trigger or expansion was empty after trimming
    #[error("Both shortcut and expansion are required")]
    EmptyField,
    /// A shortcut with this trigger already exists (case-insensitive)
    #[error("Shortcut \"{0}\" already exists")]
    DuplicateTrigger(String),
    /// No shortcut at this position
    #[error("No shortcut at index {0}")]
    NotFound(usize),
    /// Import document was not understood
    #[error("Invalid import file: {0}")]
    InvalidImport(String),
    /// Failed to persist settings
    #[error("Failed to persist shortcuts: {0}")]
    PersistenceError(String),
    /// Failed to load settings
    #[error("Failed to load shortcuts: {0}")]
    LoadError(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    text_expansion: &'a TextExpansionSettings,
    exported_at: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportDocument {
    text_expansion: ImportedSettings,
}

#[derive(Deserialize)]
struct ImportedSettings {
    #[serde(default)]
    enabled: Option<bool>,
    shortcuts: Vec<Shortcut>,
}

/// Store for text expansion settings with file-based persistence
pub struct ShortcutStore {
    settings: TextExpansionSettings,
    config_path: PathBuf,
    emitter: Option<Arc<dyn SettingsEventEmitter>>,
}

impl ShortcutStore {
    /// Create a new store with the given config path, holding the defaults
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            settings: TextExpansionSettings::default(),
            config_path,
            emitter: None,
        }
    }

    /// Create a store using the default config path
    pub fn with_default_path() -> Result<Self, ShortcutStoreError> {
        let config_dir = crate::paths::get_config_dir().map_err(|e| {
            ShortcutStoreError::LoadError(format!("Could not determine config directory: {}", e))
        })?;
        Ok(Self::new(config_dir.join(crate::paths::TEXT_EXPANSION_FILE)))
    }

    /// Attach an emitter notified after every successful mutation
    pub fn with_emitter(mut self, emitter: Arc<dyn SettingsEventEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Load settings from the persistence file; a missing file keeps the defaults
    pub fn load(&mut self) -> Result<(), ShortcutStoreError> {
        crate::debug!("Loading text expansion settings from {:?}", self.config_path);

        match storage::read_json::<TextExpansionSettings>(&self.config_path) {
            Ok(Some(settings)) => self.settings = settings,
            Ok(None) => {
                crate::debug!("No text expansion file found, using default shortcuts");
                self.settings = TextExpansionSettings::default();
            }
            Err(e) => return Err(ShortcutStoreError::LoadError(e.to_string())),
        }

        crate::info!(
            "Loaded {} shortcuts (expansion {})",
            self.settings.shortcuts.len(),
            if self.settings.enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    /// Current settings snapshot
    pub fn settings(&self) -> &TextExpansionSettings {
        &self.settings
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.settings.shortcuts
    }

    /// Build an expander for the current shortcut list
    pub fn expander(&self) -> ShortcutExpander {
        self.settings.expander()
    }

    fn commit(
        &mut self,
        previous: TextExpansionSettings,
        action: UpdateAction,
        trigger: Option<String>,
    ) -> Result<(), ShortcutStoreError> {
        crate::debug!(
            "Persisting {} shortcuts to {:?}",
            self.settings.shortcuts.len(),
            self.config_path
        );
        if let Err(e) = storage::write_json_atomic(&self.config_path, &self.settings) {
            self.settings = previous;
            return Err(ShortcutStoreError::PersistenceError(e.to_string()));
        }

        if let Some(emitter) = &self.emitter {
            emitter.emit_text_expansion_updated(TextExpansionUpdatedPayload {
                action,
                trigger,
                enabled: self.settings.enabled,
                total: self.settings.shortcuts.len(),
            });
        }
        Ok(())
    }

    /// Turn the feature on or off
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), ShortcutStoreError> {
        let previous = self.settings.clone();
        self.settings.enabled = enabled;
        self.commit(previous, UpdateAction::Toggle, None)?;

        crate::info!("Text expansion {}", if enabled { "enabled" } else { "disabled" });
        Ok(())
    }

    /// Append a shortcut, rejecting case-insensitive duplicate triggers
    #[must_use = "this returns a Result that should be handled"]
    pub fn add(&mut self, trigger: &str, expansion: &str) -> Result<Shortcut, ShortcutStoreError> {
        let shortcut = Self::validated(trigger, expansion)?;
        let lowered = shortcut.trigger.to_lowercase();
        if self
            .settings
            .shortcuts
            .iter()
            .any(|s| s.trigger.to_lowercase() == lowered)
        {
            return Err(ShortcutStoreError::DuplicateTrigger(shortcut.trigger));
        }

        let previous = self.settings.clone();
        self.settings.shortcuts.push(shortcut.clone());
        self.commit(previous, UpdateAction::Add, Some(shortcut.trigger.clone()))?;

        crate::info!("Added shortcut: {} -> {}", shortcut.trigger, shortcut.expansion);
        Ok(shortcut)
    }

    /// Replace the shortcut at `index`
    #[must_use = "this returns a Result that should be handled"]
    pub fn update(
        &mut self,
        index: usize,
        trigger: &str,
        expansion: &str,
    ) -> Result<Shortcut, ShortcutStoreError> {
        let shortcut = Self::validated(trigger, expansion)?;
        if index >= self.settings.shortcuts.len() {
            return Err(ShortcutStoreError::NotFound(index));
        }

        let previous = self.settings.clone();
        self.settings.shortcuts[index] = shortcut.clone();
        self.commit(previous, UpdateAction::Update, Some(shortcut.trigger.clone()))?;

        crate::info!("Updated shortcut {}: {}", index, shortcut.trigger);
        Ok(shortcut)
    }

    /// Delete the shortcut at `index`
    #[must_use = "this returns a Result that should be handled"]
    pub fn delete(&mut self, index: usize) -> Result<Shortcut, ShortcutStoreError> {
        if index >= self.settings.shortcuts.len() {
            return Err(ShortcutStoreError::NotFound(index));
        }

        let previous = self.settings.clone();
        let removed = self.settings.shortcuts.remove(index);
        self.commit(previous, UpdateAction::Delete, Some(removed.trigger.clone()))?;

        crate::info!("Deleted shortcut: {}", removed.trigger);
        Ok(removed)
    }

    /// Serialize the settings as `{"textExpansion": {...}, "exportedAt": ...}`
    pub fn export_json(&self) -> Result<String, ShortcutStoreError> {
        let document = ExportDocument {
            text_expansion: &self.settings,
            exported_at: Utc::now().to_rfc3339(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| ShortcutStoreError::PersistenceError(e.to_string()))
    }

    /// Replace the enabled flag and shortcut list with an export document.
    ///
    /// The document must carry a `textExpansion.shortcuts` array. Shortcuts
    /// are taken as-is; incomplete ones are ignored later by the expander.
    /// A document without `enabled` turns the feature on.
    /// Returns the number of imported shortcuts.
    pub fn import_json(&mut self, json: &str) -> Result<usize, ShortcutStoreError> {
        let document: ImportDocument = serde_json::from_str(json)
            .map_err(|e| ShortcutStoreError::InvalidImport(e.to_string()))?;
        let imported = document.text_expansion;

        let previous = self.settings.clone();
        self.settings = TextExpansionSettings {
            enabled: imported.enabled.unwrap_or(true),
            shortcuts: imported.shortcuts,
        };
        self.commit(previous, UpdateAction::Import, None)?;

        crate::info!("Imported {} shortcuts", self.settings.shortcuts.len());
        Ok(self.settings.shortcuts.len())
    }

    fn validated(trigger: &str, expansion: &str) -> Result<Shortcut, ShortcutStoreError> {
        let trigger = trigger.trim();
        let expansion = expansion.trim();
        if trigger.is_empty() || expansion.is_empty() {
            return Err(ShortcutStoreError::EmptyField);
        }
        Ok(Shortcut::new(trigger, expansion))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
