// User preferences - feature toggles shared by the autofill workflow
// Follows the same file-backed pattern as the answer and shortcut stores

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::events::{PreferencesUpdatedPayload, SettingsEventEmitter};
use crate::storage;

/// Feature toggles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Record values typed into labelled fields as saved answers
    pub record_form_data: bool,
    /// Offer saved answers on matching fields
    pub autofill_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            record_form_data: false,
            autofill_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferencesError {
    #[error("Failed to persist preferences: {0}")]
    PersistenceError(String),
    #[error("Failed to load preferences: {0}")]
    LoadError(String),
}

/// File-backed store for [`Preferences`]
pub struct PreferencesStore {
    preferences: Preferences,
    config_path: PathBuf,
    emitter: Option<Arc<dyn SettingsEventEmitter>>,
}

impl PreferencesStore {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            preferences: Preferences::default(),
            config_path,
            emitter: None,
        }
    }

    /// Create a store using the default config path
    pub fn with_default_path() -> Result<Self, PreferencesError> {
        let config_dir = crate::paths::get_config_dir().map_err(|e| {
            PreferencesError::LoadError(format!("Could not determine config directory: {}", e))
        })?;
        Ok(Self::new(config_dir.join(crate::paths::PREFERENCES_FILE)))
    }

    /// Attach an emitter notified after every successful change
    pub fn with_emitter(mut self, emitter: Arc<dyn SettingsEventEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn load(&mut self) -> Result<(), PreferencesError> {
        crate::debug!("Loading preferences from {:?}", self.config_path);

        self.preferences = storage::read_json(&self.config_path)
            .map_err(|e| PreferencesError::LoadError(e.to_string()))?
            .unwrap_or_default();

        Ok(())
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn set_record_form_data(&mut self, enabled: bool) -> Result<(), PreferencesError> {
        self.apply(Preferences {
            record_form_data: enabled,
            ..self.preferences
        })
    }

    pub fn set_autofill_enabled(&mut self, enabled: bool) -> Result<(), PreferencesError> {
        self.apply(Preferences {
            autofill_enabled: enabled,
            ..self.preferences
        })
    }

    fn apply(&mut self, next: Preferences) -> Result<(), PreferencesError> {
        storage::write_json_atomic(&self.config_path, &next)
            .map_err(|e| PreferencesError::PersistenceError(e.to_string()))?;
        self.preferences = next;

        crate::info!(
            "Preferences updated: record_form_data={}, autofill_enabled={}",
            next.record_form_data,
            next.autofill_enabled
        );

        if let Some(emitter) = &self.emitter {
            emitter.emit_preferences_updated(PreferencesUpdatedPayload {
                record_form_data: next.record_form_data,
                autofill_enabled: next.autofill_enabled,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
