// Settings change events so hosts can refresh their in-memory snapshots
// Defines event payloads and emission trait for testability

use serde::Serialize;

/// Event names as constants for consistency
pub mod event_names {
    pub const SAVED_ENTRIES_UPDATED: &str = "saved_entries_updated";
    pub const TEXT_EXPANSION_UPDATED: &str = "text_expansion_updated";
    pub const PREFERENCES_UPDATED: &str = "preferences_updated";
}

/// Kind of mutation carried by an update event
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateAction {
    Add,
    Update,
    Delete,
    Import,
    Toggle,
}

/// Payload for saved_entries_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntriesUpdatedPayload {
    pub action: UpdateAction,
    /// Question of the affected entry (absent for imports)
    pub question: Option<String>,
    /// Number of entries after the mutation
    pub total: usize,
}

/// Payload for text_expansion_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextExpansionUpdatedPayload {
    pub action: UpdateAction,
    /// Trigger of the affected shortcut (absent for imports and toggles)
    pub trigger: Option<String>,
    pub enabled: bool,
    pub total: usize,
}

/// Payload for preferences_updated event
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdatedPayload {
    pub record_form_data: bool,
    pub autofill_enabled: bool,
}

/// Trait for emitting settings events
/// Allows mocking in tests while the host forwards events to its own listeners
pub trait SettingsEventEmitter: Send + Sync {
    /// Emit saved_entries_updated event
    fn emit_saved_entries_updated(&self, payload: SavedEntriesUpdatedPayload);

    /// Emit text_expansion_updated event
    fn emit_text_expansion_updated(&self, payload: TextExpansionUpdatedPayload);

    /// Emit preferences_updated event
    fn emit_preferences_updated(&self, payload: PreferencesUpdatedPayload);
}

/// Forward a serialized payload to the host sink, logging serialization failures
macro_rules! emit_or_warn {
    ($sink:expr, $event:expr, $payload:expr) => {
        match serde_json::to_value(&$payload) {
            Ok(value) => ($sink)($event, value),
            Err(e) => crate::warn!("Failed to emit event '{}': {}", $event, e),
        }
    };
}

/// Emitter for hosts that dispatch events by name with a JSON body,
/// such as a webview message channel or an extension runtime port
pub struct JsonEventEmitter<F>
where
    F: Fn(&'static str, serde_json::Value) + Send + Sync,
{
    sink: F,
}

impl<F> JsonEventEmitter<F>
where
    F: Fn(&'static str, serde_json::Value) + Send + Sync,
{
    pub fn new(sink: F) -> Self {
        Self { sink }
    }
}

impl<F> SettingsEventEmitter for JsonEventEmitter<F>
where
    F: Fn(&'static str, serde_json::Value) + Send + Sync,
{
    fn emit_saved_entries_updated(&self, payload: SavedEntriesUpdatedPayload) {
        emit_or_warn!(self.sink, event_names::SAVED_ENTRIES_UPDATED, payload);
    }

    fn emit_text_expansion_updated(&self, payload: TextExpansionUpdatedPayload) {
        emit_or_warn!(self.sink, event_names::TEXT_EXPANSION_UPDATED, payload);
    }

    fn emit_preferences_updated(&self, payload: PreferencesUpdatedPayload) {
        emit_or_warn!(self.sink, event_names::PREFERENCES_UPDATED, payload);
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
pub(crate) mod tests;
