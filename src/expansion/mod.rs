// Text expansion module - typed shortcuts replaced by predefined messages

pub mod expander;
mod store;

pub use expander::{find_expansion, AppliedExpansion, ExpansionResult, ShortcutExpander};
pub use store::{ShortcutStore, ShortcutStoreError};

use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;

/// A text-expansion rule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Shortcut {
    /// Word that triggers the expansion (e.g., "brb")
    pub trigger: String,
    /// Replacement text (e.g., "be right back")
    pub expansion: String,
}

impl Shortcut {
    pub fn new(trigger: impl Into<String>, expansion: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            expansion: expansion.into(),
        }
    }
}

/// Text expansion settings as persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextExpansionSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub shortcuts: Vec<Shortcut>,
}

fn default_enabled() -> bool {
    true
}

impl Default for TextExpansionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            shortcuts: default_shortcuts(),
        }
    }
}

/// Shortcuts installed when nothing has been saved yet
pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("thank", "Thank you for your message!"),
        Shortcut::new("regards", "Best regards,"),
        Shortcut::new(
            "meeting",
            "I'd be happy to schedule a meeting with you.",
        ),
    ]
}

impl TextExpansionSettings {
    /// Build an expander for the current shortcut list
    pub fn expander(&self) -> ShortcutExpander {
        ShortcutExpander::new(&self.shortcuts)
    }
}

/// Expand a shortcut typed into `field`, if the feature and field allow it.
///
/// Returns the match together with the resulting field content; the host
/// writes the text back, moves the caret and fires its input event.
pub fn expand_in_field(
    settings: &TextExpansionSettings,
    field: &FieldDescriptor,
    text: &str,
    cursor_position: usize,
) -> Option<(ExpansionResult, AppliedExpansion)> {
    if !settings.enabled || settings.shortcuts.is_empty() || !field.accepts_expansion() {
        return None;
    }

    let result = find_expansion(text, cursor_position, &settings.shortcuts)?;
    let applied = result.apply(text);

    crate::debug!(
        "Expanded trigger at {}..{} into {} chars",
        result.trigger_start,
        result.trigger_end,
        result.expansion.chars().count()
    );

    Some((result, applied))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
