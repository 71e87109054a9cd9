// Autofill module - records answers typed into labelled fields and offers them back

pub mod label;
pub mod matcher;
mod store;

pub use label::{infer_label, recorded_label, FieldContext, FieldSnapshot, SiblingNode};
pub use matcher::{AutofillMatcher, MatcherConfig, DEFAULT_THRESHOLD};
pub use store::{AnswerStore, AnswerStoreError, RecordOutcome};

use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;
use crate::settings::Preferences;

/// One recorded label -> value pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoredEntry {
    pub question: String,
    pub answer: String,
}

/// A saved answer offered for a specific field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutofillSuggestion {
    /// Label inferred for the field
    pub label: String,
    pub entry: StoredEntry,
    pub score: f64,
}

/// Decide whether a saved answer should be offered for a field.
///
/// Returns `None` when autofill is disabled, the field is not eligible,
/// no label can be inferred, or no entry clears the matcher threshold.
pub fn suggest_for_field(
    prefs: &Preferences,
    field: &FieldDescriptor,
    ctx: &dyn FieldContext,
    entries: &[StoredEntry],
) -> Option<AutofillSuggestion> {
    if !prefs.autofill_enabled || !field.accepts_autofill() {
        return None;
    }

    let label = infer_label(ctx)?;
    let result = AutofillMatcher::new().best_match(&label, entries)?;

    crate::debug!(
        "Autofill match for \"{}\": \"{}\" (score {:.2})",
        label,
        result.entry.question,
        result.score
    );

    Some(AutofillSuggestion {
        label,
        entry: result.entry.clone(),
        score: result.score,
    })
}

/// Record the value of a field when it loses focus.
///
/// Only runs when form recording is enabled and the field is recordable;
/// the question comes from real label elements only.
pub fn record_field(
    prefs: &Preferences,
    field: &FieldDescriptor,
    ctx: &dyn FieldContext,
    value: &str,
    store: &mut AnswerStore,
) -> Result<RecordOutcome, AnswerStoreError> {
    if !prefs.record_form_data || !field.accepts_recording() {
        return Ok(RecordOutcome::Skipped);
    }

    match recorded_label(ctx) {
        Some(question) => store.record(&question, value),
        None => Ok(RecordOutcome::Skipped),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
