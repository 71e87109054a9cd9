// Correction - offline grammar checks and the statistics kept for applied fixes

pub mod checker;
pub mod stats;

pub use checker::{check_offline, OfflineChecker};
pub use stats::{CorrectionStats, StatsError, StatsStore};

use crate::field::FieldDescriptor;

/// Offer an offline correction for the text of a field.
///
/// Sensitive fields are never checked. `None` means the text is fine as
/// far as the rule table can tell.
pub fn suggest_correction(field: &FieldDescriptor, text: &str) -> Option<String> {
    if field.is_sensitive() {
        return None;
    }
    check_offline(text).filter(|corrected| corrected != text)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
