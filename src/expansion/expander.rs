// Shortcut expander - detects a trigger word that ends at the cursor
// Uses case-insensitive regex anchored to the end of the pre-cursor text

use regex::Regex;
use serde::Serialize;

use super::Shortcut;

/// A trigger found immediately before the cursor.
///
/// Offsets count characters (Unicode scalar values), not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionResult {
    pub trigger_start: usize,
    pub trigger_end: usize,
    pub expansion: String,
}

/// Field content after an expansion was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedExpansion {
    pub text: String,
    /// New caret offset in characters, right after the expansion
    pub cursor: usize,
}

impl ExpansionResult {
    /// Replace the trigger span in `text` with the expansion
    pub fn apply(&self, text: &str) -> AppliedExpansion {
        let start = byte_offset(text, self.trigger_start).unwrap_or(text.len());
        let end = byte_offset(text, self.trigger_end).unwrap_or(text.len()).max(start);

        let mut expanded = String::with_capacity(text.len() + self.expansion.len());
        expanded.push_str(&text[..start]);
        expanded.push_str(&self.expansion);
        expanded.push_str(&text[end..]);

        AppliedExpansion {
            text: expanded,
            cursor: self.trigger_start + self.expansion.chars().count(),
        }
    }
}

/// Compiled pattern for a single shortcut
struct CompiledPattern {
    regex: Regex,
    shortcut: Shortcut,
}

/// Expander holding precompiled patterns for an ordered shortcut list
pub struct ShortcutExpander {
    patterns: Vec<CompiledPattern>,
}

impl ShortcutExpander {
    /// Create a new expander from a list of shortcuts.
    /// Entries without a trigger or expansion are skipped, the rest keep
    /// their order.
    pub fn new(shortcuts: &[Shortcut]) -> Self {
        let patterns = shortcuts
            .iter()
            .filter_map(|shortcut| {
                if shortcut.trigger.trim().is_empty() || shortcut.expansion.is_empty() {
                    crate::warn!(
                        "Skipping incomplete shortcut (trigger '{}')",
                        shortcut.trigger
                    );
                    return None;
                }

                // Trigger preceded by start-of-text or whitespace, ending the haystack
                let pattern = format!(r"(?i)(?:^|\s)({})$", regex::escape(&shortcut.trigger));
                match Regex::new(&pattern) {
                    Ok(regex) => Some(CompiledPattern {
                        regex,
                        shortcut: shortcut.clone(),
                    }),
                    Err(e) => {
                        crate::warn!(
                            "Failed to compile regex for trigger '{}': {}",
                            shortcut.trigger,
                            e
                        );
                        None
                    }
                }
            })
            .collect();

        Self { patterns }
    }

    /// Number of usable shortcuts
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Find the first shortcut, in list order, whose trigger ends exactly
    /// at `cursor_position` and is followed by whitespace or end-of-text.
    pub fn find(&self, text: &str, cursor_position: usize) -> Option<ExpansionResult> {
        if cursor_position == 0 {
            return None;
        }

        let cursor_byte = byte_offset(text, cursor_position)?;
        let (before, after) = text.split_at(cursor_byte);

        if after.chars().next().is_some_and(|c| !c.is_whitespace()) {
            return None;
        }

        self.patterns.iter().find_map(|pattern| {
            let trigger = pattern.regex.captures(before)?.get(1)?;
            let trigger_start = before[..trigger.start()].chars().count();

            Some(ExpansionResult {
                trigger_start,
                trigger_end: cursor_position,
                expansion: pattern.shortcut.expansion.clone(),
            })
        })
    }
}

/// Look up a shortcut expansion for the text before the cursor
pub fn find_expansion(
    text: &str,
    cursor_position: usize,
    shortcuts: &[Shortcut],
) -> Option<ExpansionResult> {
    ShortcutExpander::new(shortcuts).find(text, cursor_position)
}

/// Byte index of the `chars`-th character, or `None` past the end
fn byte_offset(text: &str, chars: usize) -> Option<usize> {
    if chars == 0 {
        return Some(0);
    }
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(chars)
}

#[cfg(test)]
#[path = "expander_test.rs"]
mod tests;
