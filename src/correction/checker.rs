// Offline grammar checker - rules-based corrections that need no network
// Each rule is a case-insensitive regex paired with a replacement function

use regex::{Captures, Regex};

/// Pattern and replacement for one rule, compiled by [`OfflineChecker::new`]
struct RuleDefinition {
    name: &'static str,
    pattern: &'static str,
    replace: fn(&Captures) -> String,
}

const RULES: &[RuleDefinition] = &[
    RuleDefinition {
        name: "subject_verb_agreement",
        pattern: r"(?i)\b(He|She|It)\s+(have|do|are|were)\b",
        replace: agree_verb,
    },
    RuleDefinition {
        name: "common_typos",
        pattern: r"(?i)\b(recieve|seperate|beleive|thier)\b",
        replace: fix_typo,
    },
];

/// Third-person singular subject followed by a plural verb form.
/// The subject keeps its case, the whitespace between collapses to one space.
fn agree_verb(caps: &Captures) -> String {
    let verb = caps[2].to_lowercase();
    let agreed = match verb.as_str() {
        "have" => "has",
        "do" => "does",
        "are" => "is",
        "were" => "was",
        _ => &caps[2],
    };
    format!("{} {}", &caps[1], agreed)
}

/// Replacements are always lowercase
fn fix_typo(caps: &Captures) -> String {
    let word = caps[0].to_lowercase();
    let fixed = match word.as_str() {
        "recieve" => "receive",
        "seperate" => "separate",
        "beleive" => "believe",
        "thier" => "their",
        _ => &caps[0],
    };
    fixed.to_string()
}

struct CompiledRule {
    name: &'static str,
    regex: Regex,
    replace: fn(&Captures) -> String,
}

/// Checker holding the precompiled rule table
pub struct OfflineChecker {
    rules: Vec<CompiledRule>,
}

impl Default for OfflineChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl OfflineChecker {
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .filter_map(|rule| match Regex::new(rule.pattern) {
                Ok(regex) => Some(CompiledRule {
                    name: rule.name,
                    regex,
                    replace: rule.replace,
                }),
                Err(e) => {
                    crate::warn!("Failed to compile correction rule '{}': {}", rule.name, e);
                    None
                }
            })
            .collect();

        Self { rules }
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name).collect()
    }

    /// Run every rule over the text in order, each on the previous output.
    ///
    /// Returns the corrected text, or `None` when no replacement differed
    /// from what it matched.
    pub fn check(&self, text: &str) -> Option<String> {
        let mut corrected = false;
        let mut current = text.to_string();

        for rule in &self.rules {
            let next = rule.regex.replace_all(&current, |caps: &Captures| {
                let replacement = (rule.replace)(caps);
                if replacement != caps[0] {
                    crate::trace!("Rule {} rewrote '{}'", rule.name, &caps[0]);
                    corrected = true;
                }
                replacement
            });
            current = next.into_owned();
        }

        corrected.then_some(current)
    }
}

/// Convenience wrapper compiling the rule table for a single check
pub fn check_offline(text: &str) -> Option<String> {
    OfflineChecker::new().check(text)
}

#[cfg(test)]
#[path = "checker_test.rs"]
mod tests;
