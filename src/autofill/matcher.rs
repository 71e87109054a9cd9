// Autofill matcher - ranks stored questions against an inferred field label
// Uses the Sørensen–Dice coefficient over character bigram sets

use std::collections::HashSet;

use serde::Serialize;

use super::StoredEntry;

/// Default minimum similarity for a stored entry to be offered (0.0 to 1.0)
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// A stored entry together with the score that selected it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub entry: &'a StoredEntry,
    pub score: f64,
}

/// Configuration for the matcher
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Minimum similarity score for a match (0.0 to 1.0)
    pub threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Matcher that picks the stored entry whose question best fits a label
#[derive(Debug, Clone, Default)]
pub struct AutofillMatcher {
    config: MatcherConfig,
}

impl AutofillMatcher {
    /// Create a new matcher with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Find the entry with the highest score that clears the threshold.
    ///
    /// Entries are scanned in order and only a strictly greater score
    /// replaces the current best, so the first of several equal winners
    /// is kept.
    pub fn best_match<'a>(&self, query: &str, entries: &'a [StoredEntry]) -> Option<MatchResult<'a>> {
        let mut best: Option<MatchResult<'a>> = None;

        for entry in entries {
            let score = similarity(query, &entry.question);
            if score < self.config.threshold {
                continue;
            }
            let better = match &best {
                Some(current) => score > current.score,
                None => score > 0.0,
            };
            if better {
                best = Some(MatchResult { entry, score });
            }
        }

        best
    }
}

/// Find the best stored entry for `query` using the default threshold
pub fn find_best_match<'a>(query: &str, entries: &'a [StoredEntry]) -> Option<&'a StoredEntry> {
    AutofillMatcher::new()
        .best_match(query, entries)
        .map(|result| result.entry)
}

/// Lowercase and keep only ASCII letters and digits
fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

fn bigrams(normalized: &str) -> HashSet<&[u8]> {
    normalized.as_bytes().windows(2).collect()
}

/// Bigram Sørensen–Dice similarity of two strings after normalization.
///
/// Returns 0.0 when either side normalizes to nothing (or to a single
/// character that differs from the other side) and 1.0 for identical
/// normalized strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let left = bigrams(&a);
    let right = bigrams(&b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let shared = left.intersection(&right).count();
    (2 * shared) as f64 / (left.len() + right.len()) as f64
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
