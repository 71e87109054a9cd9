// Language detection - guesses a language code from common-word frequency
// Used to pick a translation source when the user leaves it on auto

use regex::Regex;

/// Common words per language code, in tie-break order
const COMMON_WORDS: &[(&str, &[&str])] = &[
    ("en", &["the", "and", "is", "in", "to", "of", "a", "that", "it", "with"]),
    ("es", &["el", "la", "de", "que", "y", "a", "en", "un", "es", "se"]),
    ("fr", &["le", "de", "et", "à", "un", "être", "en", "avoir", "que", "pour"]),
    ("de", &["der", "die", "und", "in", "den", "von", "zu", "das", "mit", "sich"]),
    ("it", &["il", "di", "che", "e", "la", "in", "un", "è", "per", "a"]),
    ("pt", &["o", "de", "e", "que", "a", "do", "da", "em", "um", "para"]),
    ("ru", &["и", "в", "не", "на", "я", "быть", "с", "а", "как", "то"]),
    ("hi", &["कि", "है", "और", "के", "से", "इस", "पर", "एक", "यह", "को"]),
    ("zh", &["的", "一", "是", "在", "不", "了", "有", "和", "人", "这"]),
];

/// Text shorter than this (in characters, after trimming) is not classified
pub const MIN_DETECT_CHARS: usize = 3;

/// Language codes that [`detect_language`] can return
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    COMMON_WORDS.iter().map(|(code, _)| *code)
}

/// Guess the language of `text`.
///
/// Each language scores one point per word of the text found in its
/// common-word list. The highest score wins; ties go to the language
/// listed first. Returns `None` for short text or when nothing scores.
pub fn detect_language(text: &str) -> Option<&'static str> {
    if text.trim().chars().count() < MIN_DETECT_CHARS {
        return None;
    }

    let word_regex = match Regex::new(r"\w+") {
        Ok(regex) => regex,
        Err(e) => {
            crate::warn!("Failed to compile word regex: {}", e);
            return None;
        }
    };
    let lowered = text.to_lowercase();
    let words: Vec<&str> = word_regex.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut detected = None;
    let mut max_score = 0;
    for (code, common) in COMMON_WORDS {
        let score = words.iter().filter(|word| common.contains(word)).count();
        if score > max_score {
            max_score = score;
            detected = Some(*code);
        }
    }

    crate::trace!("Detected language {:?} (score {})", detected, max_score);
    detected
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
