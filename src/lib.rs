// Field-assist engine: autofill label matching, text-expansion shortcuts,
// offline grammar corrections and language detection
//
// The host (browser extension, desktop shell, tests) owns the DOM and the
// key/value store. This crate only sees plain data and the collaborator
// traits in `autofill::label` and `events`.

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod autofill;
pub mod correction;
pub mod events;
pub mod expansion;
pub mod field;
pub mod language;
pub mod paths;
pub mod settings;
mod storage;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use autofill::matcher::{find_best_match, similarity, MatchResult};
pub use autofill::StoredEntry;
pub use expansion::expander::{find_expansion, AppliedExpansion, ExpansionResult};
pub use expansion::Shortcut;
pub use language::detect_language;
