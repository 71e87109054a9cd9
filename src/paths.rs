// Default locations for persisted settings

use std::path::PathBuf;

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "refyne";

pub const SAVED_ENTRIES_FILE: &str = "saved_entries.json";
pub const TEXT_EXPANSION_FILE: &str = "text_expansion.json";
pub const PREFERENCES_FILE: &str = "preferences.json";
pub const CORRECTION_STATS_FILE: &str = "correction_stats.json";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("Platform config directory not available")]
    ConfigDirNotFound,
}

/// Get the config directory, e.g. `~/.config/refyne` on Linux
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
