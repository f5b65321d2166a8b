use std::path::PathBuf;

pub const DEFAULT_NOTES_FILE: &str = "notes.txt";
pub const DEFAULT_ERROR_LOG_FILE: &str = "error_log.txt";

/// Environment override for the note file location.
pub const NOTES_FILE_ENV: &str = "NOTES_MANAGER_FILE";
/// Environment override for the error log location.
pub const ERROR_LOG_ENV: &str = "NOTES_MANAGER_ERROR_LOG";

/// File locations used by the store and the error logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    pub notes_path: PathBuf,
    pub error_log_path: PathBuf,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            notes_path: PathBuf::from(DEFAULT_NOTES_FILE),
            error_log_path: PathBuf::from(DEFAULT_ERROR_LOG_FILE),
        }
    }
}

impl NotesConfig {
    /// Both files inside `dir`, with their default names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        NotesConfig {
            notes_path: dir.join(DEFAULT_NOTES_FILE),
            error_log_path: dir.join(DEFAULT_ERROR_LOG_FILE),
        }
    }

    /// Defaults, overridden by `NOTES_MANAGER_FILE` / `NOTES_MANAGER_ERROR_LOG` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = NotesConfig::default();

        if let Some(path) = lookup(NOTES_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.notes_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ERROR_LOG_ENV).filter(|v| !v.trim().is_empty()) {
            config.error_log_path = PathBuf::from(path);
        }

        config
    }
}
