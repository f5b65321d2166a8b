//! Notes Manager: a single-user, file-backed note-taking tool.
//!
//! Notes are appended to a plain text file, one `[yyyy-MM-dd HH:mm:ss] content`
//! line per note. The store can be listed, searched case-insensitively and
//! cleared as a whole. I/O failures are written to a separate error log.

pub mod config;
pub mod error;
pub mod error_log;
pub mod note;
pub mod search;
pub mod shell;
pub mod storage;

use std::io::Write;
use log::info;

pub use config::NotesConfig;
pub use error::{NotesError, NotesResult};
pub use error_log::ErrorLogger;
pub use note::Note;
pub use search::Keyword;
pub use shell::{MenuChoice, Shell};
pub use storage::{NoteStore, StoreContents};

/// Note store, search and error log wired to one configuration.
#[derive(Debug, Clone)]
pub struct NotesManager {
    config: NotesConfig,
    store: NoteStore,
    error_log: ErrorLogger,
}

impl NotesManager {
    /// Create a manager using the default file locations
    pub fn new() -> Self {
        Self::with_config(NotesConfig::default())
    }

    pub fn with_config(config: NotesConfig) -> Self {
        info!(
            "Notes manager using {} (errors to {})",
            config.notes_path.display(),
            config.error_log_path.display()
        );

        NotesManager {
            store: NoteStore::new(config.notes_path.clone()),
            error_log: ErrorLogger::new(config.error_log_path.clone()),
            config,
        }
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn add_note(&self, content: &str) -> NotesResult<Note> {
        self.store.append(content)
    }

    pub fn load_notes(&self) -> NotesResult<StoreContents> {
        self.store.load()
    }

    /// Raw note lines in creation order.
    pub fn read_all(&self) -> NotesResult<Vec<String>> {
        self.store.read_all()
    }

    /// Parsed notes, skipping lines that are not well-formed note lines.
    pub fn notes(&self) -> NotesResult<Vec<Note>> {
        Ok(self
            .store
            .read_all()?
            .iter()
            .filter_map(|line| Note::parse_line(line))
            .collect())
    }

    /// Matching lines, or `None` when there is no note file yet.
    ///
    /// The keyword is validated before the store is touched.
    pub fn search_notes(&self, keyword: &str) -> NotesResult<Option<Vec<String>>> {
        let keyword = Keyword::parse(keyword)?;

        match self.store.load()? {
            StoreContents::Missing => Ok(None),
            StoreContents::Lines(lines) => Ok(Some(search::filter(&lines, &keyword))),
        }
    }

    /// Remove every note. Does not ask for confirmation.
    pub fn clear_notes(&self) -> NotesResult<()> {
        self.store.truncate()
    }

    /// Record `err` in the error log; failures to do so go to `stderr` only.
    pub fn log_error(&self, err: &NotesError, stderr: &mut dyn Write) {
        self.error_log.log(err, stderr);
    }
}

impl Default for NotesManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize diagnostic logging. `RUST_LOG` overrides the default `warn` level.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
}

#[cfg(not(feature = "logging"))]
pub fn init_logging() {}
