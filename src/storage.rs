use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use log::{debug, warn};
use crate::error::{NotesError, NotesResult};
use crate::note::{decode_line, Note};

/// What a read of the store found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreContents {
    /// The note file has never been created.
    Missing,
    /// Every line of the note file, in file order. May be empty.
    Lines(Vec<String>),
}

impl StoreContents {
    pub fn into_lines(self) -> Vec<String> {
        match self {
            StoreContents::Missing => Vec::new(),
            StoreContents::Lines(lines) => lines,
        }
    }
}

/// Append-only, line-per-note text file.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        NoteStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the note file exists yet. It is created lazily by the first append.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one timestamped note. Blank content is rejected without touching the file.
    pub fn append(&self, content: &str) -> NotesResult<Note> {
        if content.trim().is_empty() {
            return Err(NotesError::EmptyInput { what: "Note" });
        }

        let note = Note::now(content);
        if note.spans_lines() {
            // Written as-is; it will read back as more than one line.
            warn!("note content contains a line break and will be split on read-back");
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| NotesError::io("open", &self.path, e))?;

        writeln!(file, "{}", note.to_line()).map_err(|e| NotesError::io("write to", &self.path, e))?;
        file.flush().map_err(|e| NotesError::io("flush", &self.path, e))?;
        file.sync_data().map_err(|e| NotesError::io("sync", &self.path, e))?;

        debug!("Note appended to {}", self.path.display());
        Ok(note)
    }

    /// Read the store, keeping "no file" apart from "empty file".
    pub fn load(&self) -> NotesResult<StoreContents> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No note file at {}", self.path.display());
                return Ok(StoreContents::Missing);
            }
            Err(e) => return Err(NotesError::io("open", &self.path, e)),
        };

        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| NotesError::io("read", &self.path, e))?;
            if read == 0 {
                break;
            }
            // Lines written by other tools may not be UTF-8
            lines.push(decode_line(&buf));
        }

        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(StoreContents::Lines(lines))
    }

    /// Every line in file order; empty when the file does not exist.
    pub fn read_all(&self) -> NotesResult<Vec<String>> {
        Ok(self.load()?.into_lines())
    }

    /// Discard every note. Callers are responsible for confirming with the user first.
    pub fn truncate(&self) -> NotesResult<()> {
        let file = File::create(&self.path).map_err(|e| NotesError::io("truncate", &self.path, e))?;
        file.sync_all().map_err(|e| NotesError::io("sync", &self.path, e))?;

        debug!("Note file {} truncated", self.path.display());
        Ok(())
    }
}
