use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::warn;
use crate::note::timestamp_now;

const SEPARATOR_WIDTH: usize = 50;

/// Separator line closing each error record.
pub fn separator() -> String {
    "─".repeat(SEPARATOR_WIDTH)
}

/// Appends failure records to a plain-text log. Never read back by the program.
#[derive(Debug, Clone)]
pub struct ErrorLogger {
    path: PathBuf,
}

impl ErrorLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ErrorLogger { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort: a failed log write goes to `stderr` and is otherwise dropped.
    pub fn log(&self, err: &(dyn Error + 'static), stderr: &mut dyn Write) {
        if let Err(log_err) = self.write_record(err) {
            warn!("error log {} unavailable: {}", self.path.display(), log_err);
            // Terminal may be gone too; nothing left to report to.
            let _ = writeln!(stderr, "Failed to write to error log: {}", log_err);
        }
    }

    /// Append one record for `err`.
    pub fn write_record(&self, err: &(dyn Error + 'static)) -> io::Result<()> {
        let record = format_record(&timestamp_now(), err, &Backtrace::force_capture());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())?;
        file.flush()
    }
}

fn format_record(timestamp: &str, err: &(dyn Error + 'static), backtrace: &Backtrace) -> String {
    let mut record = format!("[{}] Exception: {}\n", timestamp, err);
    record.push_str("Stack trace:\n");
    record.push_str(&format!("{:?}\n", err));

    let mut source = err.source();
    while let Some(cause) = source {
        record.push_str(&format!("caused by: {}\n", cause));
        source = cause.source();
    }

    if backtrace.status() == BacktraceStatus::Captured {
        record.push_str(&format!("{}\n", backtrace));
    }

    record.push_str(&separator());
    record.push('\n');
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use tempfile::TempDir;

    fn sample_error() -> NotesError {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        NotesError::io("write to", "notes.txt", source)
    }

    #[test]
    fn test_record_layout() {
        let err = sample_error();
        let record = format_record("2024-03-09 07:05:01", &err, &Backtrace::disabled());
        let lines: Vec<&str> = record.lines().collect();

        assert_eq!(
            lines[0],
            "[2024-03-09 07:05:01] Exception: failed to write to `notes.txt`: permission denied"
        );
        assert_eq!(lines[1], "Stack trace:");
        assert!(record.contains("caused by: permission denied"));
        assert_eq!(*lines.last().unwrap(), separator());
        assert_eq!(separator().chars().count(), 50);
    }

    #[test]
    fn test_record_includes_backtrace_frames() {
        let err = sample_error();
        let record = format_record("2024-03-09 07:05:01", &err, &Backtrace::force_capture());
        let lines: Vec<&str> = record.lines().collect();

        // Header, "Stack trace:", Debug line, one cause, then frames before the separator
        assert!(lines.len() > 6, "expected backtrace frames in:\n{record}");
        assert_eq!(*lines.last().unwrap(), separator());
    }

    #[test]
    fn test_written_record_has_backtrace() {
        let dir = TempDir::new().unwrap();
        let logger = ErrorLogger::new(dir.path().join("error_log.txt"));

        logger.write_record(&sample_error()).unwrap();

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        let frames = contents
            .lines()
            .skip_while(|line| !line.starts_with("caused by:"))
            .skip(1)
            .take_while(|line| *line != separator())
            .count();
        assert!(frames > 0, "no backtrace in:\n{contents}");
    }

    #[test]
    fn test_records_are_appended() {
        let dir = TempDir::new().unwrap();
        let logger = ErrorLogger::new(dir.path().join("error_log.txt"));
        let mut stderr = Vec::new();

        logger.log(&sample_error(), &mut stderr);
        logger.log(&sample_error(), &mut stderr);

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(contents.matches("Exception:").count(), 2);
        assert_eq!(contents.matches(&separator()).count(), 2);
        assert!(stderr.is_empty());
    }

    #[test]
    fn test_log_failure_is_reported_not_propagated() {
        let dir = TempDir::new().unwrap();
        // The log path is a directory, so opening it for append fails
        let logger = ErrorLogger::new(dir.path());
        let mut stderr = Vec::new();

        logger.log(&sample_error(), &mut stderr);

        let reported = String::from_utf8(stderr).unwrap();
        assert!(reported.starts_with("Failed to write to error log:"));
    }
}
