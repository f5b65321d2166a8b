use std::fmt;
use std::sync::OnceLock;
use chrono::{Local, NaiveDateTime};
use regex::Regex;

/// On-disk timestamp layout, `yyyy-MM-dd HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time rendered with [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Decode one raw line, dropping its `\n` / `\r\n` terminator.
/// Bytes that are not valid UTF-8 become U+FFFD.
pub fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

fn line_regex() -> &'static Regex {
    static LINE_RE: OnceLock<Regex> = OnceLock::new();
    LINE_RE.get_or_init(|| {
        Regex::new(r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] (.*)$").expect("valid note line regex")
    })
}

/// One timestamped note, persisted as `[<timestamp>] <content>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub timestamp: NaiveDateTime,
    pub content: String,
}

impl Note {
    /// Stamp `content` with the current local time.
    pub fn now(content: impl Into<String>) -> Self {
        Note {
            timestamp: Local::now().naive_local(),
            content: content.into(),
        }
    }

    /// Render the store line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("[{}] {}", self.timestamp.format(TIMESTAMP_FORMAT), self.content)
    }

    /// Parse a store line back into a note. Returns `None` for malformed lines.
    pub fn parse_line(line: &str) -> Option<Note> {
        let caps = line_regex().captures(line)?;
        let timestamp = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT).ok()?;

        Some(Note {
            timestamp,
            content: caps[2].to_string(),
        })
    }

    /// Content that would not survive a write/read cycle as a single line.
    pub fn spans_lines(&self) -> bool {
        self.content.contains(['\n', '\r'])
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
