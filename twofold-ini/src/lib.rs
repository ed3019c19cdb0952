//! INI-style file parsing for `twofold-ini`.
//!
//! Two producers read the same format and report the outcome through the two
//! containers in `twofold-core`:
//!
//! - [`parse_file`] returns a [`Maybe`]: a [`ParseResult`] or a failure record.
//! - [`parse_file_either`] returns an [`Either`] with a coded [`ParseFault`].
//!
//! A file is a list of lines; a section is any line whose first character is `[`.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use twofold_core::{Either, Maybe};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A successfully parsed file. Holds only valid data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Modification time of the file, or of the read when the platform has none.
    pub file_last_modified: DateTime<Utc>,
    /// Every line of the file, without line terminators.
    pub lines: Vec<String>,
    /// Number of lines starting with `[`.
    pub section_count: usize,
}

impl ParseResult {
    /// Placeholder for callers that want a value even when parsing failed.
    pub fn empty() -> Self {
        Self {
            file_last_modified: Utc::now(),
            lines: Vec::new(),
            section_count: 0,
        }
    }
}

/// Why [`parse_file_either`] produced no [`ParseResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultCode {
    /// The path does not exist.
    NotFound,
    /// The path exists but could not be read as text.
    Unreadable,
}

impl FaultCode {
    /// Numeric code printed by the CLI.
    pub fn code(self) -> u8 {
        match self {
            FaultCode::NotFound => 0,
            FaultCode::Unreadable => 1,
        }
    }
}

/// Right side of [`parse_file_either`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFault {
    pub message: String,
    pub code: FaultCode,
}

impl fmt::Display for ParseFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

/// Message reported for a path that does not exist.
pub const FILE_NOT_FOUND: &str = "File not found";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Splits `text` into lines and counts sections.
pub fn parse_text(text: &str, modified: DateTime<Utc>) -> ParseResult {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let section_count = lines.iter().filter(|l| l.starts_with('[')).count();
    ParseResult {
        file_last_modified: modified,
        lines,
        section_count,
    }
}

/// Parses the file at `path`.
///
/// A missing path yields a failure with message [`FILE_NOT_FOUND`] and no
/// cause. Any read fault (permissions, a directory, invalid UTF-8) yields a
/// failure carrying the `io::Error` as its cause.
pub fn parse_file(path: &Path) -> Maybe<ParseResult> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "file not found");
        return Maybe::failure(FILE_NOT_FOUND);
    }
    tracing::debug!(path = %path.display(), "parsing file");
    Maybe::try_evaluate(|| read(path))
}

/// Same as [`parse_file`], with a coded fault on the right instead of a
/// failure record.
pub fn parse_file_either(path: &Path) -> Either<ParseResult, ParseFault> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "file not found");
        return Either::of(ParseFault {
            message: FILE_NOT_FOUND.to_string(),
            code: FaultCode::NotFound,
        });
    }
    match read(path) {
        Ok(parsed) => Either::of(parsed),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "read failed");
            Either::of(ParseFault {
                message: err.to_string(),
                code: FaultCode::Unreadable,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

fn read(path: &Path) -> Result<ParseResult, io::Error> {
    let text = fs::read_to_string(path)?;
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());
    Ok(parse_text(&text, modified))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_lines_starting_with_bracket() {
        let parsed = parse_text("[a]\nk=v\n [not]\n[b]\n", Utc::now());
        assert_eq!(parsed.lines.len(), 4);
        assert_eq!(parsed.section_count, 2);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let parsed = parse_text("[a]\r\nk=v\r\n", Utc::now());
        assert_eq!(parsed.lines, vec!["[a]".to_string(), "k=v".to_string()]);
    }

    #[test]
    fn fault_display_includes_code() {
        let fault = ParseFault { message: "nope".into(), code: FaultCode::Unreadable };
        assert_eq!(fault.to_string(), "[1] nope");
    }
}
