use crate::error::{Result, TrackListError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, ordered collection of records within the store file.
///
/// On disk a section is announced by a header line of the form `[NAME]`.
/// Names are trimmed at construction and may not contain brackets or
/// newlines, so a name can always round-trip through its header line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(String);

impl Section {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackListError::EmptyInput);
        }
        if name.contains(['[', ']', '\n', '\r']) {
            return Err(TrackListError::Store(format!(
                "invalid section name: {:?}",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Wrap a name that is known to be valid (compile-time constants).
    pub(crate) fn from_trusted(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The header line announcing this section on disk.
    pub fn header(&self) -> String {
        format!("[{}]", self.0)
    }

    /// Parse a line as a section header, returning the inner name.
    ///
    /// A header is the entire line, trimmed, wrapped in `[` and `]`.
    /// Any bracketed line switches the current-section context during a
    /// scan, whether or not the name is a known section.
    pub fn parse_header(line: &str) -> Option<&str> {
        line.trim().strip_prefix('[')?.strip_suffix(']')
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Section {
    type Err = TrackListError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// One list entry: a single line of user text.
///
/// Serializes transparently as a plain string, so the JSON store file is
/// an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(String);

impl Record {
    /// Validate and trim user text into a record.
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TrackListError::EmptyInput);
        }
        if text.contains(['\n', '\r']) {
            return Err(TrackListError::InvalidRecord(
                "records cannot span multiple lines".to_string(),
            ));
        }
        if Section::parse_header(text).is_some() {
            return Err(TrackListError::InvalidRecord(format!(
                "{:?} would be read back as a section header",
                text
            )));
        }
        Ok(Self(text.to_string()))
    }

    /// Wrap a body line read from the store file.
    ///
    /// Load-side lines have already passed the blank and header filters,
    /// so they are not re-validated.
    pub(crate) fn from_stored(line: &str) -> Self {
        Self(line.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_trimmed() {
        let record = Record::new("  Buy milk  ").unwrap();
        assert_eq!(record.as_str(), "Buy milk");
    }

    #[test]
    fn blank_record_is_rejected() {
        assert!(matches!(Record::new(""), Err(TrackListError::EmptyInput)));
        assert!(matches!(
            Record::new("   "),
            Err(TrackListError::EmptyInput)
        ));
    }

    #[test]
    fn multiline_record_is_rejected() {
        assert!(matches!(
            Record::new("one\ntwo"),
            Err(TrackListError::InvalidRecord(_))
        ));
    }

    #[test]
    fn header_shaped_record_is_rejected() {
        assert!(matches!(
            Record::new("[TASKS]"),
            Err(TrackListError::InvalidRecord(_))
        ));
    }

    #[test]
    fn brackets_inside_text_are_fine() {
        assert!(Record::new("call Bob [urgent]").is_ok());
    }

    #[test]
    fn section_name_is_trimmed() {
        let section = Section::new(" TASKS ").unwrap();
        assert_eq!(section.as_str(), "TASKS");
        assert_eq!(section.header(), "[TASKS]");
    }

    #[test]
    fn section_name_with_brackets_is_rejected() {
        assert!(Section::new("[TASKS]").is_err());
        assert!(Section::new("TA]SKS").is_err());
    }

    #[test]
    fn blank_section_name_is_rejected() {
        assert!(matches!(Section::new("  "), Err(TrackListError::EmptyInput)));
    }

    #[test]
    fn parse_header_recognizes_trimmed_lines() {
        assert_eq!(Section::parse_header("[TASKS]"), Some("TASKS"));
        assert_eq!(Section::parse_header("  [HABITS]  "), Some("HABITS"));
        assert_eq!(Section::parse_header("plain line"), None);
        assert_eq!(Section::parse_header("[unclosed"), None);
        assert_eq!(Section::parse_header(""), None);
    }
}
