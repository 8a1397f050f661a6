use super::{write_atomic, SectionStore};
use crate::error::{Result, TrackListError};
use crate::model::{Record, Section};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the single implicit section served by the JSON format.
pub const JSON_SECTION: &str = "ITEMS";

/// Store for the single-list JSON format: one file holding a JSON array
/// of strings, pretty-printed with 4-space indentation.
///
/// The format has no named sections, so the store serves exactly one,
/// [`JSON_SECTION`]. Loading any other section yields an empty list and
/// saving to one is an error.
pub struct JsonStore {
    path: PathBuf,
    sections: Vec<Section>,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            sections: vec![Section::from_trusted(JSON_SECTION)],
        }
    }

    fn render(records: &[Record]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl SectionStore for JsonStore {
    fn initialize(&mut self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        write_atomic(&self.path, b"[]\n")
    }

    fn load(&self, section: &Section) -> Result<Vec<Record>> {
        if section.as_str() != JSON_SECTION {
            return Ok(Vec::new());
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TrackListError::StorageRead(e)),
        };

        let records: Vec<Record> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn save(&mut self, section: &Section, records: &[Record]) -> Result<()> {
        if section.as_str() != JSON_SECTION {
            return Err(TrackListError::SectionNotFound(
                section.as_str().to_string(),
            ));
        }
        write_atomic(&self.path, Self::render(records)?)
    }

    fn sections(&self) -> &[Section] {
        &self.sections
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
