use super::{write_atomic, SectionStore};
use crate::error::{Result, TrackListError};
use crate::model::{Record, Section};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Production store for the sectioned plain-text format.
///
/// The file holds one block per section: a `[NAME]` header line, the
/// section's records one per line, and a blank separator line. Blank
/// lines are not significant on load; only header lines change the
/// current-section context.
pub struct TextStore {
    path: PathBuf,
    sections: Vec<Section>,
}

impl TextStore {
    pub fn new(path: PathBuf, sections: Vec<Section>) -> Self {
        Self { path, sections }
    }

    fn read_to_string(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(TrackListError::StorageRead)
    }
}

impl SectionStore for TextStore {
    fn initialize(&mut self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        let mut content = String::new();
        for section in &self.sections {
            content.push_str(&section.header());
            content.push_str("\n\n");
        }
        write_atomic(&self.path, &content)
    }

    fn load(&self, section: &Section) -> Result<Vec<Record>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(TrackListError::StorageRead(e)),
        };

        let mut records = Vec::new();
        let mut in_target = false;
        for line in content.lines() {
            if let Some(name) = Section::parse_header(line) {
                in_target = name == section.as_str();
                continue;
            }
            if in_target && !line.trim().is_empty() {
                records.push(Record::from_stored(line));
            }
        }
        Ok(records)
    }

    fn save(&mut self, section: &Section, records: &[Record]) -> Result<()> {
        let content = self.read_to_string()?;

        // Re-partition the file by header boundaries: the target section's
        // old body is dropped and its new body inserted right after the
        // header; every other line passes through verbatim.
        let mut out = String::new();
        let mut found = false;
        let mut skipping = false;
        for line in content.lines() {
            match Section::parse_header(line) {
                Some(name) if name == section.as_str() => {
                    found = true;
                    skipping = true;
                    out.push_str(line);
                    out.push('\n');
                    for record in records {
                        out.push_str(record.as_str());
                        out.push('\n');
                    }
                    out.push('\n');
                }
                Some(_) => {
                    skipping = false;
                    out.push_str(line);
                    out.push('\n');
                }
                None => {
                    if !skipping {
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
        }

        if !found {
            return Err(TrackListError::SectionNotFound(
                section.as_str().to_string(),
            ));
        }
        write_atomic(&self.path, &out)
    }

    fn sections(&self) -> &[Section] {
        &self.sections
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
