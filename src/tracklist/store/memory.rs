use super::SectionStore;
use crate::error::{Result, TrackListError};
use crate::model::{Record, Section};
use std::collections::HashMap;
use std::path::Path;

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct MemoryStore {
    sections: Vec<Section>,
    data: HashMap<Section, Vec<Record>>,
}

impl MemoryStore {
    /// A store with the given sections already present and empty, as a
    /// freshly initialized file store would be.
    pub fn new(sections: Vec<Section>) -> Self {
        let data = sections
            .iter()
            .map(|section| (section.clone(), Vec::new()))
            .collect();
        Self { sections, data }
    }
}

impl SectionStore for MemoryStore {
    fn initialize(&mut self) -> Result<()> {
        // Sections are present from construction.
        Ok(())
    }

    fn load(&self, section: &Section) -> Result<Vec<Record>> {
        Ok(self.data.get(section).cloned().unwrap_or_default())
    }

    fn save(&mut self, section: &Section, records: &[Record]) -> Result<()> {
        match self.data.get_mut(section) {
            Some(slot) => {
                *slot = records.to_vec();
                Ok(())
            }
            None => Err(TrackListError::SectionNotFound(
                section.as_str().to_string(),
            )),
        }
    }

    fn sections(&self) -> &[Section] {
        &self.sections
    }

    fn path(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A store with the default TASKS / HABITS / EXPENSES sections.
        pub fn new() -> Self {
            let sections = ["TASKS", "HABITS", "EXPENSES"]
                .iter()
                .map(|name| Section::from_trusted(name))
                .collect();
            Self {
                store: MemoryStore::new(sections),
            }
        }

        pub fn section(&self, name: &str) -> Section {
            Section::from_trusted(name)
        }

        pub fn with_records(mut self, name: &str, texts: &[&str]) -> Self {
            let section = Section::from_trusted(name);
            let records: Vec<Record> = texts.iter().map(|t| Record::from_stored(t)).collect();
            self.store.save(&section, &records).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn known_sections_start_empty() {
        let fixture = StoreFixture::new();
        let tasks = fixture.section("TASKS");
        assert!(fixture.store.load(&tasks).unwrap().is_empty());
    }

    #[test]
    fn unknown_section_loads_empty() {
        let fixture = StoreFixture::new();
        let other = fixture.section("OTHER");
        assert!(fixture.store.load(&other).unwrap().is_empty());
    }

    #[test]
    fn save_to_unknown_section_is_an_error() {
        let mut fixture = StoreFixture::new();
        let other = fixture.section("OTHER");
        let records = vec![Record::from_stored("x")];
        assert!(matches!(
            fixture.store.save(&other, &records),
            Err(TrackListError::SectionNotFound(_))
        ));
    }

    #[test]
    fn sections_are_isolated() {
        let fixture = StoreFixture::new().with_records("TASKS", &["a", "b"]);
        let habits = fixture.section("HABITS");
        assert!(fixture.store.load(&habits).unwrap().is_empty());
    }
}
