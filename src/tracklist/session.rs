//! The in-memory working copy of one section's records.
//!
//! A session is single-owner and single-threaded. Operations validate
//! before mutating, so a rejected call leaves the session exactly as it
//! was, and every successful mutation is flushed through the store in
//! full. Indices are 1-based as presented to the user.

use crate::error::{Result, TrackListError};
use crate::model::{Record, Section};
use crate::store::SectionStore;

pub struct ListSession {
    section: Section,
    records: Vec<Record>,
}

/// Old and new text of an updated record, for confirmation messaging.
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    pub old: Record,
    pub new: Record,
}

impl ListSession {
    /// Load a section's records in full.
    pub fn load<S: SectionStore>(store: &S, section: Section) -> Result<Self> {
        let records = store.load(&section)?;
        Ok(Self { section, records })
    }

    /// A session with no records. Callers recovering from an unreadable
    /// store proceed with this and surface a warning.
    pub fn empty(section: Section) -> Self {
        Self {
            section,
            records: Vec::new(),
        }
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the section.
    ///
    /// On a storage failure the record stays in memory; it becomes
    /// durable on the next successful save.
    pub fn add<S: SectionStore>(&mut self, store: &mut S, text: &str) -> Result<Record> {
        let record = Record::new(text)?;
        self.records.push(record.clone());
        store.save(&self.section, &self.records)?;
        Ok(record)
    }

    /// Remove the record at a 1-based index, returning it.
    pub fn remove<S: SectionStore>(&mut self, store: &mut S, index: usize) -> Result<Record> {
        let slot = self.check_index(index)?;
        let removed = self.records.remove(slot);
        store.save(&self.section, &self.records)?;
        Ok(removed)
    }

    /// Replace the record at a 1-based index, returning the old and new
    /// text.
    pub fn update<S: SectionStore>(
        &mut self,
        store: &mut S,
        index: usize,
        text: &str,
    ) -> Result<RecordUpdate> {
        let slot = self.check_index(index)?;
        let new = Record::new(text)?;
        let old = std::mem::replace(&mut self.records[slot], new.clone());
        store.save(&self.section, &self.records)?;
        Ok(RecordUpdate { old, new })
    }

    fn check_index(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.records.len() {
            return Err(TrackListError::OutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn texts(session: &ListSession) -> Vec<&str> {
        session.records().iter().map(Record::as_str).collect()
    }

    #[test]
    fn add_view_remove_update_scenario() {
        let mut fixture = StoreFixture::new();
        let tasks = fixture.section("TASKS");
        let mut session = ListSession::load(&fixture.store, tasks).unwrap();

        session.add(&mut fixture.store, "Buy milk").unwrap();
        session.add(&mut fixture.store, "Walk dog").unwrap();
        assert_eq!(texts(&session), ["Buy milk", "Walk dog"]);

        let removed = session.remove(&mut fixture.store, 1).unwrap();
        assert_eq!(removed.as_str(), "Buy milk");
        assert_eq!(texts(&session), ["Walk dog"]);

        let update = session.update(&mut fixture.store, 1, "Walk cat").unwrap();
        assert_eq!(update.old.as_str(), "Walk dog");
        assert_eq!(update.new.as_str(), "Walk cat");
        assert_eq!(texts(&session), ["Walk cat"]);
    }

    #[test]
    fn mutations_are_flushed_to_the_store() {
        let mut fixture = StoreFixture::new();
        let tasks = fixture.section("TASKS");
        let mut session = ListSession::load(&fixture.store, tasks.clone()).unwrap();

        session.add(&mut fixture.store, "Buy milk").unwrap();
        session.add(&mut fixture.store, "Walk dog").unwrap();
        session.remove(&mut fixture.store, 2).unwrap();

        let stored = fixture.store.load(&tasks).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].as_str(), "Buy milk");
    }

    #[test]
    fn blank_add_is_rejected_and_leaves_session_unmodified() {
        let mut fixture = StoreFixture::new().with_records("TASKS", &["a"]);
        let tasks = fixture.section("TASKS");
        let mut session = ListSession::load(&fixture.store, tasks).unwrap();

        assert!(matches!(
            session.add(&mut fixture.store, ""),
            Err(TrackListError::EmptyInput)
        ));
        assert!(matches!(
            session.add(&mut fixture.store, "   "),
            Err(TrackListError::EmptyInput)
        ));
        assert_eq!(texts(&session), ["a"]);
    }

    #[test]
    fn out_of_range_remove_is_rejected_and_leaves_session_unmodified() {
        let mut fixture = StoreFixture::new().with_records("TASKS", &["a", "b"]);
        let tasks = fixture.section("TASKS");
        let mut session = ListSession::load(&fixture.store, tasks).unwrap();

        assert!(matches!(
            session.remove(&mut fixture.store, 0),
            Err(TrackListError::OutOfRange { index: 0, len: 2 })
        ));
        assert!(matches!(
            session.remove(&mut fixture.store, 3),
            Err(TrackListError::OutOfRange { index: 3, len: 2 })
        ));
        assert_eq!(texts(&session), ["a", "b"]);
    }

    #[test]
    fn out_of_range_update_is_rejected() {
        let mut fixture = StoreFixture::new().with_records("TASKS", &["a"]);
        let tasks = fixture.section("TASKS");
        let mut session = ListSession::load(&fixture.store, tasks).unwrap();

        assert!(matches!(
            session.update(&mut fixture.store, 2, "x"),
            Err(TrackListError::OutOfRange { index: 2, len: 1 })
        ));
        assert_eq!(texts(&session), ["a"]);
    }

    #[test]
    fn blank_update_is_rejected() {
        let mut fixture = StoreFixture::new().with_records("TASKS", &["a"]);
        let tasks = fixture.section("TASKS");
        let mut session = ListSession::load(&fixture.store, tasks).unwrap();

        assert!(matches!(
            session.update(&mut fixture.store, 1, "  "),
            Err(TrackListError::EmptyInput)
        ));
        assert_eq!(texts(&session), ["a"]);
    }

    #[test]
    fn update_replaces_only_the_targeted_entry() {
        let mut fixture = StoreFixture::new().with_records("TASKS", &["a", "b", "c"]);
        let tasks = fixture.section("TASKS");
        let mut session = ListSession::load(&fixture.store, tasks).unwrap();

        session.update(&mut fixture.store, 2, "B").unwrap();
        assert_eq!(texts(&session), ["a", "B", "c"]);
    }

    #[test]
    fn failed_save_keeps_the_change_in_memory() {
        // A session on a section the store does not know: save fails,
        // but the mutation stays applied so a retry can persist it.
        let mut fixture = StoreFixture::new();
        let other = fixture.section("OTHER");
        let mut session = ListSession::load(&fixture.store, other).unwrap();

        assert!(matches!(
            session.add(&mut fixture.store, "stranded"),
            Err(TrackListError::SectionNotFound(_))
        ));
        assert_eq!(texts(&session), ["stranded"]);
    }
}
