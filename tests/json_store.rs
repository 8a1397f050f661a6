use std::fs;
use tempfile::TempDir;
use tracklist::error::TrackListError;
use tracklist::model::{Record, Section};
use tracklist::store::json::{JsonStore, JSON_SECTION};
use tracklist::store::SectionStore;

fn setup() -> (TempDir, JsonStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("tracklist.json"));
    (dir, store)
}

fn items_section() -> Section {
    Section::new(JSON_SECTION).unwrap()
}

fn records(texts: &[&str]) -> Vec<Record> {
    texts.iter().map(|text| Record::new(text).unwrap()).collect()
}

#[test]
fn initialize_creates_an_empty_array() {
    let (dir, mut store) = setup();
    store.initialize().unwrap();

    let content = fs::read_to_string(dir.path().join("tracklist.json")).unwrap();
    assert_eq!(content, "[]\n");
    assert!(store.load(&items_section()).unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, mut store) = setup();
    store.initialize().unwrap();

    let saved = records(&["Buy milk", "Walk dog"]);
    store.save(&items_section(), &saved).unwrap();

    assert_eq!(store.load(&items_section()).unwrap(), saved);
}

#[test]
fn file_is_pretty_printed_with_four_space_indent() {
    let (dir, mut store) = setup();
    store.initialize().unwrap();

    store
        .save(&items_section(), &records(&["Buy milk", "Walk dog"]))
        .unwrap();

    let content = fs::read_to_string(dir.path().join("tracklist.json")).unwrap();
    assert_eq!(content, "[\n    \"Buy milk\",\n    \"Walk dog\"\n]\n");
}

#[test]
fn empty_list_saves_as_an_empty_array() {
    let (dir, mut store) = setup();
    store.initialize().unwrap();

    store.save(&items_section(), &[]).unwrap();

    let content = fs::read_to_string(dir.path().join("tracklist.json")).unwrap();
    assert_eq!(content, "[]\n");
}

#[test]
fn missing_file_loads_empty() {
    let (_dir, store) = setup();
    assert!(store.load(&items_section()).unwrap().is_empty());
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let (dir, store) = setup();
    fs::write(dir.path().join("tracklist.json"), "not json at all").unwrap();

    assert!(matches!(
        store.load(&items_section()),
        Err(TrackListError::Serialization(_))
    ));
}

#[test]
fn unknown_section_loads_empty_and_rejects_saves() {
    let (_dir, mut store) = setup();
    store.initialize().unwrap();

    let other = Section::new("TASKS").unwrap();
    assert!(store.load(&other).unwrap().is_empty());
    assert!(matches!(
        store.save(&other, &records(&["a"])),
        Err(TrackListError::SectionNotFound(_))
    ));
}
