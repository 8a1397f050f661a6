//! # Storage Layer
//!
//! This module defines the storage abstraction for tracklist. The
//! [`SectionStore`] trait is a durable mapping from section name to an
//! ordered list of records, backed by a single shared file.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemoryStore` (no filesystem needed)
//! - Let the same session and shell logic run over either on-disk format
//! - Keep list mutations **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`text::TextStore`]: the sectioned plain-text format (`records.txt`)
//!   - one `[NAME]` header line per section, body lines beneath it,
//!     a blank line separating blocks
//!   - saving a section rewrites only that section's body; every other
//!     line in the file is preserved verbatim
//!
//! - [`json::JsonStore`]: a single JSON array of strings
//!   (`tracklist.json`), pretty-printed with 4-space indentation, serving
//!   one implicit section
//!
//! - [`memory::MemoryStore`]: in-memory storage for testing, no
//!   persistence
//!
//! ## Save Semantics
//!
//! Every save is a full-file rewrite through a temp file in the same
//! directory followed by a rename, so an interrupted save leaves the
//! previous file version intact rather than a half-written one.

use crate::error::{Result, TrackListError};
use crate::model::{Record, Section};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub mod json;
pub mod memory;
pub mod text;

/// Abstract interface for section storage.
///
/// Implementations must keep sections independent: saving one section
/// never alters the stored content of another.
pub trait SectionStore {
    /// Create the backing file with every known section present but
    /// empty, in enumeration order. A pre-existing file is left
    /// untouched.
    fn initialize(&mut self) -> Result<()>;

    /// Load one section's records, top to bottom. Unknown sections and
    /// a missing backing file load as an empty list.
    fn load(&self, section: &Section) -> Result<Vec<Record>>;

    /// Replace one section's body in full, preserving all other
    /// sections.
    fn save(&mut self, section: &Section, records: &[Record]) -> Result<()>;

    /// Known sections, in enumeration order.
    fn sections(&self) -> &[Section];

    /// The backing file path, for file-based stores.
    fn path(&self) -> Option<&Path>;
}

/// Atomically replace `path` with `contents`: write to a temp file in the
/// same directory, then rename over the target. Creates the parent
/// directory if needed.
pub(crate) fn write_atomic(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        TrackListError::Store(format!("store file has no parent directory: {}", path.display()))
    })?;
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir).map_err(TrackListError::StorageWrite)?;
    }

    let tmp = dir.join(format!(".records-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp, contents).map_err(TrackListError::StorageWrite)?;
    fs::rename(&tmp, path).map_err(TrackListError::StorageWrite)?;
    Ok(())
}
