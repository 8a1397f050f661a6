//! # TrackList Architecture
//!
//! TrackList is a **UI-agnostic list-management library**. The binary is a
//! thin client; everything it does goes through the library, and the same
//! core could back any other front end.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (shell.rs driven by main.rs)                     │
//! │  - Parses arguments, runs the menu loop, formats output     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - One section's records in memory                          │
//! │  - Bounds-checked mutations, flushed to storage after each  │
//! │  - Returns structured Result types, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SectionStore trait                              │
//! │  - TextStore / JsonStore (production), MemoryStore (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code takes regular Rust arguments, returns
//! regular Rust types, and never touches stdout/stderr or calls
//! `std::process::exit`. The interactive shell itself is generic over
//! `BufRead`/`Write`, so even the menu loop runs under test against byte
//! buffers.
//!
//! ## Error Policy
//!
//! Expected user mistakes (blank input, out-of-range indices) are error
//! *kinds* on [`error::TrackListError`], not panics or control-flow
//! exceptions; the shell branches on the kind to pick a message and
//! re-prompts. Storage failures never corrupt the in-memory session: a
//! failed save leaves the change applied but not durable until retried.
//!
//! ## Module Overview
//!
//! - [`session`]: the in-memory working copy of one section
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types ([`model::Section`], [`model::Record`])
//! - [`config`]: configuration management
//! - [`shell`]: the interactive menu loop
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod shell;
pub mod store;
