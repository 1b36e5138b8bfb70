//! ExamSearch core — incremental search engine for exam lookups.
//!
//! The engine is headless: it owns the debounce timing, suggestion
//! fetching, staleness reconciliation, selection cursor, and the
//! interaction state machine, and hands renderers an immutable
//! [`SearchView`] snapshot. Frontends (the CLI `live` mode, or anything
//! else) feed it text edits and key events and draw whatever the
//! snapshot says.

pub mod controller;
pub mod cursor;
pub mod debounce;
pub mod lookup;
mod state;
pub mod suggest;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use controller::{KeyInput, SearchController};
pub use lookup::{ExamLookup, HttpExamClient, LookupError};
pub use types::{Exam, SearchConfig, SearchPhase, SearchView};
