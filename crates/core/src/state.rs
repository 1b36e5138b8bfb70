//! Mutable session state shared between the controller and the
//! suggestion fetcher. Crate-internal; renderers only ever see the
//! [`SearchView`](crate::types::SearchView) snapshot built from this.

use crate::cursor::SelectionCursor;
use crate::types::{Exam, SearchPhase, SearchView};

#[derive(Debug)]
pub(crate) struct SessionState {
    pub input: String,
    pub phase: SearchPhase,
    pub suggestions: Vec<String>,
    pub cursor: SelectionCursor,
    pub suggestions_visible: bool,
    pub suggest_loading: bool,
    /// Highest suggestion-fetch sequence number handed out so far.
    /// A response commits only if its own number still equals this.
    pub last_issued: u64,
    pub results: Vec<Exam>,
    pub error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            phase: SearchPhase::Idle,
            suggestions: Vec::new(),
            cursor: SelectionCursor::new(),
            suggestions_visible: false,
            suggest_loading: false,
            last_issued: 0,
            results: Vec::new(),
            error: None,
        }
    }

    /// Allocate the next fetch sequence number.
    pub fn next_seq(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    /// Make every in-flight suggestion fetch stale. The discarded
    /// response would have been the one to clear the loading flag, so
    /// clear it here.
    pub fn invalidate_suggestions(&mut self) {
        self.last_issued += 1;
        self.suggest_loading = false;
    }

    /// Commit a fresh suggestion list from a fetch that passed the
    /// staleness check.
    pub fn commit_suggestions(&mut self, names: Vec<String>) {
        self.suggestions = names;
        self.cursor.reset();
        self.suggest_loading = false;
        self.suggestions_visible = !self.suggestions.is_empty();
        if self.suggestions_visible && self.phase == SearchPhase::Typing {
            self.phase = SearchPhase::SuggestionsOpen;
        } else if !self.suggestions_visible && self.phase == SearchPhase::SuggestionsOpen {
            self.phase = SearchPhase::Typing;
        }
    }

    /// Drop the suggestion list entirely.
    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_visible = false;
        self.suggest_loading = false;
        self.cursor.reset();
        if self.phase == SearchPhase::SuggestionsOpen {
            self.phase = SearchPhase::Typing;
        }
    }

    /// Hide the popup but keep the fetched list (Escape, click-away).
    pub fn close_suggestions(&mut self) {
        self.suggestions_visible = false;
        self.cursor.reset();
        if self.phase == SearchPhase::SuggestionsOpen {
            self.phase = SearchPhase::Typing;
        }
    }

    pub fn snapshot(&self) -> SearchView {
        SearchView {
            input: self.input.clone(),
            phase: self.phase,
            suggestions: self.suggestions.clone(),
            selected: self.cursor.index(),
            suggestions_visible: self.suggestions_visible,
            suggest_loading: self.suggest_loading,
            results: self.results.clone(),
            error: self.error.clone(),
        }
    }
}
