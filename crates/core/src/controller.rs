//! Interaction state machine for an exam search session.
//!
//! One controller owns the whole flow: text edits debounce into
//! suggestion fetches, arrow keys move the highlight, Enter either
//! commits a highlighted suggestion into the input or submits the
//! current text as a search. Suggestion failures degrade silently;
//! submission failures surface through `SearchView::error`. The two
//! channels never touch each other's state.

use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::debounce::DebounceScheduler;
use crate::lookup::ExamLookup;
use crate::state::SessionState;
use crate::suggest::SuggestionFetcher;
use crate::types::{SearchConfig, SearchPhase, SearchView};

/// Navigation and action keys the controller understands. Text edits
/// arrive separately through [`SearchController::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

#[derive(Clone)]
pub struct SearchController {
    state: Arc<Mutex<SessionState>>,
    fetcher: SuggestionFetcher,
    debounce: Arc<DebounceScheduler>,
    client: Arc<dyn ExamLookup>,
    config: SearchConfig,
}

impl SearchController {
    pub fn new(client: Arc<dyn ExamLookup>) -> Self {
        Self::with_config(client, SearchConfig::default())
    }

    pub fn with_config(client: Arc<dyn ExamLookup>, config: SearchConfig) -> Self {
        let state = Arc::new(Mutex::new(SessionState::new()));
        let fetcher = SuggestionFetcher::new(
            Arc::clone(&state),
            Arc::clone(&client),
            config.max_suggestions,
        );
        Self {
            state,
            fetcher,
            debounce: Arc::new(DebounceScheduler::new()),
            client,
            config,
        }
    }

    /// Current session snapshot for rendering.
    pub fn snapshot(&self) -> SearchView {
        self.state.lock().unwrap().snapshot()
    }

    /// Replace the input text with `text`, as typed so far.
    /// Ignored while a submitted search is in flight.
    pub fn handle_input(&self, text: &str) {
        {
            let mut st = self.state.lock().unwrap();
            if st.phase == SearchPhase::Searching {
                return;
            }
            st.input = text.to_string();
            st.cursor.reset();

            if text.trim().is_empty() {
                st.invalidate_suggestions();
                st.clear_suggestions();
                st.phase = SearchPhase::Idle;
                drop(st);
                self.debounce.cancel();
                return;
            }

            // Every edit re-enters Typing, even with the popup still
            // showing; the next commit reopens SuggestionsOpen.
            st.phase = SearchPhase::Typing;
        }

        let fetcher = self.fetcher.clone();
        let term = text.to_string();
        self.debounce.schedule(self.config.debounce, async move {
            fetcher.dispatch(&term);
        });
    }

    /// Handle a navigation/action key. Returns the submission task
    /// handle when the key started a search.
    pub fn handle_key(&self, key: KeyInput) -> Option<JoinHandle<()>> {
        match key {
            KeyInput::ArrowDown => {
                let mut st = self.state.lock().unwrap();
                if st.suggestions_visible {
                    let len = st.suggestions.len();
                    st.cursor.move_down(len);
                }
                None
            }
            KeyInput::ArrowUp => {
                let mut st = self.state.lock().unwrap();
                if st.suggestions_visible {
                    st.cursor.move_up();
                }
                None
            }
            KeyInput::Escape => {
                self.close_suggestions();
                None
            }
            KeyInput::Enter => self.enter(),
        }
    }

    /// Enter is asymmetric: with a highlighted suggestion it only
    /// commits the text into the input (the user confirms with a second
    /// Enter); with no highlight it submits the current input.
    fn enter(&self) -> Option<JoinHandle<()>> {
        {
            let mut st = self.state.lock().unwrap();
            if st.suggestions_visible {
                if let Some(i) = st.cursor.index() {
                    if let Some(name) = st.suggestions.get(i).cloned() {
                        st.input = name;
                        st.close_suggestions();
                        st.invalidate_suggestions();
                        st.phase = SearchPhase::Typing;
                        drop(st);
                        self.debounce.cancel();
                        return None;
                    }
                }
            }
        }
        self.submit()
    }

    /// Submit the current input as a full search. Returns the task
    /// handle, or `None` when the input is empty or a search is already
    /// running.
    pub fn submit(&self) -> Option<JoinHandle<()>> {
        let term = {
            let mut st = self.state.lock().unwrap();
            if st.phase == SearchPhase::Searching {
                return None;
            }
            let term = st.input.trim().to_string();
            if term.is_empty() {
                return None;
            }
            st.close_suggestions();
            st.invalidate_suggestions();
            st.phase = SearchPhase::Searching;
            st.error = None;
            term
        };
        self.debounce.cancel();

        let state = Arc::clone(&self.state);
        let client = Arc::clone(&self.client);
        Some(tokio::spawn(async move {
            let outcome = client.find_by_name(&term).await;

            let mut st = state.lock().unwrap();
            match outcome {
                Ok(exams) => {
                    debug!(term = %term, count = exams.len(), "search completed");
                    st.results = exams;
                    st.phase = SearchPhase::ResultsShown;
                }
                Err(err) => {
                    st.error = Some(format!("Failed to fetch exams: {err}"));
                    st.phase = SearchPhase::SearchFailed;
                }
            }
        }))
    }

    /// Close the suggestion popup without touching the input text
    /// (Escape, pointer outside the popup).
    pub fn close_suggestions(&self) {
        {
            let mut st = self.state.lock().unwrap();
            st.close_suggestions();
            st.invalidate_suggestions();
        }
        self.debounce.cancel();
    }

    /// Explicit dismissal: wipe input, suggestions, and cursor. Results
    /// of the last completed search stay on screen.
    pub fn clear(&self) {
        self.debounce.cancel();
        let mut st = self.state.lock().unwrap();
        st.input.clear();
        st.invalidate_suggestions();
        st.clear_suggestions();
        st.phase = SearchPhase::Idle;
    }
}
