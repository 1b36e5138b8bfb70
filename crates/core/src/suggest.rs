//! Suggestion fetching with stale-response reconciliation.
//!
//! Every dispatch gets a monotonically increasing sequence number,
//! allocated synchronously so issue order is unambiguous. When a
//! response comes back it commits only if its number still equals the
//! highest issued one; anything older is discarded without touching the
//! session. Bumping the counter therefore doubles as cancellation.

use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::lookup::ExamLookup;
use crate::state::SessionState;
use crate::types::Exam;

/// Extract exam names, dedup preserving first-seen order, cap at `cap`.
pub fn dedup_suggestions(exams: &[Exam], cap: usize) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for exam in exams {
        if names.len() == cap {
            break;
        }
        if !names.iter().any(|n| n == &exam.name) {
            names.push(exam.name.clone());
        }
    }
    names
}

#[derive(Clone)]
pub struct SuggestionFetcher {
    state: Arc<Mutex<SessionState>>,
    client: Arc<dyn ExamLookup>,
    max_suggestions: usize,
}

impl SuggestionFetcher {
    pub(crate) fn new(
        state: Arc<Mutex<SessionState>>,
        client: Arc<dyn ExamLookup>,
        max_suggestions: usize,
    ) -> Self {
        Self {
            state,
            client,
            max_suggestions,
        }
    }

    /// Issue a suggestion lookup for `term`. Empty terms clear the list
    /// instead of hitting the network. Returns the spawned task handle
    /// when a request was issued.
    pub fn dispatch(&self, term: &str) -> Option<JoinHandle<()>> {
        let term = term.trim().to_string();
        if term.is_empty() {
            let mut st = self.state.lock().unwrap();
            st.invalidate_suggestions();
            st.clear_suggestions();
            return None;
        }

        let seq = {
            let mut st = self.state.lock().unwrap();
            st.suggest_loading = true;
            st.next_seq()
        };

        let state = Arc::clone(&self.state);
        let client = Arc::clone(&self.client);
        let cap = self.max_suggestions;
        Some(tokio::spawn(async move {
            let outcome = client.find_by_name(&term).await;

            let mut st = state.lock().unwrap();
            if seq != st.last_issued {
                // A newer fetch was issued while this one was in flight.
                return;
            }
            match outcome {
                Ok(exams) => st.commit_suggestions(dedup_suggestions(&exams, cap)),
                Err(err) => {
                    debug!(error = %err, term = %term, "suggestion lookup failed");
                    st.clear_suggestions();
                }
            }
        }))
    }
}
