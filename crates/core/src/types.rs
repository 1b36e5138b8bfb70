//! Shared data types for the search engine and its clients.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Exam payload
// ---------------------------------------------------------------------------

/// A scheduled exam as served by the exam service.
///
/// Identity is the `(name, title)` pair; everything else is display
/// metadata. The search engine itself only looks at `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Duration as "HH:MM", e.g. "02:00".
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

// ---------------------------------------------------------------------------
// Engine configuration
// ---------------------------------------------------------------------------

/// Tunables for the search session.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a suggestion fetch fires.
    pub debounce: Duration,
    /// Upper bound on the suggestion list after dedup.
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(150),
            max_suggestions: 8,
        }
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// High-level phase of the search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No input text.
    Idle,
    /// Input present, no suggestion popup showing.
    Typing,
    /// Suggestion popup visible.
    SuggestionsOpen,
    /// A submitted search is in flight. Keystrokes are ignored.
    Searching,
    /// A submitted search completed with results (possibly empty).
    ResultsShown,
    /// A submitted search failed; `SearchView::error` carries the message.
    SearchFailed,
}

/// Immutable snapshot of the session handed to renderers.
///
/// Renderers draw this and feed events back through the controller;
/// they never mutate state directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub input: String,
    pub phase: SearchPhase,
    pub suggestions: Vec<String>,
    /// Highlighted suggestion index, `None` when nothing is highlighted.
    pub selected: Option<usize>,
    pub suggestions_visible: bool,
    /// True while a suggestion fetch is in flight.
    pub suggest_loading: bool,
    pub results: Vec<Exam>,
    /// Last submission failure, cleared on the next attempt.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exam_serializes_camel_case() {
        let exam = Exam {
            name: "Exam A".to_string(),
            title: "Algorithms".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 12),
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            duration: Some("02:00".to_string()),
            location: Some("Hall 3".to_string()),
        };

        let json = serde_json::to_value(&exam).unwrap();
        assert_eq!(json["startDate"], "2026-05-12");
        assert_eq!(json["startTime"], "09:00:00");
        assert_eq!(json["name"], "Exam A");
    }

    #[test]
    fn exam_deserializes_with_missing_optional_fields() {
        let exam: Exam =
            serde_json::from_str(r#"{"name": "Exam B", "title": "Databases"}"#).unwrap();
        assert_eq!(exam.name, "Exam B");
        assert!(exam.start_date.is_none());
        assert!(exam.location.is_none());
    }

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce, Duration::from_millis(150));
        assert_eq!(config.max_suggestions, 8);
    }
}
