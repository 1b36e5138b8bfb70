//! Test doubles for the lookup boundary.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::lookup::{ExamLookup, LookupError};
use crate::types::Exam;

pub fn exam(name: &str, title: &str) -> Exam {
    Exam {
        name: name.to_string(),
        title: title.to_string(),
        start_date: None,
        start_time: None,
        duration: None,
        location: None,
    }
}

#[derive(Clone)]
enum Scripted {
    Ok { delay_ms: u64, exams: Vec<Exam> },
    Err { delay_ms: u64, message: String },
}

/// Scripted [`ExamLookup`] with per-term delays and outcomes. Re-scripting
/// a term replaces the previous script, so a test can make the same term
/// succeed first and fail later.
#[derive(Default)]
pub struct MockLookup {
    scripts: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, term: &str, delay_ms: u64, exams: Vec<Exam>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(term.to_string(), Scripted::Ok { delay_ms, exams });
    }

    pub fn fail(&self, term: &str, delay_ms: u64, message: &str) {
        self.scripts.lock().unwrap().insert(
            term.to_string(),
            Scripted::Err {
                delay_ms,
                message: message.to_string(),
            },
        );
    }

    /// Terms queried so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExamLookup for MockLookup {
    async fn find_by_name(&self, name: &str) -> Result<Vec<Exam>, LookupError> {
        self.calls.lock().unwrap().push(name.to_string());

        let script = self.scripts.lock().unwrap().get(name).cloned();
        match script {
            Some(Scripted::Ok { delay_ms, exams }) => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(exams)
            }
            Some(Scripted::Err { delay_ms, message }) => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Err(LookupError::Transport(message))
            }
            None => Ok(Vec::new()),
        }
    }
}
