//! In-memory exam table.
//!
//! Exams are keyed by `(name, title)`. Name queries are case-insensitive
//! prefix matches. The store can be seeded from a JSON array on disk.

use examsearch_core::Exam;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Identity of an exam within the store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExamKey {
    pub name: String,
    pub title: String,
}

impl ExamKey {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    pub fn of(exam: &Exam) -> Self {
        Self::new(exam.name.clone(), exam.title.clone())
    }
}

#[derive(Debug, Default)]
pub struct ExamStore {
    exams: BTreeMap<ExamKey, Exam>,
}

impl ExamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load exams from a JSON array file.
    pub fn from_seed_file(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        let exams: Vec<Exam> = serde_json::from_str(&raw)?;
        let mut store = Self::new();
        for exam in exams {
            store.upsert(exam);
        }
        info!(count = store.len(), seed = %path.display(), "Loaded exam seed data");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.exams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exams.is_empty()
    }

    pub fn all(&self) -> Vec<Exam> {
        self.exams.values().cloned().collect()
    }

    /// Exams whose name starts with `prefix`, case-insensitive.
    pub fn by_name_prefix(&self, prefix: &str) -> Vec<Exam> {
        let needle = prefix.to_lowercase();
        self.exams
            .values()
            .filter(|e| e.name.to_lowercase().starts_with(&needle))
            .cloned()
            .collect()
    }

    /// Union of prefix queries, preserving store order and skipping
    /// duplicates that match more than one prefix.
    pub fn by_name_prefixes(&self, prefixes: &[String]) -> Vec<Exam> {
        let needles: Vec<String> = prefixes.iter().map(|p| p.to_lowercase()).collect();
        self.exams
            .values()
            .filter(|e| {
                let name = e.name.to_lowercase();
                needles.iter().any(|n| name.starts_with(n))
            })
            .cloned()
            .collect()
    }

    pub fn get(&self, key: &ExamKey) -> Option<&Exam> {
        self.exams.get(key)
    }

    /// Insert or replace by identity.
    pub fn upsert(&mut self, exam: Exam) {
        self.exams.insert(ExamKey::of(&exam), exam);
    }

    /// Update the non-key fields of an existing exam. Returns the
    /// updated exam, or `None` when the key does not exist.
    pub fn update(&mut self, key: &ExamKey, patch: Exam) -> Option<Exam> {
        let existing = self.exams.get_mut(key)?;
        existing.start_date = patch.start_date;
        existing.start_time = patch.start_time;
        existing.duration = patch.duration;
        existing.location = patch.location;
        Some(existing.clone())
    }

    /// Remove by identity. Returns whether an exam was removed.
    pub fn remove(&mut self, key: &ExamKey) -> bool {
        self.exams.remove(key).is_some()
    }
}
