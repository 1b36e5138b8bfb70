//! Remote exam lookup boundary.
//!
//! The engine talks to the exam service through the [`ExamLookup`] trait
//! so tests can script responses. [`HttpExamClient`] is the production
//! implementation against the `/api/v1/exam` endpoint.

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Exam;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ExamLookup: Send + Sync {
    /// All exams whose name starts with `name` (case-insensitive,
    /// decided server-side). Used for both suggestions and full search.
    async fn find_by_name(&self, name: &str) -> Result<Vec<Exam>, LookupError>;

    /// Resolve one exam by its `(name, title)` identity.
    async fn find_detail(&self, name: &str, title: &str) -> Result<Option<Exam>, LookupError> {
        let exams = self.find_by_name(name).await?;
        Ok(exams
            .into_iter()
            .find(|e| e.name == name && e.title == title))
    }
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// reqwest-backed client for the exam service.
#[derive(Debug, Clone)]
pub struct HttpExamClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpExamClient {
    /// `base_url` is the full exam endpoint, e.g.
    /// `http://127.0.0.1:8080/api/v1/exam`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

}

#[async_trait]
impl ExamLookup for HttpExamClient {
    async fn find_by_name(&self, name: &str) -> Result<Vec<Exam>, LookupError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Exam>>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{exam, MockLookup};
    use std::sync::Arc;

    #[tokio::test]
    async fn detail_filters_by_exact_name_and_title() {
        let mock = Arc::new(MockLookup::new());
        mock.respond(
            "Exam A",
            0,
            vec![exam("Exam A", "Algorithms"), exam("Exam A", "Databases")],
        );

        let found = mock.find_detail("Exam A", "Databases").await.unwrap();
        assert_eq!(found.unwrap().title, "Databases");

        let missing = mock.find_detail("Exam A", "Compilers").await.unwrap();
        assert!(missing.is_none());
    }
}
