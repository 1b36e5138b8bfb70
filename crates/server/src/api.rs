//! HTTP API for the exam service.
//!
//! Routes live under `/api/v1/exam`; identity for mutations is the
//! `(name, title)` pair passed as query parameters.

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use examsearch_core::Exam;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::{ExamKey, ExamStore};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<RwLock<ExamStore>>,
    pub start_time: Instant,
}

impl AppContext {
    pub fn new(store: ExamStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            start_time: Instant::now(),
        }
    }
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Exam not found" })),
    )
}

// ---------------------------------------------------------------------------
// Query parameter types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct NamesQuery {
    /// Comma-separated name prefixes.
    pub names: String,
}

#[derive(Deserialize)]
pub struct KeyQuery {
    pub name: String,
    pub title: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub exams: usize,
    pub uptime_secs: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /api/v1/exam?name=<prefix>`: all exams, or a case-insensitive
/// name-prefix filter when `name` is present.
pub async fn get_exams(State(ctx): State<AppContext>, Query(q): Query<NameQuery>) -> Json<Vec<Exam>> {
    let store = ctx.store.read().unwrap();
    let exams = match q.name.as_deref() {
        Some(prefix) => store.by_name_prefix(prefix),
        None => store.all(),
    };
    Json(exams)
}

/// `GET /api/v1/exam/multiple?names=a,b`: union of prefix queries.
pub async fn get_exams_multiple(
    State(ctx): State<AppContext>,
    Query(q): Query<NamesQuery>,
) -> Json<Vec<Exam>> {
    let prefixes: Vec<String> = q
        .names
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let store = ctx.store.read().unwrap();
    Json(store.by_name_prefixes(&prefixes))
}

/// `POST /api/v1/exam`: create or replace an exam.
pub async fn add_exam(
    State(ctx): State<AppContext>,
    Json(exam): Json<Exam>,
) -> (StatusCode, Json<Exam>) {
    info!(name = %exam.name, title = %exam.title, "Adding exam");
    ctx.store.write().unwrap().upsert(exam.clone());
    (StatusCode::CREATED, Json(exam))
}

/// `PUT /api/v1/exam?name=<n>&title=<t>`: update the non-key fields of
/// an existing exam.
pub async fn update_exam(
    State(ctx): State<AppContext>,
    Query(q): Query<KeyQuery>,
    Json(patch): Json<Exam>,
) -> Result<Json<Exam>, ApiError> {
    let key = ExamKey::new(q.name, q.title);
    let updated = ctx
        .store
        .write()
        .unwrap()
        .update(&key, patch)
        .ok_or_else(not_found)?;
    Ok(Json(updated))
}

/// `DELETE /api/v1/exam?name=<n>&title=<t>`: remove an exam.
/// Always 204, whether or not the exam existed.
pub async fn delete_exam(State(ctx): State<AppContext>, Query(q): Query<KeyQuery>) -> StatusCode {
    let key = ExamKey::new(q.name, q.title);
    let removed = ctx.store.write().unwrap().remove(&key);
    info!(name = %key.name, title = %key.title, removed, "Delete exam");
    StatusCode::NO_CONTENT
}

pub async fn health(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    let exams = ctx.store.read().unwrap().len();
    Json(HealthResponse {
        status: "ok",
        exams,
        uptime_secs: ctx.start_time.elapsed().as_secs(),
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/exam",
            get(get_exams)
                .post(add_exam)
                .put(update_exam)
                .delete(delete_exam),
        )
        .route("/api/v1/exam/multiple", get(get_exams_multiple))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
