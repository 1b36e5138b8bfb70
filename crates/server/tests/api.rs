//! Integration tests for the exam API, calling handlers in-process.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use chrono::{NaiveDate, NaiveTime};
use std::io::Write;

use examsearch_core::Exam;
use examsearch_server::api::{
    add_exam, delete_exam, get_exams, get_exams_multiple, health, update_exam, AppContext,
    KeyQuery, NameQuery, NamesQuery,
};
use examsearch_server::store::ExamStore;

fn exam(name: &str, title: &str) -> Exam {
    Exam {
        name: name.to_string(),
        title: title.to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 5, 12),
        start_time: NaiveTime::from_hms_opt(9, 0, 0),
        duration: Some("02:00".to_string()),
        location: Some("Hall 3".to_string()),
    }
}

fn ctx() -> AppContext {
    let mut store = ExamStore::new();
    store.upsert(exam("Algorithms", "Final"));
    store.upsert(exam("Algorithms II", "Final"));
    store.upsert(exam("Databases", "Midterm"));
    AppContext::new(store)
}

#[tokio::test]
async fn get_without_filter_returns_everything() {
    let ctx = ctx();
    let Json(exams) = get_exams(State(ctx), Query(NameQuery { name: None })).await;
    assert_eq!(exams.len(), 3);
}

#[tokio::test]
async fn get_filters_by_case_insensitive_prefix() {
    let ctx = ctx();
    let Json(exams) = get_exams(
        State(ctx),
        Query(NameQuery {
            name: Some("algo".to_string()),
        }),
    )
    .await;
    assert_eq!(exams.len(), 2);
    assert!(exams.iter().all(|e| e.name.starts_with("Algorithms")));
}

#[tokio::test]
async fn multiple_takes_the_union_of_prefixes() {
    let ctx = ctx();
    let Json(exams) = get_exams_multiple(
        State(ctx),
        Query(NamesQuery {
            names: "alg, data".to_string(),
        }),
    )
    .await;
    assert_eq!(exams.len(), 3);
}

#[tokio::test]
async fn post_creates_and_returns_201() {
    let ctx = ctx();
    let (status, Json(created)) =
        add_exam(State(ctx.clone()), Json(exam("Compilers", "Final"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.name, "Compilers");

    let Json(exams) = get_exams(State(ctx), Query(NameQuery { name: None })).await;
    assert_eq!(exams.len(), 4);
}

#[tokio::test]
async fn put_updates_existing_and_404s_on_missing() {
    let ctx = ctx();

    let mut patch = exam("Algorithms", "Final");
    patch.location = Some("Hall 9".to_string());
    let Json(updated) = update_exam(
        State(ctx.clone()),
        Query(KeyQuery {
            name: "Algorithms".to_string(),
            title: "Final".to_string(),
        }),
        Json(patch.clone()),
    )
    .await
    .unwrap();
    assert_eq!(updated.location.as_deref(), Some("Hall 9"));

    let err = update_exam(
        State(ctx),
        Query(KeyQuery {
            name: "Nope".to_string(),
            title: "Final".to_string(),
        }),
        Json(patch),
    )
    .await
    .unwrap_err();
    assert_eq!(err.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_204_regardless_of_existence() {
    let ctx = ctx();

    let status = delete_exam(
        State(ctx.clone()),
        Query(KeyQuery {
            name: "Databases".to_string(),
            title: "Midterm".to_string(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let status = delete_exam(
        State(ctx.clone()),
        Query(KeyQuery {
            name: "Databases".to_string(),
            title: "Midterm".to_string(),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let Json(exams) = get_exams(State(ctx), Query(NameQuery { name: None })).await;
    assert_eq!(exams.len(), 2);
}

#[tokio::test]
async fn health_reports_store_size() {
    let ctx = ctx();
    let Json(h) = health(State(ctx)).await;
    assert_eq!(h.status, "ok");
    assert_eq!(h.exams, 3);
}

#[tokio::test]
async fn store_loads_from_a_seed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"name": "Algorithms", "title": "Final", "startDate": "2026-05-12",
              "startTime": "09:00:00", "duration": "02:00", "location": "Hall 3"}},
            {{"name": "Databases", "title": "Midterm"}}
        ]"#
    )
    .unwrap();

    let store = ExamStore::from_seed_file(file.path()).unwrap();
    assert_eq!(store.len(), 2);

    let hits = store.by_name_prefix("alg");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].start_date, NaiveDate::from_ymd_opt(2026, 5, 12));
}

#[tokio::test]
async fn seed_file_with_bad_json_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(ExamStore::from_seed_file(file.path()).is_err());
}
