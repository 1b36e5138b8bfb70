//! ExamSearch server library — exam store and HTTP API.

pub mod api;
pub mod store;
