// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
};
use chrono::NaiveDate;
use fitness_frog::db::InMemoryEntryRepository;
use fitness_frog::models::Entry;
use fitness_frog::routes::create_router;
use fitness_frog::services::ActivityCatalog;
use fitness_frog::AppState;
use std::sync::Arc;

/// Create a test app with an empty in-memory repository.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_repo(InMemoryEntryRepository::new())
}

/// Create a test app around the given repository.
#[allow(dead_code)]
pub fn create_test_app_with_repo(repo: InMemoryEntryRepository) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        entries: Arc::new(repo),
        activities: ActivityCatalog::default(),
    });

    (create_router(state.clone()), state)
}

/// Create a test app whose repository fails every call.
#[allow(dead_code)]
pub fn create_offline_test_app() -> axum::Router {
    create_test_app_with_repo(InMemoryEntryRepository::new_offline()).0
}

/// Store entries directly and return their assigned ids.
#[allow(dead_code)]
pub async fn seed(state: &AppState, entries: Vec<Entry>) -> Vec<u64> {
    let mut ids = Vec::new();
    for entry in entries {
        ids.push(state.entries.add_entry(entry).await.unwrap());
    }
    ids
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

#[allow(dead_code)]
pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string())
}
