// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Entry list, add, edit and delete routes.

use crate::error::{AppError, Result};
use crate::flash::{self, FlashMessage};
use crate::models::entry_form::parse_entry_id;
use crate::models::{Entry, EntryForm, EntrySummary, ValidationErrors};
use crate::time_utils::today;
use crate::views::entries::{delete_page, form_page, list_page, FormMode};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

/// Where successful writes redirect to.
pub const LIST_PATH: &str = "/entries";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_entries))
        .route(LIST_PATH, get(list_entries))
        .route("/entries/add", get(new_entry_form).post(create_entry))
        .route("/entries/edit", get(edit_entry_form_query).post(update_entry))
        .route("/entries/edit/", get(edit_entry_form_query))
        .route("/entries/edit/{id}", get(edit_entry_form))
        .route("/entries/delete", get(delete_entry_confirm_query))
        .route("/entries/delete/", get(delete_entry_confirm_query))
        .route(
            "/entries/delete/{id}",
            get(delete_entry_confirm).post(delete_entry),
        )
}

/// `?id=` form of the edit and delete confirmation routes.
#[derive(Deserialize)]
struct IdQuery {
    #[serde(default)]
    id: Option<String>,
}

// ─── List ────────────────────────────────────────────────────

/// Entry list with totals. Consumes the pending flash message.
async fn list_entries(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let entries = state.entries.list_entries().await?;
    let summary = EntrySummary::from_entries(&entries);

    tracing::debug!(
        count = entries.len(),
        total_activity = summary.total_activity,
        active_days = summary.active_day_count,
        "Listing entries"
    );

    let (jar, message) = flash::take(jar);
    let page = list_page(&entries, &summary, &state.activities, message);
    Ok((jar, Html(page)))
}

// ─── Add ─────────────────────────────────────────────────────

async fn new_entry_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let form = EntryForm::draft(today());
    Html(form_page(
        FormMode::Add,
        &form,
        &ValidationErrors::new(),
        &state.activities,
    ))
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<EntryForm>,
) -> Result<Response> {
    let entry = match form.bind(&state.activities) {
        Ok(entry) => entry,
        Err(errors) => {
            tracing::debug!(errors = errors.len(), "Rejected new entry");
            return Ok(Html(form_page(FormMode::Add, &form, &errors, &state.activities))
                .into_response());
        }
    };

    let id = state.entries.add_entry(entry).await?;
    tracing::info!(entry_id = id, "Entry added");

    Ok((
        flash::set(jar, FlashMessage::EntryAdded),
        Redirect::to(LIST_PATH),
    )
        .into_response())
}

// ─── Edit ────────────────────────────────────────────────────

async fn edit_entry_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    render_edit_form(&state, Some(&id)).await
}

async fn edit_entry_form_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Html<String>> {
    render_edit_form(&state, params.id.as_deref()).await
}

async fn render_edit_form(state: &AppState, raw_id: Option<&str>) -> Result<Html<String>> {
    let entry = find_entry(state, raw_id).await?;
    Ok(Html(form_page(
        FormMode::Edit,
        &EntryForm::from_entry(&entry),
        &ValidationErrors::new(),
        &state.activities,
    )))
}

async fn update_entry(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<EntryForm>,
) -> Result<Response> {
    let id = require_entry_id(form.id.as_deref())?;

    let entry = match form.bind(&state.activities) {
        Ok(entry) => entry,
        Err(errors) => {
            tracing::debug!(entry_id = id, errors = errors.len(), "Rejected entry update");
            return Ok(Html(form_page(FormMode::Edit, &form, &errors, &state.activities))
                .into_response());
        }
    };

    state.entries.update_entry(Entry { id, ..entry }).await?;
    tracing::info!(entry_id = id, "Entry updated");

    Ok((
        flash::set(jar, FlashMessage::EntryUpdated),
        Redirect::to(LIST_PATH),
    )
        .into_response())
}

// ─── Delete ──────────────────────────────────────────────────

async fn delete_entry_confirm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let entry = find_entry(&state, Some(&id)).await?;
    Ok(Html(delete_page(&entry, &state.activities)))
}

async fn delete_entry_confirm_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Html<String>> {
    let entry = find_entry(&state, params.id.as_deref()).await?;
    Ok(Html(delete_page(&entry, &state.activities)))
}

async fn delete_entry(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = require_entry_id(Some(&id))?;

    state.entries.delete_entry(id).await?;
    tracing::info!(entry_id = id, "Entry deleted");

    Ok((
        flash::set(jar, FlashMessage::EntryDeleted),
        Redirect::to(LIST_PATH),
    )
        .into_response())
}

// ─── Helpers ─────────────────────────────────────────────────

/// Parse a required entry id. Missing or malformed ids are a bad request.
fn require_entry_id(raw_id: Option<&str>) -> Result<u64> {
    match raw_id.map(str::trim).filter(|s| !s.is_empty()) {
        None => Err(AppError::BadRequest("Entry id is required".to_string())),
        Some(raw) => parse_entry_id(Some(raw))
            .ok_or_else(|| AppError::BadRequest(format!("Invalid entry id: {}", raw))),
    }
}

/// Load an entry for the edit and delete pages.
///
/// The id is checked before the repository is consulted.
async fn find_entry(state: &AppState, raw_id: Option<&str>) -> Result<Entry> {
    let id = require_entry_id(raw_id)?;
    state
        .entries
        .get_entry(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_entry_id() {
        assert_eq!(require_entry_id(Some("12")).unwrap(), 12);
        assert!(matches!(
            require_entry_id(None),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            require_entry_id(Some("  ")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            require_entry_id(Some("-3")),
            Err(AppError::BadRequest(_))
        ));
    }
}
