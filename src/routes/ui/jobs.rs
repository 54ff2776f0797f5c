use askama::Template;
use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::candidate::Roster;
use crate::models::job::{JobId, JobPosting, NewJobPosting, ValidationError};
use crate::search;
use crate::state::AppState;

/// Width used when rendering long cells in the job table.
const DISPLAY_WIDTH: usize = 60;

/// First `max_chars` characters followed by `...`, and whether anything was
/// cut.
fn truncate(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => (format!("{}...", &text[..cut]), true),
        None => (text.to_string(), false),
    }
}

struct Cell {
    short: String,
    full: String,
    truncated: bool,
}

impl Cell {
    fn new(value: &str) -> Self {
        if value.is_empty() {
            return Self {
                short: "-".to_string(),
                full: String::new(),
                truncated: false,
            };
        }
        let (short, truncated) = truncate(value, DISPLAY_WIDTH);
        Self {
            short,
            full: value.to_string(),
            truncated,
        }
    }
}

struct JobRow {
    id: String,
    cells: Vec<Cell>,
    matches: Vec<String>,
}

impl JobRow {
    fn new(job: &JobPosting, roster: &Roster) -> Self {
        Self {
            id: job.id.to_string(),
            cells: job.text_fields().iter().map(|value| Cell::new(value)).collect(),
            matches: roster
                .matches_for(job)
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "jobs/list.html")]
struct JobListTemplate {
    rows: Vec<JobRow>,
    search: String,
    shown: usize,
    total: usize,
    form: NewJobPosting,
    missing: Vec<&'static str>,
    added: bool,
}

impl JobListTemplate {
    fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|name| *name == field)
    }
}

#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    pub search: Option<String>,
    pub added: Option<String>,
}

fn render_list(
    state: &AppState,
    search: &str,
    form: NewJobPosting,
    error: Option<ValidationError>,
    added: bool,
) -> Result<String, AppError> {
    let snapshot = state.store.snapshot();
    let view = search::filter(&snapshot, search);
    let rows = view
        .postings()
        .iter()
        .map(|job| JobRow::new(job, &state.roster))
        .collect();

    let tmpl = JobListTemplate {
        rows,
        search: search.to_string(),
        shown: view.len(),
        total: view.total(),
        form,
        missing: error.map(|err| err.missing).unwrap_or_default(),
        added,
    };
    Ok(tmpl.render()?)
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<Html<String>, AppError> {
    let search = query.search.unwrap_or_default();
    Ok(Html(render_list(
        &state,
        &search,
        NewJobPosting::default(),
        None,
        query.added.is_some(),
    )?))
}

pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<NewJobPosting>,
) -> Result<Response, AppError> {
    match state.store.add(input.clone()) {
        Ok(_) => Ok(Redirect::to("/?added=1").into_response()),
        Err(err) => {
            let page = render_list(&state, "", input, Some(err), false)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response())
        }
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Redirect {
    if state.store.remove(&JobId(id)).is_none() {
        tracing::debug!(job_id = %id, "Delete requested for unknown job");
    }
    Redirect::to("/")
}
