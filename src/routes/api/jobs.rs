use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::matching::MatchSet;
use crate::models::candidate::Roster;
use crate::models::job::{JobId, JobPosting, NewJobPosting};
use crate::search;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobView {
    #[serde(flatten)]
    pub job: JobPosting,
    pub matches: MatchSet,
}

impl JobView {
    fn new(job: JobPosting, roster: &Roster) -> Self {
        let matches = roster.matches_for(&job);
        Self { job, matches }
    }
}

#[derive(Debug, Serialize)]
pub struct JobList {
    pub jobs: Vec<JobView>,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct JobFilters {
    pub search: Option<String>,
}

fn find(state: &AppState, id: Uuid) -> Result<JobPosting, AppError> {
    state
        .store
        .get(&JobId(id))
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<JobFilters>,
) -> Result<Json<JobList>, AppError> {
    let snapshot = state.store.snapshot();
    let view = search::filter(&snapshot, filters.search.as_deref().unwrap_or_default());
    tracing::debug!(query = view.query(), shown = view.len(), total = view.total(), "Filtered jobs");

    let jobs = view
        .postings()
        .iter()
        .map(|job| JobView::new((*job).clone(), &state.roster))
        .collect();
    Ok(Json(JobList {
        jobs,
        shown: view.len(),
        total: view.total(),
    }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobView>, AppError> {
    let job = find(&state, id)?;
    Ok(Json(JobView::new(job, &state.roster)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewJobPosting>,
) -> Result<(StatusCode, Json<JobView>), AppError> {
    let job = state.store.add(input)?;
    Ok((StatusCode::CREATED, Json(JobView::new(job, &state.roster))))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .store
        .remove(&JobId(id))
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(serde_json::json!({ "deleted": true })))
}

pub async fn matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let job = find(&state, id)?;
    let matches = state.roster.matches_for(&job);
    tracing::debug!(job_id = %job.id, matched = matches.len(), "Matched posting");
    Ok(Json(serde_json::json!({
        "job_id": job.id,
        "matches": matches,
    })))
}
