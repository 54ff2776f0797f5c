pub mod candidates;
pub mod jobs;

use axum::Router;
use axum::middleware;
use axum::routing::get;

use crate::auth::require_access;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        // Jobs
        .route("/jobs", get(jobs::list).post(jobs::create))
        .route("/jobs/{id}", get(jobs::get).delete(jobs::delete))
        .route("/jobs/{id}/matches", get(jobs::matches))
        // Candidates
        .route("/candidates", get(candidates::list))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_access,
        ))
        .with_state(state);

    Router::new().nest("/api/v1", protected)
}
