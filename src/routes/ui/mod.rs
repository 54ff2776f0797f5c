pub mod jobs;
pub mod login;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::auth::require_session;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/", get(jobs::list))
        .route("/jobs", post(jobs::create))
        .route("/jobs/{id}/delete", post(jobs::delete))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .route("/login", get(login::form).post(login::submit))
        .merge(pages)
        .with_state(state)
}
