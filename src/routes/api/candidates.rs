use axum::Json;
use axum::extract::State;

use crate::models::candidate::Roster;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Roster> {
    Json(state.roster.as_ref().clone())
}
