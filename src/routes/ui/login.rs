use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

pub async fn form() -> Result<Html<String>, AppError> {
    let tmpl = LoginTemplate {
        error: String::new(),
    };
    Ok(Html(tmpl.render()?))
}

pub async fn submit(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> Result<Response, AppError> {
    if state.gate.verify(&input.password) {
        tracing::info!("Login accepted");
        return Ok((
            AppendHeaders([(SET_COOKIE, state.gate.session_cookie())]),
            Redirect::to("/"),
        )
            .into_response());
    }

    tracing::warn!("Login rejected");
    let tmpl = LoginTemplate {
        error: "Felaktigt lösenord".to_string(),
    };
    Ok((StatusCode::UNAUTHORIZED, Html(tmpl.render()?)).into_response())
}
