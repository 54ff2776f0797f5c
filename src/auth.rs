use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::state::AppState;
use crate::text::normalize;

pub const SESSION_COOKIE: &str = "jobmatch_session";

/// Hash a shared password for comparison. Surrounding whitespace and case
/// are ignored.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize(password.trim()).as_bytes());
    hex::encode(hasher.finalize())
}

/// Shared-password gate in front of the board.
#[derive(Debug, Clone)]
pub struct AccessGate {
    digest: String,
}

impl AccessGate {
    pub fn new(password: &str) -> Self {
        Self {
            digest: hash_password(password),
        }
    }

    pub fn verify(&self, password: &str) -> bool {
        hash_password(password) == self.digest
    }

    /// Value stored in the session cookie after a successful login.
    pub fn session_token(&self) -> &str {
        &self.digest
    }

    pub fn session_cookie(&self) -> String {
        format!(
            "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Strict",
            self.digest
        )
    }

    /// Accepts `Authorization: Bearer <password>` or the session cookie.
    pub fn admits(&self, headers: &HeaderMap) -> bool {
        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|password| self.verify(password));

        bearer || session_from(headers).is_some_and(|token| token == self.digest)
    }
}

fn session_from(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| {
            pair.trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
        })
}

/// Middleware for the JSON API.
pub async fn require_access(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.gate.admits(request.headers()) {
        return Err(AppError::Unauthorized);
    }
    Ok(next.run(request).await)
}

/// Middleware for pages; unauthenticated visitors are sent to the login form.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.gate.admits(request.headers()) {
        return Redirect::to("/login").into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn hash_ignores_case_and_whitespace() {
        assert_eq!(hash_password("  Demo123 "), hash_password("demo123"));
        assert_ne!(hash_password("demo123"), hash_password("demo124"));
        assert_eq!(hash_password("x").len(), 64);
    }

    #[test]
    fn gate_admits_bearer_password() {
        let gate = AccessGate::new("demo123");
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer DEMO123"));
        assert!(gate.admits(&headers));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer wrong"));
        assert!(!gate.admits(&headers));
    }

    #[test]
    fn gate_admits_session_cookie() {
        let gate = AccessGate::new("demo123");
        let mut headers = HeaderMap::new();
        let cookie = format!("theme=dark; {SESSION_COOKIE}={}", gate.session_token());
        headers.insert(COOKIE, HeaderValue::from_str(&cookie).expect("ascii"));
        assert!(gate.admits(&headers));
    }

    #[test]
    fn gate_rejects_missing_or_forged_credentials() {
        let gate = AccessGate::new("demo123");
        assert!(!gate.admits(&HeaderMap::new()));

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("jobmatch_session=deadbeef"),
        );
        assert!(!gate.admits(&headers));
    }
}
