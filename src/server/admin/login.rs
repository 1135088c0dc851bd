use std::sync::Arc;

use axum::{
    Extension, Form,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, header::{COOKIE, SET_COOKIE}},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use super::views::login_page;
use crate::auth::session::{self, LOGIN_PATH, LoginOutcome, SessionLookup};
use crate::auth::{CurrentAdmin, signed_out_redirect};
use crate::server::AppState;

pub const DASHBOARD_PATH: &str = "/admin/dashboard";

#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    email: String,
    password: String,
}

fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "unauthorized" => Some("Unauthorized. Admin access only."),
        _ => None,
    }
}

pub async fn show(current: Option<Extension<CurrentAdmin>>, Query(params): Query<LoginParams>) -> Response {
    if current.is_some() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    login_page(params.error.as_deref().and_then(error_message), "").into_response()
}

pub async fn submit(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Response {
    let outcome = match session::authenticate(&state.repo, &form.email, &form.password).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Login lookup failed: {e}");
            return login_page(Some("Something went wrong. Please try again."), &form.email).into_response();
        }
    };

    let admin = match outcome {
        LoginOutcome::Admin(admin) => admin,
        LoginOutcome::InvalidCredentials => {
            tracing::info!("Rejected login for {}", form.email);
            return login_page(Some("Invalid login credentials"), &form.email).into_response();
        }
        LoginOutcome::NotAdmin => {
            tracing::warn!("Login by inactive admin {}", form.email);
            return login_page(Some("Unauthorized. Admin access only."), &form.email).into_response();
        }
    };

    let token = match session::start(&state.repo, &admin).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to start session for {}: {e}", admin.email);
            return login_page(Some("Something went wrong. Please try again."), &form.email).into_response();
        }
    };

    let mut response = Redirect::to(DASHBOARD_PATH).into_response();
    match HeaderValue::from_str(&session::session_cookie(&token)) {
        Ok(value) => {
            response.headers_mut().insert(SET_COOKIE, value);
        }
        Err(e) => tracing::error!("Session cookie is not a valid header: {e}"),
    }
    response
}

pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok());
    match session::resolve(&state.repo, cookie).await {
        Ok(SessionLookup::Admin { session_id, .. } | SessionLookup::Orphaned { session_id }) => {
            if let Err(e) = session::end(&state.repo, session_id).await {
                tracing::warn!("Failed to end session {session_id}: {e}");
            }
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Session lookup failed during logout: {e}"),
    }
    signed_out_redirect(LOGIN_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(error_message("unauthorized"), Some("Unauthorized. Admin access only."));
        assert_eq!(error_message("<script>"), None);
    }
}
