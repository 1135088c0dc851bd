use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use super::session::{self, GuardDecision, LOGIN_PATH, SessionLookup};
use crate::server::AppState;
use crate::types::AdminUser;

/// The signed-in admin, placed in request extensions by [`admin_gate`].
#[derive(Debug, Clone)]
pub struct CurrentAdmin(pub AdminUser);

/// Admin session required for JSON endpoints outside `/admin`.
pub struct RequireAdminApi(pub AdminUser);

#[derive(Debug)]
pub enum AuthError {
    MissingSession,
    NotAdmin,
    InternalError,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingSession => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AuthError::NotAdmin => (StatusCode::UNAUTHORIZED, "Unauthorized. Admin access only."),
            AuthError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(COOKIE).and_then(|v| v.to_str().ok())
}

/// Redirects to the login page while clearing the session cookie.
pub fn signed_out_redirect(to: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    if let Ok(value) = HeaderValue::from_str(&session::clear_session_cookie()) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

/// Route guard for everything under `/admin`.
pub async fn admin_gate(State(state): State<Arc<AppState>>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if !path.starts_with("/admin") {
        return next.run(request).await;
    }

    let lookup = match session::resolve(&state.repo, cookie_header(request.headers())).await {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::warn!("Session lookup failed: {e}");
            SessionLookup::Invalid
        }
    };

    match session::decide(&path, lookup) {
        GuardDecision::Allow(admin) => {
            if let Some(admin) = admin {
                request.extensions_mut().insert(CurrentAdmin(admin));
            }
            next.run(request).await
        }
        GuardDecision::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
        GuardDecision::SignOut { session_id } => {
            if let Err(e) = session::end(&state.repo, session_id).await {
                tracing::error!("Failed to end session {session_id}: {e}");
            }
            signed_out_redirect(&format!("{LOGIN_PATH}?error=unauthorized"))
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentAdmin {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentAdmin>()
            .cloned()
            .ok_or_else(|| Redirect::to(LOGIN_PATH).into_response())
    }
}

impl FromRequestParts<Arc<AppState>> for RequireAdminApi {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let lookup = session::resolve(&state.repo, cookie_header(&parts.headers))
            .await
            .map_err(|e| {
                tracing::error!("Session lookup failed: {e}");
                AuthError::InternalError
            })?;

        match lookup {
            SessionLookup::Admin { admin, .. } => Ok(RequireAdminApi(admin)),
            SessionLookup::Orphaned { .. } => Err(AuthError::NotAdmin),
            SessionLookup::Missing | SessionLookup::Invalid => Err(AuthError::MissingSession),
        }
    }
}
