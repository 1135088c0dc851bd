use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{Router, routing::get};

use super::admin::admin_router;
use super::api::api_router;
use super::site::{not_found, site_router};
use crate::auth::admin_gate;
use crate::content::ContentRepo;
use crate::store::Store;

pub struct AppState {
    pub repo: ContentRepo,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            repo: ContentRepo::new(store),
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(site_router())
        .nest("/api", api_router())
        .nest("/admin", admin_router())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), admin_gate))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
