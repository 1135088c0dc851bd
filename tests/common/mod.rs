#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use hilltop::auth::hash_password;
use hilltop::content::ContentRepo;
use hilltop::error::{Error, Result};
use hilltop::server::{AppState, create_router};
use hilltop::store::{OfflineStore, Query, Row, SqliteStore, Store, row};
use hilltop::types::{AdminUser, Table};

pub const ADMIN_EMAIL: &str = "principal@hilltop.edu";
pub const ADMIN_PASSWORD: &str = "correct horse battery";

/// SQLite store whose content writes can be switched to fail. Admin accounts
/// and sessions are never affected, so a signed-in admin stays signed in.
pub struct FlakyStore {
    inner: SqliteStore,
    failing: AtomicBool,
}

impl FlakyStore {
    pub fn fail_writes(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self, table: Table) -> Result<()> {
        let auth = matches!(table, Table::AdminUsers | Table::AdminSessions);
        if self.failing.load(Ordering::SeqCst) && !auth {
            return Err(Error::Service {
                status: 503,
                message: "service unavailable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Store for FlakyStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>> {
        self.inner.select(table, query).await
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row> {
        self.check(table)?;
        self.inner.insert(table, row).await
    }

    async fn update(&self, table: Table, id: i64, patch: Row) -> Result<Row> {
        self.check(table)?;
        self.inner.update(table, id, patch).await
    }

    async fn delete(&self, table: Table, id: i64) -> Result<bool> {
        self.check(table)?;
        self.inner.delete(table, id).await
    }
}

pub struct TestApp {
    pub temp_dir: Option<TempDir>,
    pub state: Arc<AppState>,
    router: Router,
}

impl TestApp {
    pub fn sqlite() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let store = SqliteStore::new(temp_dir.path().join("hilltop.db")).expect("open db");
        store.initialize().expect("initialize schema");
        Self::with_store(Arc::new(store), Some(temp_dir))
    }

    /// An app over a [`FlakyStore`], returned alongside so a test can break writes.
    pub fn flaky() -> (Self, Arc<FlakyStore>) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let inner = SqliteStore::new(temp_dir.path().join("hilltop.db")).expect("open db");
        inner.initialize().expect("initialize schema");
        let store = Arc::new(FlakyStore {
            inner,
            failing: AtomicBool::new(false),
        });
        (Self::with_store(store.clone(), Some(temp_dir)), store)
    }

    pub fn offline() -> Self {
        Self::with_store(Arc::new(OfflineStore), None)
    }

    pub fn with_store(store: Arc<dyn Store>, temp_dir: Option<TempDir>) -> Self {
        let state = Arc::new(AppState::new(store));
        Self {
            temp_dir,
            router: create_router(state.clone()),
            state,
        }
    }

    pub fn repo(&self) -> &ContentRepo {
        &self.state.repo
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::get(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).expect("request")).await
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).expect("request")).await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    pub async fn create_admin(&self, active: bool) -> AdminUser {
        self.repo()
            .insert(row(json!({
                "email": ADMIN_EMAIL,
                "full_name": "Farah Wani",
                "password_hash": hash_password(ADMIN_PASSWORD).expect("hash"),
                "is_active": active,
            })))
            .await
            .expect("insert admin")
    }

    /// Signs in through the login form and returns the `Cookie` header value.
    pub async fn login(&self) -> String {
        let body = format!("email={}&password={}", ADMIN_EMAIL, urlencoding::encode(ADMIN_PASSWORD));
        let response = self.post_form("/admin/login", &body, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie")
            .to_str()
            .expect("ascii cookie");
        set_cookie.split(';').next().expect("cookie pair").to_string()
    }
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.expect("read body").to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.expect("read body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
