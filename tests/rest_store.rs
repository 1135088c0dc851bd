//! RestStore against a local stub of the hosted row service.

mod common;

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};

use common::{TestApp, body_text};
use hilltop::error::Error;
use hilltop::store::{Order, Query, RestStore, Store, row};
use hilltop::types::Table;

const KEY: &str = "test-service-key";

#[derive(Default)]
struct Seen {
    queries: Mutex<Vec<String>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers.get("authorization").and_then(|v| v.to_str().ok());
    apikey == Some(KEY) && bearer == Some(format!("Bearer {KEY}").as_str())
}

async fn select(
    State(seen): State<Arc<Seen>>,
    Path(table): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "bad key" }))).into_response();
    }
    seen.queries.lock().unwrap().push(query.unwrap_or_default());

    match table.as_str() {
        "notices" => Json(json!([
            { "id": 1, "message": "Hosted notice one", "display_order": 1, "is_active": true },
            { "id": 2, "message": "Hosted notice two", "display_order": 2, "is_active": true },
        ]))
        .into_response(),
        "stats" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "boom" }))).into_response(),
        _ => Json(json!([])).into_response(),
    }
}

async fn insert(Path(table): Path<String>, headers: HeaderMap, Json(mut body): Json<Value>) -> Response {
    let wants_rows = headers.get("prefer").and_then(|v| v.to_str().ok()) == Some("return=representation");
    if table != "contact_submissions" || !wants_rows {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "unexpected insert" }))).into_response();
    }
    body["id"] = json!(41);
    body["created_at"] = json!("2025-11-20T10:00:00Z");
    Json(json!([body])).into_response()
}

async fn update() -> Json<Value> {
    Json(json!([]))
}

async fn start_stub() -> (String, Arc<Seen>) {
    let seen = Arc::new(Seen::default());
    let app = Router::new()
        .route("/rest/v1/{table}", get(select).post(insert).patch(update))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/"), seen)
}

#[tokio::test]
async fn test_select_sends_filters_and_order() {
    let (url, seen) = start_stub().await;
    let store = RestStore::new(url, KEY).unwrap();

    let rows = store
        .select(Table::Notices, &Query::active().order(Order::asc("display_order")).limit(5))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["message"], "Hosted notice one");

    let query = seen.queries.lock().unwrap()[0].clone();
    assert!(query.contains("select=*"), "{query}");
    assert!(query.contains("is_active=eq.true"), "{query}");
    assert!(query.contains("order=display_order.asc"), "{query}");
    assert!(query.contains("limit=5"), "{query}");
}

#[tokio::test]
async fn test_unknown_columns_never_reach_the_service() {
    let (url, seen) = start_stub().await;
    let store = RestStore::new(url, KEY).unwrap();

    let err = store
        .select(Table::Notices, &Query::new().eq("password", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownColumn { .. }));
    assert!(seen.queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_service_error_message_is_kept() {
    let (url, _seen) = start_stub().await;
    let store = RestStore::new(url, KEY).unwrap();

    let err = store.select(Table::Stats, &Query::new()).await.unwrap_err();
    match err {
        Error::Service { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let (url, _seen) = start_stub().await;
    let store = RestStore::new(url, KEY).unwrap();

    let stored = store
        .insert(
            Table::ContactSubmissions,
            row(json!({ "name": "Ali", "email": "ali@example.com", "subject": "Fees", "message": "Hi" })),
        )
        .await
        .unwrap();
    assert_eq!(stored["id"], 41);
    assert_eq!(stored["name"], "Ali");
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let (url, _seen) = start_stub().await;
    let store = RestStore::new(url, KEY).unwrap();

    let err = store
        .update(Table::Notices, 99, row(json!({ "is_active": false })))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn test_home_page_reads_hosted_notices() {
    let (url, _seen) = start_stub().await;
    let store = RestStore::new(url, KEY).unwrap();
    let app = TestApp::with_store(Arc::new(store), None);

    let html = body_text(app.get("/", None).await).await;
    assert_eq!(html.matches("Hosted notice two").count(), 2);
    // Stats failed upstream, so the built-in stats show instead.
    assert!(html.contains("Students"));
}
