//! JSON API integration tests, driven through the full router.

mod common;

use axum::http::StatusCode;
use chrono::DateTime;
use serde_json::json;

use common::{TestApp, body_json, body_text};
use hilltop::store::row;
use hilltop::types::ContactSubmission;

#[tokio::test]
async fn test_contact_rejects_invalid_email() {
    let app = TestApp::sqlite();
    let response = app
        .post_json(
            "/api/contact",
            r#"{"name":"A","email":"bad","subject":"S","message":"M"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Invalid email format" }));
}

#[tokio::test]
async fn test_contact_requires_every_field() {
    let app = TestApp::sqlite();
    let response = app
        .post_json("/api/contact", r#"{"name":"A","email":"a@b.co","subject":"S"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn test_contact_echoes_submission() {
    let app = TestApp::sqlite();
    let response = app
        .post_json(
            "/api/contact",
            r#"{"name":"Ali","email":"ali@example.com","subject":"Fees","message":"Hello"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully");
    assert_eq!(body["data"]["name"], "Ali");
    assert_eq!(body["data"]["email"], "ali@example.com");
    assert_eq!(body["data"]["subject"], "Fees");
    let submitted = body["data"]["submittedAt"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(submitted).is_ok());

    // The JSON endpoint acknowledges without storing.
    assert_eq!(app.repo().count(hilltop::types::Table::ContactSubmissions).await.unwrap(), 0);
}

#[tokio::test]
async fn test_admission_echoes_submission() {
    let app = TestApp::sqlite();
    let response = app
        .post_json(
            "/api/admissions",
            r#"{"studentName":"Zara","parentName":"Omar","email":"omar@example.com","phone":"98765","classApplying":"Class 5"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Application submitted successfully");
    assert_eq!(body["data"]["studentName"], "Zara");
    assert_eq!(body["data"]["email"], "omar@example.com");
}

#[tokio::test]
async fn test_admission_missing_fields() {
    let app = TestApp::sqlite();
    let response = app
        .post_json("/api/admissions", r#"{"studentName":"Zara","email":"omar@example.com"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing required fields");
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let app = TestApp::sqlite();
    for uri in ["/api/contact", "/api/admissions"] {
        let response = app.post_json(uri, "{not json").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Internal server error" }));
    }
}

#[tokio::test]
async fn test_listing_requires_admin_session() {
    let app = TestApp::sqlite();
    let response = app.get("/api/contact", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));

    let response = app.get("/api/admissions", Some("hilltop_session=garbage")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_listing_with_admin_session() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let _: ContactSubmission = app
        .repo()
        .insert(row(json!({
            "name": "Ali",
            "email": "ali@example.com",
            "subject": "Transport",
            "message": "Is there a bus from Kangan?",
            "status": "pending",
        })))
        .await
        .unwrap();

    let response = app.get("/api/contact", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["messages"][0]["subject"], "Transport");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::offline();
    let response = app.get("/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}
