//! Public page rendering through the full router.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TestApp, body_text};
use hilltop::store::row;
use hilltop::types::{AboutPage, ContactSubmission, Notice, Table};

#[tokio::test]
async fn test_offline_pages_render_fallbacks() {
    let app = TestApp::offline();

    let html = body_text(app.get("/about", None).await).await;
    assert!(html.contains("Our Legacy"));
    assert!(html.contains("Empowering minds and building futures since 1995"));

    let html = body_text(app.get("/faculty", None).await).await;
    assert!(html.contains("Support Staff"));
}

#[tokio::test]
async fn test_every_public_route_renders() {
    let app = TestApp::offline();
    for uri in [
        "/",
        "/about",
        "/academics",
        "/admissions",
        "/faculty",
        "/gallery",
        "/contact",
        "/news",
        "/students",
        "/activities",
        "/infrastructure",
    ] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let html = body_text(response).await;
        assert!(html.contains("Hilltop Educational Institute"), "{uri}");
    }
}

#[tokio::test]
async fn test_home_marquee_shows_each_notice_twice() {
    let app = TestApp::offline();
    let html = body_text(app.get("/", None).await).await;
    assert_eq!(html.matches("Annual Sports Day - 25th November 2025").count(), 2);
}

#[tokio::test]
async fn test_stored_content_replaces_fallback() {
    let app = TestApp::sqlite();
    let _: AboutPage = app
        .repo()
        .insert(row(json!({
            "hero_title": "Who We Are",
            "hero_subtitle": "Three decades in Ganderbal",
            "legacy_heading": "Where We Began",
            "legacy_content": "First paragraph.\n\nSecond paragraph.",
        })))
        .await
        .unwrap();
    let _: Notice = app
        .repo()
        .insert(row(json!({ "message": "Library closed on Friday", "display_order": 1 })))
        .await
        .unwrap();

    let html = body_text(app.get("/about", None).await).await;
    assert!(html.contains("Where We Began"));
    assert!(html.contains("<p>Second paragraph.</p>"));
    assert!(!html.contains("Our Legacy"));

    let html = body_text(app.get("/", None).await).await;
    assert_eq!(html.matches("Library closed on Friday").count(), 2);
    assert!(!html.contains("Annual Sports Day"));
}

#[tokio::test]
async fn test_contact_form_stores_message() {
    let app = TestApp::sqlite();
    let response = app
        .post_form(
            "/contact",
            "name=Ali&email=ali%40example.com&phone=&subject=Transport&message=Bus+timings%3F",
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Message Sent!"));

    let stored: Vec<ContactSubmission> = app.repo().all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].subject, "Transport");
    assert_eq!(stored[0].phone, None);
}

#[tokio::test]
async fn test_contact_form_rejects_bad_email() {
    let app = TestApp::sqlite();
    let html = body_text(
        app.post_form(
            "/contact",
            "name=Ali&email=nope&subject=Transport&message=Hi",
            None,
        )
        .await,
    )
    .await;
    assert!(html.contains("Please enter a valid email address."));
    assert!(html.contains(r#"value="Ali""#));
    assert_eq!(app.repo().count(Table::ContactSubmissions).await.unwrap(), 0);
}

#[tokio::test]
async fn test_admission_form_offline_reports_failure() {
    let app = TestApp::offline();
    let html = body_text(
        app.post_form(
            "/admissions",
            "student_name=Zara&parent_name=Omar&email=omar%40example.com&phone=98765&class_applying=Class+5",
            None,
        )
        .await,
    )
    .await;
    assert!(html.contains("Failed to submit application. Please try again."));
}

#[tokio::test]
async fn test_gallery_ignores_unparsable_category() {
    let app = TestApp::offline();
    let response = app.get("/gallery?category=abc", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found_page() {
    let app = TestApp::offline();
    let response = app.get("/principal-desk", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page Not Found"));
}
