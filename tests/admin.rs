//! Admin dashboard flows: sign-in, the route guard, and content managers.

mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{ADMIN_EMAIL, TestApp, body_text, location};
use hilltop::store::row;
use hilltop::types::{
    AboutPage, AdminUser, ContactStatus, ContactSubmission, FacultyMember, GalleryPhoto, HeroImage, NewsItem,
};

#[tokio::test]
async fn test_guard_redirects_anonymous_requests() {
    let app = TestApp::sqlite();
    for uri in ["/admin", "/admin/dashboard", "/admin/news", "/admin/news/new", "/admin/hero"] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&response), "/admin/login", "{uri}");
    }

    let response = app.get("/admin/login", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Admin Login"));
}

#[tokio::test]
async fn test_login_rejects_bad_password() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;

    let body = format!("email={ADMIN_EMAIL}&password=wrong");
    let response = app.post_form("/admin/login", &body, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(body_text(response).await.contains("Invalid login credentials"));
}

#[tokio::test]
async fn test_login_rejects_unknown_email() {
    let app = TestApp::sqlite();
    let response = app
        .post_form("/admin/login", "email=someone%40example.com&password=whatever", None)
        .await;
    assert!(body_text(response).await.contains("Invalid login credentials"));
}

#[tokio::test]
async fn test_inactive_admin_cannot_sign_in() {
    let app = TestApp::sqlite();
    app.create_admin(false).await;

    let body = format!(
        "email={ADMIN_EMAIL}&password={}",
        urlencoding::encode(common::ADMIN_PASSWORD)
    );
    let response = app.post_form("/admin/login", &body, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Unauthorized. Admin access only."));
}

#[tokio::test]
async fn test_login_opens_dashboard() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;
    assert!(cookie.starts_with("hilltop_session=hilltop_"));

    let response = app.get("/admin/dashboard", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Welcome back, Farah Wani!"));
    assert!(html.contains("News Articles"));

    let response = app.get("/admin/login", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");
}

#[tokio::test]
async fn test_deactivated_admin_is_signed_out() {
    let app = TestApp::sqlite();
    let admin = app.create_admin(true).await;
    let cookie = app.login().await;

    let _: AdminUser = app
        .repo()
        .update(admin.id, row(json!({ "is_active": false })))
        .await
        .unwrap();

    let response = app.get("/admin/news", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login?error=unauthorized");
    let cleared = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cleared.contains("Max-Age=0"));

    let html = body_text(app.get("/admin/login?error=unauthorized", None).await).await;
    assert!(html.contains("Unauthorized. Admin access only."));

    // The session row is gone, so the old cookie no longer resolves.
    let response = app.get("/admin/news", Some(&cookie)).await;
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let response = app.post_form("/admin/logout", "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    let response = app.get("/admin/dashboard", Some(&cookie)).await;
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_create_news_from_form() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let response = app
        .post_form(
            "/admin/news",
            "title=Science+Fair+Winners&content=Our+students+took+first+place.&category=Achievement&news_date=2025-11-20&is_active=on",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/news?saved=created");

    let html = body_text(app.get("/admin/news?saved=created", Some(&cookie)).await).await;
    assert!(html.contains("Item created successfully!"));
    assert!(html.contains("Science Fair Winners"));

    let html = body_text(app.get("/news", None).await).await;
    assert!(html.contains("Science Fair Winners"));
}

#[tokio::test]
async fn test_invalid_form_is_redisplayed() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let response = app
        .post_form(
            "/admin/news",
            "title=&content=Draft+body&category=Event&news_date=2025-11-20",
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"role="alertdialog""#));
    assert!(html.contains("Title is required."));
    assert!(html.contains("Draft body"));
    assert_eq!(app.repo().all::<NewsItem>().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_deleted_items_stay_deleted() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let member: FacultyMember = app
        .repo()
        .insert(row(json!({ "name": "Imran Lone", "position": "PGT Physics", "display_order": 1 })))
        .await
        .unwrap();
    let news: NewsItem = app
        .repo()
        .insert(row(json!({
            "title": "Exam Schedule",
            "content": "Dates announced.",
            "category": "General",
            "news_date": "2025-11-01",
        })))
        .await
        .unwrap();
    let photo: GalleryPhoto = app
        .repo()
        .insert(row(json!({ "title": "Sports Day Relay", "image_url": "/img/relay.jpg" })))
        .await
        .unwrap();

    for (uri, gone) in [
        (format!("/admin/faculty/{}/delete", member.id), "Imran Lone"),
        (format!("/admin/news/{}/delete", news.id), "Exam Schedule"),
        (format!("/admin/gallery/{}/delete", photo.id), "Sports Day Relay"),
    ] {
        let response = app.post_form(&uri, "", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let html = body_text(response).await;
        assert!(html.contains("Item deleted successfully!"), "{uri}");
        assert!(!html.contains(gone), "{uri}");
    }

    assert!(app.repo().get::<FacultyMember>(member.id).await.unwrap().is_none());
    assert!(app.repo().get::<NewsItem>(news.id).await.unwrap().is_none());
    assert!(app.repo().get::<GalleryPhoto>(photo.id).await.unwrap().is_none());

    let html = body_text(app.get("/admin/faculty", Some(&cookie)).await).await;
    assert!(!html.contains("Imran Lone"));

    // Deleting again reports the miss and keeps the list as it was.
    let response = app
        .post_form(&format!("/admin/news/{}/delete", news.id), "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Item not found."));
}

#[tokio::test]
async fn test_toggle_keeps_display_order() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let first: HeroImage = app
        .repo()
        .insert(row(json!({ "image_url": "/img/campus.jpg", "display_order": 1 })))
        .await
        .unwrap();
    let second: HeroImage = app
        .repo()
        .insert(row(json!({ "image_url": "/img/library.jpg", "display_order": 2 })))
        .await
        .unwrap();

    let response = app
        .post_form(&format!("/admin/hero-images/{}/toggle", first.id), "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Status updated successfully!"));

    let toggled = app.repo().get::<HeroImage>(first.id).await.unwrap().unwrap();
    assert!(!toggled.is_active);
    assert_eq!(toggled.display_order, 1);

    let untouched = app.repo().get::<HeroImage>(second.id).await.unwrap().unwrap();
    assert!(untouched.is_active);
    assert_eq!(untouched.display_order, 2);
}

#[tokio::test]
async fn test_contact_status_update() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let message: ContactSubmission = app
        .repo()
        .insert(row(json!({
            "name": "Ali",
            "email": "ali@example.com",
            "subject": "Fees",
            "message": "When are fees due?",
        })))
        .await
        .unwrap();
    assert_eq!(message.status, ContactStatus::Pending);

    let uri = format!("/admin/contacts/{}/status", message.id);
    let response = app.post_form(&uri, "status=replied", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Status updated successfully!"));

    let stored = app.repo().get::<ContactSubmission>(message.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ContactStatus::Replied);

    let response = app.post_form(&uri, "status=resolved", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let stored = app.repo().get::<ContactSubmission>(message.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ContactStatus::Resolved);

    let response = app.post_form(&uri, "status=archived", Some(&cookie)).await;
    assert!(body_text(response).await.contains("Unknown status."));
}

#[tokio::test]
async fn test_resolved_messages_are_listed() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    for (name, status) in [("Ali", "pending"), ("Sana", "resolved")] {
        let _: ContactSubmission = app
            .repo()
            .insert(row(json!({
                "name": name,
                "email": "parent@example.com",
                "subject": "Transport",
                "message": "Bus timings?",
                "status": status,
            })))
            .await
            .unwrap();
    }

    let messages = app.repo().all::<ContactSubmission>().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().any(|m| m.status == ContactStatus::Resolved));

    let html = body_text(app.get("/admin/contacts", Some(&cookie)).await).await;
    assert!(html.contains("Ali"));
    assert!(html.contains("Sana"));
    assert!(html.contains(r#"<option value="resolved" selected>"#));
}

#[tokio::test]
async fn test_single_row_editor() {
    let app = TestApp::sqlite();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let html = body_text(app.get("/admin/about", Some(&cookie)).await).await;
    assert!(html.contains(r#"value="About Us""#));

    let response = app
        .post_form(
            "/admin/about",
            "hero_title=Who+We+Are&hero_subtitle=Since+1995&legacy_heading=Our+Story&legacy_content=Founded+in+Darend.",
            Some(&cookie),
        )
        .await;
    assert_eq!(location(&response), "/admin/about?saved=updated");

    let about = app.repo().single_active::<AboutPage>().await.unwrap().unwrap();
    assert_eq!(about.legacy_heading, "Our Story");

    let html = body_text(app.get("/about", None).await).await;
    assert!(html.contains("Our Story"));
    assert!(html.contains("Founded in Darend."));
}

#[tokio::test]
async fn test_failed_delete_keeps_list() {
    let (app, store) = TestApp::flaky();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let member: FacultyMember = app
        .repo()
        .insert(row(json!({ "name": "Imran Lone", "position": "PGT Physics", "display_order": 1 })))
        .await
        .unwrap();
    store.fail_writes();

    let response = app
        .post_form(&format!("/admin/faculty/{}/delete", member.id), "", Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"role="alertdialog""#));
    assert!(html.contains("Failed to delete item. Please try again."));
    assert!(html.contains("Imran Lone"));
    assert!(app.repo().get::<FacultyMember>(member.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_failed_toggle_keeps_prior_state() {
    let (app, store) = TestApp::flaky();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let image: HeroImage = app
        .repo()
        .insert(row(json!({ "image_url": "/img/campus.jpg", "display_order": 1 })))
        .await
        .unwrap();
    store.fail_writes();

    let response = app
        .post_form(&format!("/admin/hero-images/{}/toggle", image.id), "", Some(&cookie))
        .await;
    let html = body_text(response).await;
    assert!(html.contains(r#"role="alertdialog""#));
    assert!(html.contains("Failed to update status. Please try again."));
    assert!(html.contains("/img/campus.jpg"));
    assert!(app.repo().get::<HeroImage>(image.id).await.unwrap().unwrap().is_active);
}

#[tokio::test]
async fn test_failed_status_change_keeps_inbox() {
    let (app, store) = TestApp::flaky();
    app.create_admin(true).await;
    let cookie = app.login().await;

    let message: ContactSubmission = app
        .repo()
        .insert(row(json!({
            "name": "Ali",
            "email": "ali@example.com",
            "subject": "Fees",
            "message": "When are fees due?",
        })))
        .await
        .unwrap();
    store.fail_writes();

    let uri = format!("/admin/contacts/{}/status", message.id);
    let html = body_text(app.post_form(&uri, "status=replied", Some(&cookie)).await).await;
    assert!(html.contains(r#"role="alertdialog""#));
    assert!(html.contains("Failed to update status. Please try again."));
    assert!(html.contains(r#"<option value="pending" selected>"#));

    let html = body_text(
        app.post_form(&format!("/admin/contacts/{}/delete", message.id), "", Some(&cookie))
            .await,
    )
    .await;
    assert!(html.contains("Failed to delete item. Please try again."));
    assert!(html.contains("When are fees due?"));

    let stored = app.repo().get::<ContactSubmission>(message.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ContactStatus::Pending);
}
