use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Query, State},
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;

use super::AppState;
use crate::pages::{
    self, Chrome, about, academics, activities, admissions, contact, faculty, gallery, home,
    infrastructure, news, render_page, students,
};

pub fn site_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home_page))
        .route("/about", get(about_page))
        .route("/academics", get(academics_page))
        .route("/admissions", get(admissions_page).post(submit_admission))
        .route("/faculty", get(faculty_page))
        .route("/gallery", get(gallery_page))
        .route("/contact", get(contact_page).post(submit_contact))
        .route("/news", get(news_page))
        .route("/news/subscribe", post(subscribe))
        .route("/students", get(students_page))
        .route("/activities", get(activities_page))
        .route("/infrastructure", get(infrastructure_page))
}

async fn home_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (chrome, view) = tokio::join!(Chrome::load(&state.repo), home::load(&state.repo));
    Html(render_page(&chrome, "Home", "/", &home::render(&view)))
}

async fn about_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (chrome, view) = tokio::join!(Chrome::load(&state.repo), about::load(&state.repo));
    Html(render_page(&chrome, "About Us", "/about", &about::render(&view)))
}

async fn academics_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (chrome, view) = tokio::join!(Chrome::load(&state.repo), academics::load(&state.repo));
    Html(render_page(&chrome, "Academics", "/academics", &academics::render(&view)))
}

async fn admissions_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let chrome = Chrome::load(&state.repo).await;
    let content = admissions::render(None, &admissions::AdmissionForm::default());
    Html(render_page(&chrome, "Admissions", "/admissions", &content))
}

async fn submit_admission(
    State(state): State<Arc<AppState>>,
    Form(form): Form<admissions::AdmissionForm>,
) -> Html<String> {
    let (chrome, (banner, form)) = tokio::join!(
        Chrome::load(&state.repo),
        admissions::submit(&state.repo, form)
    );
    let content = admissions::render(Some(&banner), &form);
    Html(render_page(&chrome, "Admissions", "/admissions", &content))
}

async fn faculty_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (chrome, members) = tokio::join!(Chrome::load(&state.repo), faculty::load(&state.repo));
    Html(render_page(&chrome, "Our Faculty", "/faculty", &faculty::render(&members)))
}

#[derive(Debug, Default, Deserialize)]
struct GalleryParams {
    category: Option<String>,
}

async fn gallery_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GalleryParams>,
) -> Html<String> {
    let category = params.category.and_then(|c| c.trim().parse::<i64>().ok());
    let (chrome, view) = tokio::join!(
        Chrome::load(&state.repo),
        gallery::load(&state.repo, category)
    );
    Html(render_page(&chrome, "Gallery", "/gallery", &gallery::render(&view)))
}

async fn contact_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (chrome, page) = tokio::join!(Chrome::load(&state.repo), contact::load(&state.repo));
    Html(render_page(&chrome, "Contact Us", "/contact", &contact::render(&page)))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(form): Form<contact::ContactForm>,
) -> Html<String> {
    let (chrome, mut page, (banner, form)) = tokio::join!(
        Chrome::load(&state.repo),
        contact::load(&state.repo),
        contact::submit(&state.repo, form)
    );
    page.banner = Some(banner);
    page.form = form;
    Html(render_page(&chrome, "Contact Us", "/contact", &contact::render(&page)))
}

async fn news_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (chrome, page) = tokio::join!(Chrome::load(&state.repo), news::load(&state.repo));
    Html(render_page(&chrome, "News & Updates", "/news", &news::render(&page, None)))
}

async fn subscribe(
    State(state): State<Arc<AppState>>,
    Form(form): Form<news::SubscribeForm>,
) -> Html<String> {
    let banner = news::subscribe(&form);
    let (chrome, page) = tokio::join!(Chrome::load(&state.repo), news::load(&state.repo));
    Html(render_page(&chrome, "News & Updates", "/news", &news::render(&page, Some(&banner))))
}

async fn students_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let (chrome, view) = tokio::join!(Chrome::load(&state.repo), students::load(&state.repo));
    Html(render_page(&chrome, "Students Corner", "/students", &students::render(&view)))
}

async fn activities_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let chrome = Chrome::load(&state.repo).await;
    Html(render_page(&chrome, "Co-curricular Activities", "/activities", &activities::render()))
}

async fn infrastructure_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let chrome = Chrome::load(&state.repo).await;
    Html(render_page(
        &chrome,
        "Infrastructure",
        "/infrastructure",
        &infrastructure::render(),
    ))
}

/// Last-resort page when a route renders nothing but the site chrome.
pub async fn not_found(State(state): State<Arc<AppState>>) -> (axum::http::StatusCode, Html<String>) {
    let chrome = Chrome::load(&state.repo).await;
    let content = format!(
        r#"{}<section style="text-align:center;"><a class="button" href="/">Back to Home</a></section>"#,
        pages::html::page_hero("Page Not Found", "The page you are looking for does not exist.")
    );
    (
        axum::http::StatusCode::NOT_FOUND,
        Html(render_page(&chrome, "Page Not Found", "", &content)),
    )
}
