//! The admin dashboard under `/admin`.
//!
//! Every route here except the login page sits behind
//! [`crate::auth::admin_gate`], which places the signed-in admin in request
//! extensions for [`crate::auth::CurrentAdmin`].

mod dashboard;
mod fields;
mod inbox;
mod login;
mod manager;
mod managers;
mod optimistic;
mod singleton;
mod views;

use std::sync::Arc;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::server::AppState;
use crate::types::{
    AboutPage, AcademicsPage, AdmissionApplication, AlumniStat, Circular, ContactInfo, ContactSubmission,
    ElibraryResource, FacultyMember, FooterInfo, GalleryCategory, GalleryPhoto, Hero, HeroImage, Highlight,
    MenuItem, NavbarInfo, NewsItem, Notice, Stat, StudentAchievement, StudentDownload, StudentsPage,
};

pub use singleton::seed_defaults;

pub fn admin_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(|| async { Redirect::to(login::DASHBOARD_PATH) }))
        .route("/login", get(login::show).post(login::submit))
        .route("/logout", post(login::logout))
        .route("/dashboard", get(dashboard::show))
        // Single-row sections
        .merge(singleton::routes::<Hero>())
        .merge(singleton::routes::<NavbarInfo>())
        .merge(singleton::routes::<FooterInfo>())
        .merge(singleton::routes::<ContactInfo>())
        .merge(singleton::routes::<AboutPage>())
        .merge(singleton::routes::<AcademicsPage>())
        .merge(singleton::routes::<StudentsPage>())
        // Lists
        .merge(manager::routes::<NewsItem>())
        .merge(manager::routes::<Circular>())
        .merge(manager::routes::<FacultyMember>())
        .merge(manager::routes::<GalleryPhoto>())
        .merge(manager::routes::<GalleryCategory>())
        .merge(manager::routes::<Notice>())
        .merge(manager::routes::<Stat>())
        .merge(manager::routes::<Highlight>())
        .merge(manager::routes::<HeroImage>())
        .merge(manager::routes::<StudentDownload>())
        .merge(manager::routes::<ElibraryResource>())
        .merge(manager::routes::<StudentAchievement>())
        .merge(manager::routes::<AlumniStat>())
        .merge(manager::routes::<MenuItem>())
        // Submissions
        .merge(inbox::routes::<ContactSubmission>())
        .merge(inbox::routes::<AdmissionApplication>())
}
