//! Editors for tables that hold one active row: hero, navbar, footer,
//! contact info and the about, academics and students page headings.
//!
//! The form is seeded from the active row, or from the literal fallback the
//! public page would show when there is none. Saving updates the active row
//! or inserts the first one.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::{Value, json};

use super::fields::{Choices, Field, parse_form};
use super::manager::{Flash, render_editor, to_row};
use super::views::{admin_page, alert, saved};
use crate::auth::CurrentAdmin;
use crate::content::ContentRepo;
use crate::error::Result;
use crate::pages::{about, academics, contact, home, layout, students};
use crate::server::AppState;
use crate::store::{Row, row};
use crate::types::{
    AboutPage, AcademicsPage, AdminUser, ContactInfo, FooterInfo, Hero, NavbarInfo, Record, StudentsPage,
};

pub trait Single: Record + Serialize {
    const SLUG: &'static str;
    const TITLE: &'static str;
    const FIELDS: &'static [Field];

    /// Values shown when the table has no active row yet.
    fn defaults() -> Row;
}

impl Single for Hero {
    const SLUG: &'static str = "hero";
    const TITLE: &'static str = "Hero Section";
    const FIELDS: &'static [Field] = &[
        Field::text("title", "Title").required(),
        Field::text("subtitle", "Subtitle").required(),
        Field::long("description", "Description").required(),
        Field::url("image_url", "Background Image URL"),
    ];

    fn defaults() -> Row {
        let hero = home::default_hero();
        row(json!({
            "title": hero.title,
            "subtitle": hero.subtitle,
            "description": hero.description,
            "image_url": hero.image_url,
        }))
    }
}

impl Single for NavbarInfo {
    const SLUG: &'static str = "navbar";
    const TITLE: &'static str = "Navbar";
    const FIELDS: &'static [Field] = &[
        Field::text("school_name", "School Name").required(),
        Field::text("tagline", "Tagline").required(),
        Field::text("logo_text", "Logo Text").required(),
        Field::text("phone", "Phone").required(),
        Field::email("email", "Email").required(),
        Field::text("address_short", "Short Address").required(),
    ];

    fn defaults() -> Row {
        let n = layout::default_navbar();
        row(json!({
            "school_name": n.school_name,
            "tagline": n.tagline,
            "logo_text": n.logo_text,
            "phone": n.phone,
            "email": n.email,
            "address_short": n.address_short,
        }))
    }
}

impl Single for FooterInfo {
    const SLUG: &'static str = "footer";
    const TITLE: &'static str = "Footer";
    const FIELDS: &'static [Field] = &[
        Field::text("school_name", "School Name").required(),
        Field::long("tagline", "Tagline").required(),
        Field::text("address", "Address").required(),
        Field::text("phone", "Phone").required(),
        Field::email("email", "Email").required(),
        Field::url("facebook_url", "Facebook URL"),
        Field::url("instagram_url", "Instagram URL"),
        Field::url("youtube_url", "YouTube URL"),
    ];

    fn defaults() -> Row {
        let f = layout::default_footer();
        row(json!({
            "school_name": f.school_name,
            "tagline": f.tagline,
            "address": f.address,
            "phone": f.phone,
            "email": f.email,
            "facebook_url": f.facebook_url,
            "instagram_url": f.instagram_url,
            "youtube_url": f.youtube_url,
        }))
    }
}

impl Single for ContactInfo {
    const SLUG: &'static str = "contact-info";
    const TITLE: &'static str = "Contact Info";
    const FIELDS: &'static [Field] = &[
        Field::text("section_heading", "Section Heading").required(),
        Field::long("section_description", "Section Description").required(),
        Field::text("address", "Address").required(),
        Field::text("phone", "Phone").required(),
        Field::email("email", "Email").required(),
        Field::text("office_hours", "Office Hours").required(),
    ];

    fn defaults() -> Row {
        let c = contact::default_contact();
        row(json!({
            "section_heading": c.heading,
            "section_description": c.description,
            "address": c.address,
            "phone": c.phone,
            "email": c.email,
            "office_hours": c.office_hours,
        }))
    }
}

impl Single for AboutPage {
    const SLUG: &'static str = "about";
    const TITLE: &'static str = "About Page";
    const FIELDS: &'static [Field] = &[
        Field::text("hero_title", "Hero Title").required(),
        Field::text("hero_subtitle", "Hero Subtitle").required(),
        Field::text("legacy_heading", "Legacy Heading").required(),
        Field::long("legacy_content", "Legacy Content").required(),
    ];

    fn defaults() -> Row {
        let a = about::default_about();
        row(json!({
            "hero_title": a.hero_title,
            "hero_subtitle": a.hero_subtitle,
            "legacy_heading": a.legacy_heading,
            "legacy_content": a.legacy_content,
        }))
    }
}

impl Single for AcademicsPage {
    const SLUG: &'static str = "academics";
    const TITLE: &'static str = "Academics Page";
    const FIELDS: &'static [Field] = &[
        Field::text("hero_title", "Hero Title").required(),
        Field::text("hero_subtitle", "Hero Subtitle").required(),
        Field::text("curriculum_heading", "Curriculum Heading").required(),
        Field::long("curriculum_description", "Curriculum Description").required(),
    ];

    fn defaults() -> Row {
        let a = academics::default_academics();
        row(json!({
            "hero_title": a.hero_title,
            "hero_subtitle": a.hero_subtitle,
            "curriculum_heading": a.curriculum_heading,
            "curriculum_description": a.curriculum_description,
        }))
    }
}

impl Single for StudentsPage {
    const SLUG: &'static str = "students-page";
    const TITLE: &'static str = "Students Page";
    const FIELDS: &'static [Field] = &[
        Field::text("hero_title", "Hero Title").required(),
        Field::text("hero_subtitle", "Hero Subtitle").required(),
        Field::text("downloads_heading", "Downloads Heading").required(),
        Field::text("elibrary_heading", "E-Library Heading").required(),
        Field::long("elibrary_description", "E-Library Description").required(),
        Field::text("achievements_heading", "Achievements Heading").required(),
        Field::text("alumni_heading", "Alumni Heading").required(),
        Field::long("alumni_description", "Alumni Description").required(),
    ];

    fn defaults() -> Row {
        let h = students::default_headings();
        row(json!({
            "hero_title": h.hero_title,
            "hero_subtitle": h.hero_subtitle,
            "downloads_heading": h.downloads_heading,
            "elibrary_heading": h.elibrary_heading,
            "elibrary_description": h.elibrary_description,
            "achievements_heading": h.achievements_heading,
            "alumni_heading": h.alumni_heading,
            "alumni_description": h.alumni_description,
        }))
    }
}

pub fn routes<T: Single>() -> Router<Arc<AppState>> {
    Router::new().route(&format!("/{}", T::SLUG), get(edit::<T>).post(save::<T>))
}

fn page<T: Single>(admin: &AdminUser, values: &Row, banner: &str) -> Html<String> {
    let action = format!("/admin/{}", T::SLUG);
    let body = render_editor(&action, T::FIELDS, Some(values), &Choices::new(), banner, "/admin/dashboard");
    admin_page(admin, T::TITLE, T::SLUG, &body)
}

async fn edit<T: Single>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Query(flash): Query<Flash>,
) -> Html<String> {
    let banner = flash.message().map(saved).unwrap_or_default();
    match state.repo.single_active::<T>().await {
        Ok(Some(current)) => page::<T>(&admin, &to_row(&current), &banner),
        Ok(None) => page::<T>(&admin, &T::defaults(), &banner),
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", T::TABLE);
            page::<T>(&admin, &T::defaults(), &alert("Failed to load saved content. Showing defaults."))
        }
    }
}

/// Writes `values` to the active row, inserting one when none exists.
pub async fn store_single<T: Single>(repo: &ContentRepo, mut values: Row) -> Result<T> {
    match repo.single_active::<T>().await? {
        Some(current) => repo.update::<T>(current.id(), values).await,
        None => {
            values.insert("is_active".into(), Value::Bool(true));
            repo.insert::<T>(values).await
        }
    }
}

async fn save<T: Single>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let shown: Row = form
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    let values = match parse_form(T::FIELDS, &form) {
        Ok(values) => values,
        Err(message) => return page::<T>(&admin, &shown, &alert(&message)).into_response(),
    };

    match store_single::<T>(&state.repo, values).await {
        Ok(_) => {
            tracing::info!("{} saved {}", admin.email, T::TABLE);
            Redirect::to(&format!("/admin/{}?saved=updated", T::SLUG)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to save {}: {e}", T::TABLE);
            page::<T>(&admin, &shown, &alert("Failed to save changes. Please try again.")).into_response()
        }
    }
}

async fn seed_one<T: Single>(repo: &ContentRepo) -> Result<bool> {
    if repo.single_active::<T>().await?.is_some() {
        return Ok(false);
    }
    let mut values = T::defaults();
    values.insert("is_active".into(), Value::Bool(true));
    repo.insert::<T>(values).await?;
    Ok(true)
}

/// Inserts the default row into every single-row table that has no active
/// row. Returns how many tables were seeded.
pub async fn seed_defaults(repo: &ContentRepo) -> Result<usize> {
    let seeded = [
        seed_one::<Hero>(repo).await?,
        seed_one::<NavbarInfo>(repo).await?,
        seed_one::<FooterInfo>(repo).await?,
        seed_one::<ContactInfo>(repo).await?,
        seed_one::<AboutPage>(repo).await?,
        seed_one::<AcademicsPage>(repo).await?,
        seed_one::<StudentsPage>(repo).await?,
    ];
    Ok(seeded.into_iter().filter(|s| *s).count())
}
