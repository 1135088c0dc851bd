//! Contact messages and admission applications submitted from the public site.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;

use super::optimistic::{ListCommand, Pending, Snapshot};
use super::views::{admin_page, alert, delete_button, saved};
use crate::auth::CurrentAdmin;
use crate::content::ContentRepo;
use crate::pages::escape;
use crate::pages::html::display_date;
use crate::server::AppState;
use crate::store::row;
use crate::types::{AdminUser, AdmissionApplication, AdmissionStatus, ContactStatus, ContactSubmission, Record};

/// A submission status that can be shown in and parsed from a select.
pub trait StatusValue: Copy + PartialEq + Display + FromStr + Send + Sync + 'static {}

impl<S: Copy + PartialEq + Display + FromStr + Send + Sync + 'static> StatusValue for S {}

pub trait Inbox: Record + Snapshot {
    const SLUG: &'static str;
    const TITLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const STATUSES: &'static [Self::Status];

    fn cells(&self) -> Vec<String>;

    fn status(&self) -> Self::Status;
}

fn received(at: &chrono::DateTime<chrono::Utc>) -> String {
    display_date(&at.format("%Y-%m-%d").to_string())
}

impl Inbox for ContactSubmission {
    const SLUG: &'static str = "contacts";
    const TITLE: &'static str = "Contact Messages";
    const COLUMNS: &'static [&'static str] = &["Name", "Email", "Phone", "Subject", "Message", "Received"];
    const STATUSES: &'static [ContactStatus] = &ContactStatus::ALL;

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.phone.clone().unwrap_or_else(|| "-".into()),
            self.subject.clone(),
            self.message.clone(),
            received(&self.created_at),
        ]
    }

    fn status(&self) -> ContactStatus {
        self.status
    }
}

impl Inbox for AdmissionApplication {
    const SLUG: &'static str = "admissions";
    const TITLE: &'static str = "Admission Applications";
    const COLUMNS: &'static [&'static str] = &[
        "Student",
        "Parent",
        "Email",
        "Phone",
        "Class",
        "Previous School",
        "Received",
    ];
    const STATUSES: &'static [AdmissionStatus] = &AdmissionStatus::ALL;

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_name.clone(),
            self.parent_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.class_applying.clone(),
            self.previous_school.clone().unwrap_or_else(|| "-".into()),
            received(&self.created_at),
        ]
    }

    fn status(&self) -> AdmissionStatus {
        self.status
    }
}

pub fn routes<T: Inbox>() -> Router<Arc<AppState>>
where
    T::Status: StatusValue,
{
    let base = format!("/{}", T::SLUG);
    Router::new()
        .route(&base, get(list::<T>))
        .route(&format!("{base}/{{id}}/status"), post(set_status::<T>))
        .route(&format!("{base}/{{id}}/delete"), post(delete::<T>))
}

fn status_form<T: Inbox>(item: &T) -> String
where
    T::Status: StatusValue,
{
    let options: String = T::STATUSES
        .iter()
        .map(|s| {
            let selected = if *s == item.status() { " selected" } else { "" };
            format!(r#"<option value="{s}"{selected}>{s}</option>"#)
        })
        .collect();
    format!(
        r#"<form method="post" action="/admin/{slug}/{id}/status"><select name="status" onchange="this.form.submit()">{options}</select><noscript><button class="quiet" type="submit">Set</button></noscript></form>"#,
        slug = T::SLUG,
        id = item.id(),
    )
}

pub fn render_inbox<T: Inbox>(items: &[T], banner: &str) -> String
where
    T::Status: StatusValue,
{
    if items.is_empty() {
        return format!(r#"{banner}<p class="card">No submissions yet.</p>"#);
    }

    let headers: String = T::COLUMNS.iter().map(|c| format!("<th>{c}</th>")).collect();
    let rows: String = items
        .iter()
        .map(|item| {
            let cells: String = item.cells().iter().map(|c| format!("<td>{}</td>", escape(c))).collect();
            format!(
                r#"<tr>{cells}<td>{status}</td><td class="actions">{delete}</td></tr>"#,
                status = status_form(item),
                delete = delete_button(&format!("/admin/{}/{}/delete", T::SLUG, item.id())),
            )
        })
        .collect();

    format!("{banner}<table><thead><tr>{headers}<th>Status</th><th>Actions</th></tr></thead><tbody>{rows}</tbody></table>")
}

fn inbox_page<T: Inbox>(admin: &AdminUser, items: &[T], banner: &str) -> Html<String>
where
    T::Status: StatusValue,
{
    admin_page(admin, T::TITLE, T::SLUG, &render_inbox(items, banner))
}

async fn snapshot<T: Inbox>(repo: &ContentRepo) -> Vec<T> {
    repo.all::<T>().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to snapshot {}: {e}", T::TABLE);
        Vec::new()
    })
}

async fn list<T: Inbox>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
) -> Html<String>
where
    T::Status: StatusValue,
{
    match state.repo.all::<T>().await {
        Ok(items) => inbox_page(&admin, &items, ""),
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", T::TABLE);
            inbox_page::<T>(&admin, &[], &alert(&format!("Failed to load {}. Please try again.", T::TITLE)))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    status: String,
}

async fn set_status<T: Inbox>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
    Form(form): Form<StatusForm>,
) -> Response
where
    T::Status: StatusValue,
{
    let items = snapshot::<T>(&state.repo).await;
    let Ok(status) = form.status.parse::<T::Status>() else {
        return inbox_page(&admin, &items, &alert("Unknown status.")).into_response();
    };

    let pending = Pending::new(items, ListCommand::SetStatus { id, status });

    match state.repo.update::<T>(id, row(json!({ "status": status.to_string() }))).await {
        Ok(_) => {
            tracing::info!("{} set {} {id} status={status}", admin.email, T::TABLE);
            let items = pending.settle(state.repo.all::<T>().await);
            inbox_page(&admin, &items, &saved("Status updated successfully!")).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update {} {id} status: {e}", T::TABLE);
            inbox_page(&admin, &pending.rollback(), &alert("Failed to update status. Please try again.")).into_response()
        }
    }
}

async fn delete<T: Inbox>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> Response
where
    T::Status: StatusValue,
{
    let pending = Pending::new(snapshot::<T>(&state.repo).await, ListCommand::Remove(id));

    match state.repo.delete(T::TABLE, id).await {
        Ok(true) => {
            tracing::info!("{} deleted {} {id}", admin.email, T::TABLE);
            let items = pending.settle(state.repo.all::<T>().await);
            inbox_page(&admin, &items, &saved("Item deleted successfully!")).into_response()
        }
        Ok(false) => inbox_page(&admin, &pending.rollback(), &alert("Item not found. It may already have been deleted.")).into_response(),
        Err(e) => {
            tracing::error!("Failed to delete {} {id}: {e}", T::TABLE);
            inbox_page(&admin, &pending.rollback(), &alert("Failed to delete item. Please try again.")).into_response()
        }
    }
}
