use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{Choices, Field, FieldKind, parse_form, render_inputs};
use super::optimistic::{ListCommand, Pending, Snapshot};
use super::views::{active_pill, admin_page, alert, delete_button, saved, toggle_button};
use crate::auth::CurrentAdmin;
use crate::content::ContentRepo;
use crate::pages::escape;
use crate::server::AppState;
use crate::server::response::not_found_page;
use crate::store::{self, Order, Row, row};
use crate::types::{AdminUser, Record};

/// A list table editable from `/admin/<SLUG>`.
pub trait Managed: Record + Serialize + Snapshot<Status = ()> {
    const SLUG: &'static str;
    const TITLE: &'static str;
    const FIELDS: &'static [Field];
    /// Headers for the columns produced by [`Managed::cells`].
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    fn is_active(&self) -> bool;
}

pub fn routes<T: Managed>() -> Router<Arc<AppState>> {
    let base = format!("/{}", T::SLUG);
    Router::new()
        .route(&base, get(list::<T>).post(create::<T>))
        .route(&format!("{base}/new"), get(new_form::<T>))
        .route(&format!("{base}/{{id}}/edit"), get(edit_form::<T>))
        .route(&format!("{base}/{{id}}"), post(update::<T>))
        .route(&format!("{base}/{{id}}/delete"), post(delete::<T>))
        .route(&format!("{base}/{{id}}/toggle"), post(toggle::<T>))
}

#[derive(Debug, Default, Deserialize)]
pub struct Flash {
    saved: Option<String>,
}

impl Flash {
    pub fn message(&self) -> Option<&'static str> {
        match self.saved.as_deref()? {
            "created" => Some("Item created successfully!"),
            "updated" => Some("Item updated successfully!"),
            _ => None,
        }
    }
}

pub fn to_row<T: Serialize>(item: &T) -> Row {
    serde_json::to_value(item).map(row).unwrap_or_default()
}

/// Submitted values shaped like a stored row, for redisplaying a rejected form.
fn submitted(fields: &[Field], form: &HashMap<String, String>) -> Row {
    fields
        .iter()
        .map(|f| {
            let value = match f.kind {
                FieldKind::Flag => Value::Bool(form.contains_key(f.name)),
                _ => form.get(f.name).cloned().map_or(Value::Null, Value::String),
            };
            (f.name.to_string(), value)
        })
        .collect()
}

/// Options for every reference field, read from the referenced table.
pub async fn load_choices(repo: &ContentRepo, fields: &[Field]) -> Choices {
    let mut choices = Choices::new();
    for field in fields {
        let FieldKind::Reference { table, label } = field.kind else {
            continue;
        };
        let rows = match repo.store().select(table, &store::Query::new().order(Order::asc(label))).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Failed to load {table} options: {e}");
                Vec::new()
            }
        };
        let options = rows
            .iter()
            .filter_map(|r| {
                let id = r.get("id")?.as_i64()?;
                let text = r.get(label)?.as_str()?.to_string();
                Some((id, text))
            })
            .collect();
        choices.insert(field.name, options);
    }
    choices
}

pub fn render_list<T: Managed>(items: &[T], banner: &str) -> String {
    let headers: String = T::COLUMNS.iter().map(|c| format!("<th>{c}</th>")).collect();
    let rows: String = items
        .iter()
        .map(|item| {
            let base = format!("/admin/{}/{}", T::SLUG, item.id());
            let cells: String = item
                .cells()
                .iter()
                .map(|c| format!("<td>{}</td>", escape(c)))
                .collect();
            format!(
                r#"<tr>{cells}<td>{pill}</td><td class="actions"><a class="button" href="{base}/edit">Edit</a>{toggle}{delete}</td></tr>"#,
                pill = active_pill(item.is_active()),
                toggle = toggle_button(&format!("{base}/toggle"), item.is_active()),
                delete = delete_button(&format!("{base}/delete")),
            )
        })
        .collect();

    let table = if items.is_empty() {
        r#"<p class="card">Nothing here yet.</p>"#.to_string()
    } else {
        format!("<table><thead><tr>{headers}<th>Status</th><th>Actions</th></tr></thead><tbody>{rows}</tbody></table>")
    };

    format!(
        r#"{banner}<p style="margin-bottom:16px;"><a class="button" href="/admin/{slug}/new">+ Add New</a></p>{table}"#,
        slug = T::SLUG,
    )
}

pub fn render_editor(action: &str, fields: &[Field], values: Option<&Row>, choices: &Choices, banner: &str, back: &str) -> String {
    format!(
        r#"{banner}<div class="card"><form class="editor" method="post" action="{action}">{inputs}<div class="actions"><button type="submit">Save</button><a class="button quiet" href="{back}">Cancel</a></div></form></div>"#,
        inputs = render_inputs(fields, values, choices),
    )
}

fn list_page<T: Managed>(admin: &AdminUser, items: &[T], banner: &str) -> Html<String> {
    admin_page(admin, T::TITLE, T::SLUG, &render_list(items, banner))
}

async fn list<T: Managed>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Query(flash): Query<Flash>,
) -> Html<String> {
    match state.repo.all::<T>().await {
        Ok(items) => list_page(&admin, &items, &flash.message().map(saved).unwrap_or_default()),
        Err(e) => {
            tracing::error!("Failed to load {}: {e}", T::TABLE);
            list_page::<T>(&admin, &[], &alert(&format!("Failed to load {}. Please try again.", T::TITLE)))
        }
    }
}

async fn form_page<T: Managed>(
    state: &AppState,
    admin: &AdminUser,
    id: Option<i64>,
    values: Option<&Row>,
    banner: &str,
) -> Html<String> {
    let choices = load_choices(&state.repo, T::FIELDS).await;
    let action = match id {
        Some(id) => format!("/admin/{}/{id}", T::SLUG),
        None => format!("/admin/{}", T::SLUG),
    };
    let title = match id {
        Some(_) => format!("Edit {}", T::TITLE),
        None => format!("New {}", T::TITLE),
    };
    let back = format!("/admin/{}", T::SLUG);
    let body = render_editor(&action, T::FIELDS, values, &choices, banner, &back);
    admin_page(admin, &title, T::SLUG, &body)
}

async fn new_form<T: Managed>(State(state): State<Arc<AppState>>, CurrentAdmin(admin): CurrentAdmin) -> Html<String> {
    form_page::<T>(&state, &admin, None, None, "").await
}

async fn edit_form<T: Managed>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> Response {
    match state.repo.get::<T>(id).await {
        Ok(Some(item)) => form_page::<T>(&state, &admin, Some(id), Some(&to_row(&item)), "")
            .await
            .into_response(),
        Ok(None) => not_found_page(&format!("No {} with id {id}.", T::TABLE)),
        Err(e) => {
            tracing::error!("Failed to load {} {id}: {e}", T::TABLE);
            list_page::<T>(&admin, &[], &alert("Failed to load item. Please try again.")).into_response()
        }
    }
}

async fn create<T: Managed>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let values = match parse_form(T::FIELDS, &form) {
        Ok(values) => values,
        Err(message) => {
            let shown = submitted(T::FIELDS, &form);
            return form_page::<T>(&state, &admin, None, Some(&shown), &alert(&message))
                .await
                .into_response();
        }
    };

    match state.repo.insert::<T>(values).await {
        Ok(item) => {
            tracing::info!("{} created {} {}", admin.email, T::TABLE, item.id());
            Redirect::to(&format!("/admin/{}?saved=created", T::SLUG)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create {}: {e}", T::TABLE);
            let shown = submitted(T::FIELDS, &form);
            form_page::<T>(&state, &admin, None, Some(&shown), &alert("Failed to save. Please try again."))
                .await
                .into_response()
        }
    }
}

async fn update<T: Managed>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let values = match parse_form(T::FIELDS, &form) {
        Ok(values) => values,
        Err(message) => {
            let shown = submitted(T::FIELDS, &form);
            return form_page::<T>(&state, &admin, Some(id), Some(&shown), &alert(&message))
                .await
                .into_response();
        }
    };

    match state.repo.update::<T>(id, values).await {
        Ok(_) => {
            tracing::info!("{} updated {} {id}", admin.email, T::TABLE);
            Redirect::to(&format!("/admin/{}?saved=updated", T::SLUG)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update {} {id}: {e}", T::TABLE);
            let shown = submitted(T::FIELDS, &form);
            form_page::<T>(&state, &admin, Some(id), Some(&shown), &alert("Failed to save. Please try again."))
                .await
                .into_response()
        }
    }
}

async fn snapshot<T: Managed>(repo: &ContentRepo) -> Vec<T> {
    repo.all::<T>().await.unwrap_or_else(|e| {
        tracing::warn!("Failed to snapshot {}: {e}", T::TABLE);
        Vec::new()
    })
}

async fn delete<T: Managed>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> Response {
    let pending = Pending::new(snapshot::<T>(&state.repo).await, ListCommand::Remove(id));

    match state.repo.delete(T::TABLE, id).await {
        Ok(true) => {
            tracing::info!("{} deleted {} {id}", admin.email, T::TABLE);
            let items = pending.settle(state.repo.all::<T>().await);
            list_page(&admin, &items, &saved("Item deleted successfully!")).into_response()
        }
        Ok(false) => list_page(&admin, &pending.rollback(), &alert("Item not found. It may already have been deleted.")).into_response(),
        Err(e) => {
            tracing::error!("Failed to delete {} {id}: {e}", T::TABLE);
            list_page(&admin, &pending.rollback(), &alert("Failed to delete item. Please try again.")).into_response()
        }
    }
}

async fn toggle<T: Managed>(
    State(state): State<Arc<AppState>>,
    CurrentAdmin(admin): CurrentAdmin,
    Path(id): Path<i64>,
) -> Response {
    let items = snapshot::<T>(&state.repo).await;
    let Some(active) = items.iter().find(|i| i.id() == id).map(|i| i.is_active()) else {
        return list_page(&admin, &items, &alert("Item not found.")).into_response();
    };

    let pending = Pending::new(items, ListCommand::SetActive { id, active: !active });

    match state.repo.set_active::<T>(id, !active).await {
        Ok(_) => {
            tracing::info!("{} set {} {id} active={}", admin.email, T::TABLE, !active);
            let items = pending.settle(state.repo.all::<T>().await);
            list_page(&admin, &items, &saved("Status updated successfully!")).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to toggle {} {id}: {e}", T::TABLE);
            list_page(&admin, &pending.rollback(), &alert("Failed to update status. Please try again.")).into_response()
        }
    }
}
