use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use chrono::Utc;
use futures::{Stream, StreamExt};
use serde_json::{Value, json};

use super::AppState;
use super::response::{ApiError, StoreResultExt};
use super::validation::is_valid_email;
use crate::auth::RequireAdminApi;
use crate::pages::home::render_marquee;
use crate::rotation::notice_updates;
use crate::types::{AdmissionApplication, ContactSubmission};

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contact", get(list_contacts).post(submit_contact))
        .route("/admissions", get(list_admissions).post(submit_admission))
        .route("/notices/stream", get(notice_stream))
}

/// Parses a JSON body. An unparsable body is reported as a 500.
fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!("Unparsable API body: {e}");
        ApiError::internal("Internal server error")
    })
}

/// Returns the named fields if every one is a non-blank string.
fn required<'a, const N: usize>(body: &'a Value, fields: [&str; N]) -> Result<[&'a str; N], ApiError> {
    let mut values = [""; N];
    for (slot, field) in values.iter_mut().zip(fields) {
        *slot = body
            .get(field)
            .and_then(Value::as_str)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::bad_request("Missing required fields"))?;
    }
    Ok(values)
}

async fn submit_contact(body: Bytes) -> Result<Json<Value>, ApiError> {
    let body = parse_body(&body)?;
    let [name, email, subject, _message] = required(&body, ["name", "email", "subject", "message"])?;

    if !is_valid_email(email) {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    tracing::info!("Contact API submission from {email}");
    Ok(Json(json!({
        "success": true,
        "message": "Message sent successfully",
        "data": {
            "name": name,
            "email": email,
            "subject": subject,
            "submittedAt": Utc::now().to_rfc3339(),
        }
    })))
}

async fn submit_admission(body: Bytes) -> Result<Json<Value>, ApiError> {
    let body = parse_body(&body)?;
    let [student_name, _parent, email, _phone, _class] = required(
        &body,
        ["studentName", "parentName", "email", "phone", "classApplying"],
    )?;

    tracing::info!("Admission API submission for {student_name}");
    Ok(Json(json!({
        "success": true,
        "message": "Application submitted successfully",
        "data": {
            "studentName": student_name,
            "email": email,
            "submittedAt": Utc::now().to_rfc3339(),
        }
    })))
}

async fn list_contacts(
    State(state): State<Arc<AppState>>,
    _admin: RequireAdminApi,
) -> Result<Json<Value>, ApiError> {
    let messages = state
        .repo
        .all::<ContactSubmission>()
        .await
        .api_err("Internal server error")?;
    Ok(Json(json!({ "success": true, "messages": messages })))
}

async fn list_admissions(
    State(state): State<Arc<AppState>>,
    _admin: RequireAdminApi,
) -> Result<Json<Value>, ApiError> {
    let applications = state
        .repo
        .all::<AdmissionApplication>()
        .await
        .api_err("Internal server error")?;
    Ok(Json(json!({ "success": true, "applications": applications })))
}

/// Server-sent `notices` events carrying the rendered marquee track.
async fn notice_stream(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = notice_updates(state.repo.clone())
        .map(|notices| Ok(Event::default().event("notices").data(render_marquee(&notices))));
    Sse::new(events).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let body = json!({ "a": "x", "b": "  ", "c": 3 });
        assert_eq!(required(&body, ["a"]).unwrap(), ["x"]);
        assert!(required(&body, ["a", "b"]).is_err());
        assert!(required(&body, ["c"]).is_err());
        assert!(required(&body, ["missing"]).is_err());
    }

    #[test]
    fn test_parse_body_rejects_garbage() {
        let err = parse_body(b"{not json").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }
}
