use chrono::{Duration, Utc};
use serde_json::json;

use super::token::{TokenGenerator, parse_token, verify_password};
use crate::content::ContentRepo;
use crate::error::Result;
use crate::store::row;
use crate::types::{AdminSession, AdminUser, Table};

pub const COOKIE_NAME: &str = "hilltop_session";
const SESSION_DURATION_SECS: i64 = 7 * 24 * 3600; // 7 days

pub const LOGIN_PATH: &str = "/admin/login";

/// What a request's session cookie resolves to.
#[derive(Debug, Clone)]
pub enum SessionLookup {
    Missing,
    /// Malformed, unknown, expired, or failing verification.
    Invalid,
    /// Session verified but its admin row is gone or deactivated.
    Orphaned { session_id: i64 },
    Admin { session_id: i64, admin: AdminUser },
}

/// Outcome of the admin guard for one request.
#[derive(Debug, Clone)]
pub enum GuardDecision {
    Allow(Option<AdminUser>),
    RedirectToLogin,
    SignOut { session_id: i64 },
}

#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Admin(AdminUser),
    InvalidCredentials,
    NotAdmin,
}

fn is_guarded(path: &str) -> bool {
    let admin = path == "/admin" || path.starts_with("/admin/");
    admin && path != LOGIN_PATH
}

/// Pure transition from `Unauthenticated` / `AuthenticatedAdmin` for a path.
pub fn decide(path: &str, lookup: SessionLookup) -> GuardDecision {
    if !is_guarded(path) {
        return match lookup {
            SessionLookup::Admin { admin, .. } => GuardDecision::Allow(Some(admin)),
            _ => GuardDecision::Allow(None),
        };
    }

    match lookup {
        SessionLookup::Missing | SessionLookup::Invalid => GuardDecision::RedirectToLogin,
        SessionLookup::Orphaned { session_id } => GuardDecision::SignOut { session_id },
        SessionLookup::Admin { admin, .. } => GuardDecision::Allow(Some(admin)),
    }
}

pub async fn authenticate(repo: &ContentRepo, email: &str, password: &str) -> Result<LoginOutcome> {
    let Some(admin) = repo
        .find_by::<AdminUser>("email", email.trim().to_lowercase())
        .await?
    else {
        return Ok(LoginOutcome::InvalidCredentials);
    };

    if !verify_password(password, &admin.password_hash)? {
        return Ok(LoginOutcome::InvalidCredentials);
    }
    if !admin.is_active {
        return Ok(LoginOutcome::NotAdmin);
    }
    Ok(LoginOutcome::Admin(admin))
}

/// Persists a new session for `admin` and returns the raw cookie token.
pub async fn start(repo: &ContentRepo, admin: &AdminUser) -> Result<String> {
    let issued = TokenGenerator::new().generate()?;
    let expires_at = Utc::now() + Duration::seconds(SESSION_DURATION_SECS);

    let session: AdminSession = repo
        .insert(row(json!({
            "token_lookup": issued.lookup,
            "token_hash": issued.hash,
            "admin_id": admin.id,
            "expires_at": expires_at,
        })))
        .await?;

    tracing::info!("Started session {} for admin {}", session.id, admin.email);
    Ok(issued.raw)
}

pub async fn end(repo: &ContentRepo, session_id: i64) -> Result<()> {
    repo.delete(Table::AdminSessions, session_id).await?;
    Ok(())
}

pub async fn resolve(repo: &ContentRepo, cookie_header: Option<&str>) -> Result<SessionLookup> {
    let Some(raw) = cookie_header.and_then(|h| parse_cookie(h, COOKIE_NAME)) else {
        return Ok(SessionLookup::Missing);
    };
    let Ok((lookup, _secret)) = parse_token(raw) else {
        return Ok(SessionLookup::Invalid);
    };

    let Some(session) = repo.find_by::<AdminSession>("token_lookup", lookup).await? else {
        return Ok(SessionLookup::Invalid);
    };
    if session.expires_at < Utc::now() || !TokenGenerator::new().verify(raw, &session.token_hash)? {
        return Ok(SessionLookup::Invalid);
    }

    match repo.get::<AdminUser>(session.admin_id).await? {
        Some(admin) if admin.is_active => Ok(SessionLookup::Admin {
            session_id: session.id,
            admin,
        }),
        _ => Ok(SessionLookup::Orphaned {
            session_id: session.id,
        }),
    }
}

/// Set-Cookie value carrying a session token.
pub fn session_cookie(token: &str) -> String {
    let secure = if cfg!(debug_assertions) { "" } else { "; Secure" };
    format!(
        "{COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_DURATION_SECS}{secure}"
    )
}

pub fn clear_session_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|part| part.trim().strip_prefix(name)?.strip_prefix('='))
        .find(|value| !value.is_empty())
}
