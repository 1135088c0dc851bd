use chrono::{Datelike, NaiveDate};

use crate::types::Icon;

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// A one-line status message shown above a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Banner::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Banner::Error(message.into())
    }

    #[must_use]
    pub fn render(&self) -> String {
        let (class, message) = match self {
            Banner::Success(m) => ("banner banner-success", m),
            Banner::Error(m) => ("banner banner-error", m),
        };
        format!(
            r#"<div class="{class}" role="status">{}</div>"#,
            escape(message)
        )
    }
}

pub fn render_banner(banner: Option<&Banner>) -> String {
    banner.map(Banner::render).unwrap_or_default()
}

pub fn icon(icon: Icon) -> String {
    format!(
        r#"<span class="icon {}" aria-hidden="true">{}</span>"#,
        icon.css_class(),
        icon.glyph()
    )
}

pub fn page_hero(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="page-hero"><h1>{}</h1><p>{}</p></section>"#,
        escape(title),
        escape(subtitle)
    )
}

/// Formats an ISO date (`2025-11-15`) as `15th November 2025`. Anything that
/// is not an ISO date is returned unchanged.
pub fn display_date(raw: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
        return raw.to_string();
    };

    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix} {}", date.format("%B %Y"))
}

pub fn bullet_list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!(r#"<ul class="bullets">{items}</ul>"#)
}
