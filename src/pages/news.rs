use serde::Deserialize;

use super::fallback::rows_or;
use super::html::{Banner, display_date, escape, icon, page_hero, render_banner};
use crate::content::ContentRepo;
use crate::server::validation::is_valid_email;
use crate::types::{Circular, Icon, NewsItem, Table};

#[derive(Debug, Clone)]
pub struct NewsView {
    pub title: String,
    pub content: String,
    pub category: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct CircularView {
    pub title: String,
    pub date: String,
    pub file_size: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewsPage {
    pub news: Vec<NewsView>,
    pub circulars: Vec<CircularView>,
}

impl From<NewsItem> for NewsView {
    fn from(n: NewsItem) -> Self {
        Self {
            date: display_date(&n.news_date),
            title: n.title,
            content: n.content,
            category: n.category,
        }
    }
}

impl From<Circular> for CircularView {
    fn from(c: Circular) -> Self {
        Self {
            date: display_date(&c.circular_date),
            title: c.title,
            file_size: c.file_size,
            file_url: c.file_url,
        }
    }
}

pub fn default_news() -> Vec<NewsView> {
    [
        (
            "Admissions Open for Academic Year 2026-27",
            "15th November 2025",
            "Admission",
            "Online and offline admission process has started. Apply before 31st December 2025.",
        ),
        (
            "Annual Sports Day - 25th November 2025",
            "10th November 2025",
            "Event",
            "All students are requested to participate in the annual sports day. Parents are invited.",
        ),
        (
            "Parent-Teacher Meeting Scheduled",
            "5th November 2025",
            "Meeting",
            "PTM will be held on 30th November. All parents are requested to attend.",
        ),
        (
            "Winter Vacation Notice",
            "1st November 2025",
            "Holiday",
            "Winter vacation from 20th December 2025 to 5th January 2026.",
        ),
        (
            "Science Exhibition Results",
            "28th October 2025",
            "Achievement",
            "Our students won 3 gold medals in the district science exhibition.",
        ),
    ]
    .into_iter()
    .map(|(title, date, category, content)| NewsView {
        title: title.into(),
        content: content.into(),
        category: category.into(),
        date: date.into(),
    })
    .collect()
}

pub fn default_circulars() -> Vec<CircularView> {
    [
        ("Fee Payment Reminder", "12th Nov 2025", "120 KB"),
        ("Examination Schedule", "10th Nov 2025", "245 KB"),
        ("Uniform Guidelines", "5th Nov 2025", "180 KB"),
        ("Transport Route Update", "1st Nov 2025", "95 KB"),
    ]
    .into_iter()
    .map(|(title, date, size)| CircularView {
        title: title.into(),
        date: date.into(),
        file_size: Some(size.into()),
        file_url: None,
    })
    .collect()
}

pub async fn load(repo: &ContentRepo) -> NewsPage {
    let (news, circulars) = tokio::join!(repo.active::<NewsItem>(), repo.active::<Circular>());
    NewsPage {
        news: rows_or(Table::NewsItems, news, NewsView::from, default_news),
        circulars: rows_or(Table::Circulars, circulars, CircularView::from, default_circulars),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubscribeForm {
    pub email: String,
}

/// Acknowledges a newsletter signup. The address is not stored.
pub fn subscribe(form: &SubscribeForm) -> Banner {
    let email = form.email.trim();
    if email.is_empty() || !is_valid_email(email) {
        return Banner::error("Please enter a valid email address.");
    }
    tracing::info!("Newsletter signup acknowledged");
    Banner::success("✓ Successfully subscribed to newsletter!")
}

fn render_news(n: &NewsView) -> String {
    format!(
        r#"<article class="card"><span class="badge">{category}</span><h3>{title}</h3><p>{content}</p><p class="muted">{calendar} {date}</p></article>"#,
        category = escape(&n.category),
        title = escape(&n.title),
        content = escape(&n.content),
        calendar = icon(Icon::Calendar),
        date = escape(&n.date),
    )
}

fn render_circular(c: &CircularView) -> String {
    let meta = match &c.file_size {
        Some(size) => format!("{} • {}", escape(&c.date), escape(size)),
        None => escape(&c.date),
    };
    let download = match &c.file_url {
        Some(url) => format!(
            r#"<a class="button" href="{}" target="_blank" rel="noopener">Download</a>"#,
            escape(url)
        ),
        None => r#"<span class="button">Download</span>"#.to_string(),
    };
    format!(
        r#"<div class="card row">{file}<div><h3>{title}</h3><p class="muted">{meta}</p></div>{download}</div>"#,
        file = icon(Icon::FileText),
        title = escape(&c.title),
    )
}

pub fn render(page: &NewsPage, banner: Option<&Banner>) -> String {
    let news: String = page.news.iter().map(render_news).collect();
    let circulars: String = page.circulars.iter().map(render_circular).collect();
    format!(
        r#"{hero}
<section>
    <h2>Latest News</h2>
    <div class="stack">{news}</div>
</section>
<section>
    <h2>Circulars &amp; Notices</h2>
    <div class="stack">{circulars}</div>
</section>
<section id="newsletter">
    <h2>School Newsletter</h2>
    <p class="muted" style="text-align:center;">Subscribe to our monthly newsletter for updates and highlights</p>
    {banner}
    <form class="public-form inline" method="post" action="/news/subscribe">
        <input name="email" type="email" placeholder="Enter your email" required>
        <button type="submit">Subscribe</button>
    </form>
    <p class="muted" style="text-align:center;">Get monthly updates delivered to your inbox</p>
</section>"#,
        hero = page_hero(
            "News & Updates",
            "Stay informed with the latest school news and announcements"
        ),
        banner = render_banner(banner),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::OfflineStore;

    #[tokio::test]
    async fn test_news_fallbacks() {
        let page = load(&ContentRepo::new(Arc::new(OfflineStore))).await;
        assert_eq!(page.news.len(), 5);
        assert_eq!(page.circulars.len(), 4);
        let html = render(&page, None);
        assert!(html.contains("12th Nov 2025 • 120 KB"));
    }

    #[test]
    fn test_stored_dates_are_formatted() {
        let view = NewsView::from(NewsItem {
            id: 1,
            title: "Exam".into(),
            content: "Soon".into(),
            category: "Exam".into(),
            news_date: "2025-11-03".into(),
            is_active: true,
            created_at: chrono::Utc::now(),
        });
        assert_eq!(view.date, "3rd November 2025");
    }

    #[test]
    fn test_subscribe() {
        let ok = subscribe(&SubscribeForm {
            email: "parent@example.com".into(),
        });
        assert_eq!(ok, Banner::success("✓ Successfully subscribed to newsletter!"));
        let bad = subscribe(&SubscribeForm {
            email: "nope".into(),
        });
        assert!(matches!(bad, Banner::Error(_)));
    }
}
