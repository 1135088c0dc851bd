use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use futures::future::join_all;

use super::views::admin_page;
use crate::auth::CurrentAdmin;
use crate::pages::escape;
use crate::server::AppState;
use crate::types::Table;

const COUNTED: &[(&str, &str, Table)] = &[
    ("news", "News Articles", Table::NewsItems),
    ("circulars", "Circulars", Table::Circulars),
    ("faculty", "Faculty Members", Table::FacultyMembers),
    ("gallery", "Gallery Photos", Table::GalleryPhotos),
    ("notices", "Notices", Table::Notices),
    ("hero-images", "Hero Images", Table::HeroImages),
    ("stats", "Stats", Table::Stats),
    ("highlights", "Highlights", Table::Highlights),
    ("downloads", "Student Downloads", Table::StudentDownloads),
    ("achievements", "Achievements", Table::StudentAchievements),
    ("contacts", "Contact Messages", Table::ContactSubmissions),
    ("admissions", "Admission Applications", Table::AdmissionApplications),
];

fn render_counts(counts: &[(&str, &str, Option<usize>)]) -> String {
    counts
        .iter()
        .map(|(slug, label, count)| {
            let shown = count.map_or_else(|| "-".to_string(), |n| n.to_string());
            format!(r#"<a class="card" href="/admin/{slug}"><strong>{shown}</strong>{label}</a>"#)
        })
        .collect()
}

pub async fn show(State(state): State<Arc<AppState>>, CurrentAdmin(admin): CurrentAdmin) -> Html<String> {
    let counts = join_all(COUNTED.iter().map(|(slug, label, table)| {
        let repo = state.repo.clone();
        async move {
            let count = match repo.count(*table).await {
                Ok(n) => Some(n),
                Err(e) => {
                    tracing::warn!("Failed to count {table}: {e}");
                    None
                }
            };
            (*slug, *label, count)
        }
    }))
    .await;

    let body = format!(
        r#"<p class="card">Welcome back, {name}!</p><div class="counts">{cards}</div>"#,
        name = escape(&admin.full_name),
        cards = render_counts(&counts),
    );
    admin_page(&admin, "Dashboard", "dashboard", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_count_shows_dash() {
        let html = render_counts(&[("news", "News Articles", Some(4)), ("faculty", "Faculty Members", None)]);
        assert!(html.contains("<strong>4</strong>News Articles"));
        assert!(html.contains("<strong>-</strong>Faculty Members"));
    }
}
