use super::fallback::single_or;
use super::html::{escape, icon, page_hero};
use crate::content::ContentRepo;
use crate::types::{AcademicsPage, Icon, Table};

#[derive(Debug, Clone)]
pub struct AcademicsView {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub curriculum_heading: String,
    pub curriculum_description: String,
}

impl From<AcademicsPage> for AcademicsView {
    fn from(p: AcademicsPage) -> Self {
        Self {
            hero_title: p.hero_title,
            hero_subtitle: p.hero_subtitle,
            curriculum_heading: p.curriculum_heading,
            curriculum_description: p.curriculum_description,
        }
    }
}

pub fn default_academics() -> AcademicsView {
    AcademicsView {
        hero_title: "Academics".into(),
        hero_subtitle: "Comprehensive curriculum designed for holistic development".into(),
        curriculum_heading: "Our Curriculum".into(),
        curriculum_description: "We follow the state education board curriculum with a focus on conceptual learning, practical application, and skill development. Our teaching methodology combines traditional values with modern educational practices.".into(),
    }
}

pub async fn load(repo: &ContentRepo) -> AcademicsView {
    let page = repo.single_active::<AcademicsPage>().await;
    single_or(Table::AcademicsPage, page, AcademicsView::from, default_academics)
}

const CLASS_LEVELS: [(&str, &str, &str); 4] = [
    (
        "Primary",
        "Class 1 - 5",
        "English, Urdu, Mathematics, Science, Social Studies, Computer",
    ),
    (
        "Middle",
        "Class 6 - 8",
        "English, Urdu, Mathematics, Science, Social Studies, Computer, Arts",
    ),
    (
        "Secondary",
        "Class 9 - 10",
        "English, Urdu, Mathematics, Science (Physics, Chemistry, Biology), Social Studies",
    ),
    (
        "Higher Secondary",
        "Class 11 - 12",
        "Science Stream, Commerce Stream, Arts Stream",
    ),
];

const METHODS: [(Icon, &str, &str); 3] = [
    (
        Icon::BookOpen,
        "Interactive Learning",
        "Student-centered approach with group discussions, projects, and hands-on activities.",
    ),
    (
        Icon::FileText,
        "Regular Assessment",
        "Continuous evaluation through tests, assignments, and practical examinations.",
    ),
    (
        Icon::Calendar,
        "Smart Classes",
        "Digital boards and multimedia content for enhanced understanding.",
    ),
];

const CALENDAR: [(&str, &str); 6] = [
    ("School Reopening", "1st April 2025"),
    ("First Term Exam", "15th - 30th July 2025"),
    ("Summer Vacation", "1st - 15th August 2025"),
    ("Second Term Exam", "1st - 15th December 2025"),
    ("Winter Vacation", "20th Dec 2025 - 5th Jan 2026"),
    ("Annual Exam", "1st - 20th March 2026"),
];

pub fn render(view: &AcademicsView) -> String {
    let levels: String = CLASS_LEVELS
        .iter()
        .map(|(level, grades, subjects)| {
            format!(
                r#"<div class="card">{}<h3>{level}</h3><p class="muted">{grades}</p><p><strong>Subjects:</strong> {subjects}</p></div>"#,
                icon(Icon::GraduationCap)
            )
        })
        .collect();

    let methods: String = METHODS
        .iter()
        .map(|(i, title, desc)| {
            format!(
                r#"<div class="card">{}<h3>{title}</h3><p class="muted">{desc}</p></div>"#,
                icon(*i)
            )
        })
        .collect();

    let calendar: String = CALENDAR
        .iter()
        .map(|(event, date)| format!("<tr><td>{event}</td><td>{date}</td></tr>"))
        .collect();

    format!(
        r#"{hero}
<section>
    <h2>{heading}</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">{description}</p>
    <div class="grid">{levels}</div>
</section>
<section>
    <h2>Teaching Methodology</h2>
    <div class="grid">{methods}</div>
</section>
<section>
    <h2>Academic Calendar 2025-26</h2>
    <table><thead><tr><th>Event</th><th>Date</th></tr></thead><tbody>{calendar}</tbody></table>
</section>"#,
        hero = page_hero(&view.hero_title, &view.hero_subtitle),
        heading = escape(&view.curriculum_heading),
        description = escape(&view.curriculum_description),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::OfflineStore;

    #[tokio::test]
    async fn test_academics_fallback() {
        let view = load(&ContentRepo::new(Arc::new(OfflineStore))).await;
        assert_eq!(view.hero_title, "Academics");
        let html = render(&view);
        assert!(html.contains("Higher Secondary"));
        assert!(html.contains("Academic Calendar 2025-26"));
    }
}
