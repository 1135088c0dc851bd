use super::fallback::{rows_or, single_or};
use super::html::{escape, icon, page_hero};
use crate::content::ContentRepo;
use crate::types::{
    AlumniStat, ElibraryResource, Icon, StudentAchievement, StudentDownload, StudentsPage, Table,
};

#[derive(Debug, Clone)]
pub struct HeadingsView {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub downloads_heading: String,
    pub elibrary_heading: String,
    pub elibrary_description: String,
    pub achievements_heading: String,
    pub alumni_heading: String,
    pub alumni_description: String,
}

#[derive(Debug, Clone)]
pub struct DownloadView {
    pub title: String,
    pub category: String,
    pub file_size: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResourceView {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub link_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AchievementView {
    pub student_name: String,
    pub class_name: String,
    pub achievement: String,
    pub year: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlumniView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct StudentsView {
    pub headings: HeadingsView,
    pub downloads: Vec<DownloadView>,
    pub resources: Vec<ResourceView>,
    pub achievements: Vec<AchievementView>,
    pub alumni: Vec<AlumniView>,
}

impl From<StudentsPage> for HeadingsView {
    fn from(p: StudentsPage) -> Self {
        Self {
            hero_title: p.hero_title,
            hero_subtitle: p.hero_subtitle,
            downloads_heading: p.downloads_heading,
            elibrary_heading: p.elibrary_heading,
            elibrary_description: p.elibrary_description,
            achievements_heading: p.achievements_heading,
            alumni_heading: p.alumni_heading,
            alumni_description: p.alumni_description,
        }
    }
}

impl From<StudentDownload> for DownloadView {
    fn from(d: StudentDownload) -> Self {
        Self {
            title: d.title,
            category: d.category,
            file_size: d.file_size,
            file_url: d.file_url,
        }
    }
}

impl From<ElibraryResource> for ResourceView {
    fn from(r: ElibraryResource) -> Self {
        Self {
            title: r.title,
            description: r.description,
            icon: r.icon_name,
            link_url: r.link_url,
        }
    }
}

impl From<StudentAchievement> for AchievementView {
    fn from(a: StudentAchievement) -> Self {
        Self {
            student_name: a.student_name,
            class_name: a.class_name,
            achievement: a.achievement,
            year: a.year,
            photo_url: a.photo_url,
        }
    }
}

impl From<AlumniStat> for AlumniView {
    fn from(s: AlumniStat) -> Self {
        Self {
            value: s.stat_value,
            label: s.stat_label,
        }
    }
}

pub fn default_headings() -> HeadingsView {
    HeadingsView {
        hero_title: "Students Corner".into(),
        hero_subtitle: "Resources, achievements, and essential downloads".into(),
        downloads_heading: "Downloads".into(),
        elibrary_heading: "E-Library".into(),
        elibrary_description: "Access digital resources, study materials, and reference books".into(),
        achievements_heading: "Student Achievements".into(),
        alumni_heading: "Alumni Network".into(),
        alumni_description: "Our alumni are making us proud in various fields across the country".into(),
    }
}

pub fn default_downloads() -> Vec<DownloadView> {
    [
        ("Class Timetable", "Academic", "245 KB"),
        ("Annual Syllabus", "Academic", "1.2 MB"),
        ("Examination Schedule", "Exam", "180 KB"),
        ("School Handbook", "General", "3.5 MB"),
        ("Assignment Guidelines", "Academic", "420 KB"),
    ]
    .into_iter()
    .map(|(title, category, size)| DownloadView {
        title: title.into(),
        category: category.into(),
        file_size: Some(size.into()),
        file_url: None,
    })
    .collect()
}

pub fn default_resources() -> Vec<ResourceView> {
    [
        ("Study Notes", "Chapter-wise notes for all subjects", Icon::Book),
        ("Previous Papers", "Previous year question papers", Icon::FileText),
        ("Reference Books", "Digital library of reference books", Icon::Book),
    ]
    .into_iter()
    .map(|(title, description, icon)| ResourceView {
        title: title.into(),
        description: description.into(),
        icon,
        link_url: None,
    })
    .collect()
}

pub fn default_achievements() -> Vec<AchievementView> {
    [
        ("Aamir Hussain", "Class 12", "State Topper in Science Stream", "2024"),
        ("Sana Mir", "Class 10", "Gold Medal in State Science Exhibition", "2024"),
        ("Bilal Ahmad", "Class 11", "National Level Chess Championship Winner", "2023"),
        ("Hina Rashid", "Class 9", "Best Speaker Award - Debate Competition", "2023"),
    ]
    .into_iter()
    .map(|(name, class, achievement, year)| AchievementView {
        student_name: name.into(),
        class_name: class.into(),
        achievement: achievement.into(),
        year: year.into(),
        photo_url: None,
    })
    .collect()
}

pub fn default_alumni() -> Vec<AlumniView> {
    [
        ("500+", "Alumni Worldwide"),
        ("50+", "In Higher Studies"),
        ("100+", "Working Professionals"),
        ("20+", "Entrepreneurs"),
    ]
    .into_iter()
    .map(|(value, label)| AlumniView {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

pub async fn load(repo: &ContentRepo) -> StudentsView {
    let (page, downloads, resources, achievements, alumni) = tokio::join!(
        repo.single_active::<StudentsPage>(),
        repo.active::<StudentDownload>(),
        repo.active::<ElibraryResource>(),
        repo.active::<StudentAchievement>(),
        repo.active::<AlumniStat>(),
    );

    StudentsView {
        headings: single_or(Table::StudentsPage, page, HeadingsView::from, default_headings),
        downloads: rows_or(Table::StudentDownloads, downloads, DownloadView::from, default_downloads),
        resources: rows_or(Table::ElibraryResources, resources, ResourceView::from, default_resources),
        achievements: rows_or(
            Table::StudentAchievements,
            achievements,
            AchievementView::from,
            default_achievements,
        ),
        alumni: rows_or(Table::AlumniStats, alumni, AlumniView::from, default_alumni),
    }
}

fn link_button(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            r#"<a class="button" href="{}" target="_blank" rel="noopener">{label}</a>"#,
            escape(url)
        ),
        None => format!(r#"<span class="button">{label}</span>"#),
    }
}

pub fn render(view: &StudentsView) -> String {
    let h = &view.headings;

    let downloads: String = view
        .downloads
        .iter()
        .map(|d| {
            let meta = match &d.file_size {
                Some(size) => format!("{} • {}", escape(&d.category), escape(size)),
                None => escape(&d.category),
            };
            format!(
                r#"<div class="card row">{}<div><h3>{}</h3><p class="muted">{meta}</p></div>{}</div>"#,
                icon(Icon::FileText),
                escape(&d.title),
                link_button(&format!("{} Download", icon(Icon::Download)), d.file_url.as_deref()),
            )
        })
        .collect();

    let resources: String = view
        .resources
        .iter()
        .map(|r| {
            format!(
                r#"<div class="card" style="text-align:center;">{}<h3>{}</h3><p class="muted">{}</p>{}</div>"#,
                icon(r.icon),
                escape(&r.title),
                escape(&r.description),
                link_button("Access Now", r.link_url.as_deref()),
            )
        })
        .collect();

    let achievements: String = view
        .achievements
        .iter()
        .map(|a| {
            let badge = match &a.photo_url {
                Some(url) => format!(
                    r#"<img src="{}" alt="{}" style="width:72px;height:72px;border-radius:50%;object-fit:cover;">"#,
                    escape(url),
                    escape(&a.student_name)
                ),
                None => icon(Icon::Trophy),
            };
            format!(
                r#"<div class="card" style="text-align:center;">{badge}<h3>{}</h3><p class="muted">{}</p><p>{}</p><span class="badge">{}</span></div>"#,
                escape(&a.student_name),
                escape(&a.class_name),
                escape(&a.achievement),
                escape(&a.year),
            )
        })
        .collect();

    let alumni: String = view
        .alumni
        .iter()
        .map(|s| format!("<div><strong>{}</strong><span>{}</span></div>", escape(&s.value), escape(&s.label)))
        .collect();

    format!(
        r#"{hero}
<section>
    <h2>{downloads_heading}</h2>
    <div class="stack">{downloads}</div>
</section>
<section>
    <h2>{elibrary_heading}</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">{elibrary_description}</p>
    <div class="grid">{resources}</div>
</section>
<section>
    <h2>{achievements_heading}</h2>
    <div class="grid">{achievements}</div>
</section>
<section>
    <h2>{alumni_heading}</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">{alumni_description}</p>
    <div class="stats">{alumni}</div>
</section>"#,
        hero = page_hero(&h.hero_title, &h.hero_subtitle),
        downloads_heading = escape(&h.downloads_heading),
        elibrary_heading = escape(&h.elibrary_heading),
        elibrary_description = escape(&h.elibrary_description),
        achievements_heading = escape(&h.achievements_heading),
        alumni_heading = escape(&h.alumni_heading),
        alumni_description = escape(&h.alumni_description),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::store::{OfflineStore, SqliteStore, row};

    #[tokio::test]
    async fn test_students_fallbacks() {
        let view = load(&ContentRepo::new(Arc::new(OfflineStore))).await;
        assert_eq!(view.headings.hero_title, "Students Corner");
        assert_eq!(view.downloads.len(), 5);
        assert_eq!(view.resources.len(), 3);
        assert_eq!(view.achievements[0].student_name, "Aamir Hussain");
        assert_eq!(view.alumni[3], AlumniView { value: "20+".into(), label: "Entrepreneurs".into() });
    }

    #[tokio::test]
    async fn test_sections_fall_back_independently() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("hilltop.db")).unwrap();
        store.initialize().unwrap();
        let repo = ContentRepo::new(Arc::new(store));

        let _: AlumniStat = repo
            .insert(row(json!({ "stat_value": "1000+", "stat_label": "Graduates" })))
            .await
            .unwrap();

        let view = load(&repo).await;
        assert_eq!(view.alumni, vec![AlumniView { value: "1000+".into(), label: "Graduates".into() }]);
        assert_eq!(view.downloads.len(), 5);
        assert_eq!(view.headings.alumni_heading, "Alumni Network");
    }
}
