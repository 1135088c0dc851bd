use super::fallback::rows_or;
use super::html::{escape, icon, page_hero};
use crate::content::ContentRepo;
use crate::types::{FacultyMember, Icon, Table};

#[derive(Debug, Clone)]
pub struct FacultyView {
    pub name: String,
    pub position: String,
    pub qualification: Option<String>,
    pub subject: Option<String>,
    pub experience: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl From<FacultyMember> for FacultyView {
    fn from(m: FacultyMember) -> Self {
        Self {
            name: m.name,
            position: m.position,
            qualification: m.qualification,
            subject: m.subject,
            experience: m.experience,
            email: m.email,
            photo_url: m.photo_url,
        }
    }
}

pub fn default_faculty() -> Vec<FacultyView> {
    [
        ("Dr. Aisha Khan", "Principal", "Ph.D. in Education", "School Administration", "25 years"),
        ("Prof. Sameer Ahmad", "Vice Principal", "M.A., B.Ed.", "English & Administration", "20 years"),
        ("Mrs. Rukhsana Bano", "Senior Teacher", "M.Sc., B.Ed.", "Mathematics", "15 years"),
        ("Mr. Farooq Ahmed", "Senior Teacher", "M.Sc., B.Ed.", "Physics & Chemistry", "18 years"),
        ("Mrs. Shaista Akhtar", "Teacher", "M.A., B.Ed.", "Urdu & Islamic Studies", "12 years"),
        ("Mr. Yasir Hamid", "Teacher", "M.Sc., B.Ed.", "Biology", "10 years"),
        ("Mrs. Nazia Rashid", "Teacher", "M.A., B.Ed.", "Social Studies", "8 years"),
        ("Mr. Imran Shah", "Teacher", "MCA, B.Ed.", "Computer Science", "7 years"),
    ]
    .into_iter()
    .map(|(name, position, qualification, subject, experience)| FacultyView {
        name: name.into(),
        position: position.into(),
        qualification: Some(qualification.into()),
        subject: Some(subject.into()),
        experience: Some(experience.into()),
        email: None,
        photo_url: None,
    })
    .collect()
}

pub async fn load(repo: &ContentRepo) -> Vec<FacultyView> {
    let members = repo.active::<FacultyMember>().await;
    rows_or(Table::FacultyMembers, members, FacultyView::from, default_faculty)
}

fn detail(label: &str, value: Option<&str>) -> String {
    value
        .map(|v| format!(r#"<p><span class="muted">{label}</span><br>{}</p>"#, escape(v)))
        .unwrap_or_default()
}

fn render_member(m: &FacultyView) -> String {
    let photo = match &m.photo_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" style="width:96px;height:96px;border-radius:50%;object-fit:cover;">"#,
            escape(url),
            escape(&m.name)
        ),
        None => icon(Icon::Users),
    };
    let email = m
        .email
        .as_deref()
        .map(|e| format!(r#"<p><a href="mailto:{0}">{0}</a></p>"#, escape(e)))
        .unwrap_or_default();

    format!(
        r#"<div class="card" style="text-align:center;">{photo}<h3>{name}</h3><p class="badge">{position}</p>{qualification}{subject}{experience}{email}</div>"#,
        name = escape(&m.name),
        position = escape(&m.position),
        qualification = detail("Qualification", m.qualification.as_deref()),
        subject = detail("Subject", m.subject.as_deref()),
        experience = detail("Experience", m.experience.as_deref()),
    )
}

pub fn render(members: &[FacultyView]) -> String {
    let cards: String = members.iter().map(render_member).collect();
    format!(
        r#"{hero}
<section>
    <h2>Experienced &amp; Qualified Teachers</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">Our faculty comprises highly qualified and experienced educators who are passionate about teaching and committed to the holistic development of every student. With a perfect blend of traditional values and modern teaching methodologies, our teachers ensure the best learning experience.</p>
    <div class="grid">{cards}</div>
</section>
<section>
    <h2>Support Staff</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">Our dedicated support staff ensures smooth functioning of all school activities</p>
    <div class="grid">
        <div class="card"><h3>Administrative Staff</h3><p class="muted">Office management and student records</p></div>
        <div class="card"><h3>Lab Assistants</h3><p class="muted">Science and computer lab support</p></div>
        <div class="card"><h3>Library Staff</h3><p class="muted">Library management and assistance</p></div>
    </div>
</section>"#,
        hero = page_hero(
            "Our Faculty",
            "Dedicated educators committed to nurturing young minds"
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::OfflineStore;

    #[tokio::test]
    async fn test_faculty_fallback_has_eight_members() {
        let members = load(&ContentRepo::new(Arc::new(OfflineStore))).await;
        assert_eq!(members.len(), 8);
        assert_eq!(members[0].name, "Dr. Aisha Khan");
    }

    #[test]
    fn test_missing_details_are_omitted() {
        let member = FacultyView {
            name: "Mr. Test".into(),
            position: "Teacher".into(),
            qualification: None,
            subject: Some("Art".into()),
            experience: None,
            email: None,
            photo_url: None,
        };
        let html = render_member(&member);
        assert!(!html.contains("Qualification"));
        assert!(html.contains("Art"));
    }
}
