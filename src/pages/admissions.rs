use serde::Deserialize;
use serde_json::json;

use super::html::{Banner, bullet_list, escape, icon, page_hero, render_banner};
use crate::content::ContentRepo;
use crate::server::validation::{is_valid_email, non_empty};
use crate::store::row;
use crate::types::{AdmissionApplication, AdmissionStatus, Icon};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdmissionForm {
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub class_applying: String,
    pub previous_school: String,
    pub message: String,
}

pub async fn submit(repo: &ContentRepo, form: AdmissionForm) -> (Banner, AdmissionForm) {
    let required = [
        &form.student_name,
        &form.parent_name,
        &form.email,
        &form.phone,
        &form.class_applying,
    ];
    if required.iter().any(|v| v.trim().is_empty()) {
        return (Banner::error("Please fill in all required fields."), form);
    }
    if !is_valid_email(form.email.trim()) {
        return (Banner::error("Please enter a valid email address."), form);
    }

    let application = row(json!({
        "student_name": form.student_name.trim(),
        "parent_name": form.parent_name.trim(),
        "email": form.email.trim(),
        "phone": form.phone.trim(),
        "class_applying": form.class_applying.trim(),
        "previous_school": non_empty(&form.previous_school),
        "message": non_empty(&form.message),
        "status": AdmissionStatus::Pending.as_str(),
    }));

    match repo.insert::<AdmissionApplication>(application).await {
        Ok(saved) => {
            tracing::info!(
                "Stored admission application {} for {}",
                saved.id,
                saved.student_name
            );
            (
                Banner::success(
                    "Application Submitted! Thank you for applying. We will contact you within 2-3 business days.",
                ),
                AdmissionForm::default(),
            )
        }
        Err(e) => {
            tracing::error!("Failed to store admission application: {e}");
            (
                Banner::error("Failed to submit application. Please try again."),
                form,
            )
        }
    }
}

const STEPS: [(&str, &str, &str); 4] = [
    ("1", "Fill Application", "Complete online form"),
    ("2", "Submit Documents", "Upload required docs"),
    ("3", "Entrance Test", "Written examination"),
    ("4", "Confirmation", "Fee payment & admission"),
];

const FEES: [(&str, &str, &str); 4] = [
    ("Class 1 - 5", "₹12,000", "₹2,000"),
    ("Class 6 - 8", "₹15,000", "₹2,500"),
    ("Class 9 - 10", "₹18,000", "₹3,000"),
    ("Class 11 - 12", "₹20,000", "₹3,500"),
];

fn render_form(form: &AdmissionForm) -> String {
    format!(
        r#"<form class="public-form" method="post" action="/admissions">
    <input name="student_name" placeholder="Student Name *" value="{student}" required>
    <input name="parent_name" placeholder="Parent/Guardian Name *" value="{parent}" required>
    <input name="email" type="email" placeholder="Email *" value="{email}" required>
    <input name="phone" placeholder="Phone *" value="{phone}" required>
    <input name="class_applying" placeholder="Class Applying For * (e.g., Class 5)" value="{class}" required>
    <input name="previous_school" placeholder="Previous School" value="{previous}">
    <textarea name="message" rows="4" placeholder="Additional Information">{message}</textarea>
    <button type="submit">Submit Application</button>
</form>"#,
        student = escape(&form.student_name),
        parent = escape(&form.parent_name),
        email = escape(&form.email),
        phone = escape(&form.phone),
        class = escape(&form.class_applying),
        previous = escape(&form.previous_school),
        message = escape(&form.message),
    )
}

pub fn render(banner: Option<&Banner>, form: &AdmissionForm) -> String {
    let steps: String = STEPS
        .iter()
        .map(|(n, title, desc)| {
            format!(
                r#"<div class="card" style="text-align:center;"><span class="badge">{n}</span><h3>{title}</h3><p class="muted">{desc}</p></div>"#
            )
        })
        .collect();

    let fees: String = FEES
        .iter()
        .map(|(class, annual, admission)| {
            format!("<tr><td>{class}</td><td>{annual}</td><td>{admission}</td></tr>")
        })
        .collect();

    format!(
        r#"{hero}
<section>
    <h2>Admission Process</h2>
    <div class="grid">{steps}</div>
</section>
<section>
    <h2>Eligibility &amp; Requirements</h2>
    <div class="grid">
        <div class="card"><h3>Eligibility Criteria</h3>{eligibility}</div>
        <div class="card"><h3>Required Documents</h3>{documents}</div>
    </div>
    <p style="text-align:center;margin-top:20px;"><span class="button">{download} Download Admission Form (PDF)</span></p>
</section>
<section>
    <h2>Fee Structure 2025-26</h2>
    <table><thead><tr><th>Class</th><th>Annual Fee</th><th>Admission Fee</th></tr></thead><tbody>{fees}</tbody></table>
    <p class="muted">* Fee includes tuition, library, sports, and basic facilities. Transport charges separate.</p>
</section>
<section id="apply">
    <h2>Online Application</h2>
    {banner}
    {form}
</section>"#,
        hero = page_hero(
            "Admissions",
            "Join our community of learners and future leaders"
        ),
        eligibility = bullet_list(&[
            "Age appropriate for the class applying",
            "Previous school records (for transfer students)",
            "Pass entrance examination",
        ]),
        documents = bullet_list(&[
            "Birth Certificate",
            "Passport size photographs (4)",
            "Transfer Certificate (if applicable)",
            "Mark sheets of previous class",
        ]),
        download = icon(Icon::Download),
        banner = render_banner(banner),
        form = render_form(form),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::store::SqliteStore;

    #[tokio::test]
    async fn test_submit_stores_pending_application() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::new(dir.path().join("hilltop.db")).unwrap();
        store.initialize().unwrap();
        let repo = ContentRepo::new(Arc::new(store));

        let form = AdmissionForm {
            student_name: "Zara".into(),
            parent_name: "Imran".into(),
            email: "imran@example.com".into(),
            phone: "9876543210".into(),
            class_applying: "Class 5".into(),
            ..Default::default()
        };
        let (banner, cleared) = submit(&repo, form).await;
        assert!(matches!(banner, Banner::Success(_)));
        assert!(cleared.student_name.is_empty());

        let apps: Vec<AdmissionApplication> = repo.all().await.unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, AdmissionStatus::Pending);
        assert_eq!(apps[0].previous_school, None);
    }

    #[test]
    fn test_render_contains_fee_table() {
        let html = render(None, &AdmissionForm::default());
        assert!(html.contains("Fee Structure 2025-26"));
        assert!(html.contains("₹20,000"));
    }
}
