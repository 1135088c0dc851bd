use serde::Deserialize;
use serde_json::json;

use super::fallback::single_or;
use super::html::{Banner, escape, icon, page_hero, render_banner};
use super::layout::tel_href;
use crate::content::ContentRepo;
use crate::server::validation::{is_valid_email, non_empty};
use crate::store::row;
use crate::types::{ContactInfo, ContactStatus, ContactSubmission, Icon, Table};

#[derive(Debug, Clone)]
pub struct ContactView {
    pub heading: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub office_hours: String,
}

impl From<ContactInfo> for ContactView {
    fn from(c: ContactInfo) -> Self {
        Self {
            heading: c.section_heading,
            description: c.section_description,
            address: c.address,
            phone: c.phone,
            email: c.email,
            office_hours: c.office_hours,
        }
    }
}

pub fn default_contact() -> ContactView {
    ContactView {
        heading: "Get in Touch".into(),
        description: "Have questions? We're here to help. Contact us for admissions, inquiries, or visit our campus.".into(),
        address: "Darend, Ganderbal, Jammu & Kashmir - 191201".into(),
        phone: "+91 98765 43210".into(),
        email: "info@hilltop.edu".into(),
        office_hours: "Monday - Saturday: 8:00 AM - 4:00 PM".into(),
    }
}

/// Fields of the public contact form. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

pub struct ContactPage {
    pub info: ContactView,
    pub banner: Option<Banner>,
    pub form: ContactForm,
}

pub async fn load(repo: &ContentRepo) -> ContactPage {
    let info = repo.single_active::<ContactInfo>().await;
    ContactPage {
        info: single_or(Table::ContactInfo, info, ContactView::from, default_contact),
        banner: None,
        form: ContactForm::default(),
    }
}

/// Validates and stores a contact message. On failure the submitted values
/// are handed back so the form can be redisplayed.
pub async fn submit(repo: &ContentRepo, form: ContactForm) -> (Banner, ContactForm) {
    let required = [&form.name, &form.email, &form.subject, &form.message];
    if required.iter().any(|v| v.trim().is_empty()) {
        return (Banner::error("Please fill in all required fields."), form);
    }
    if !is_valid_email(form.email.trim()) {
        return (Banner::error("Please enter a valid email address."), form);
    }

    let submission = row(json!({
        "name": form.name.trim(),
        "email": form.email.trim(),
        "phone": non_empty(&form.phone),
        "subject": form.subject.trim(),
        "message": form.message.trim(),
        "status": ContactStatus::Pending.as_str(),
    }));

    match repo.insert::<ContactSubmission>(submission).await {
        Ok(saved) => {
            tracing::info!("Stored contact message {} from {}", saved.id, saved.email);
            (
                Banner::success("Message Sent! Thank you for contacting us. We'll get back to you soon."),
                ContactForm::default(),
            )
        }
        Err(e) => {
            tracing::error!("Failed to store contact message: {e}");
            (
                Banner::error("Failed to submit message. Please try again."),
                form,
            )
        }
    }
}

pub fn render_contact_cards(info: &ContactView) -> String {
    format!(
        r#"<div class="grid">
    <div class="card">{pin}<h3>Address</h3><p>{address}</p></div>
    <div class="card">{phone_icon}<h3>Phone</h3><p><a href="{tel}">{phone}</a></p></div>
    <div class="card">{mail}<h3>Email</h3><p><a href="mailto:{email}">{email}</a></p></div>
    <div class="card">{clock}<h3>Office Hours</h3><p>{hours}</p></div>
</div>"#,
        pin = icon(Icon::MapPin),
        phone_icon = icon(Icon::Phone),
        mail = icon(Icon::Mail),
        clock = icon(Icon::Clock),
        address = escape(&info.address),
        tel = tel_href(&info.phone),
        phone = escape(&info.phone),
        email = escape(&info.email),
        hours = escape(&info.office_hours),
    )
}

fn render_form(form: &ContactForm) -> String {
    format!(
        r#"<form class="public-form" method="post" action="/contact">
    <input name="name" placeholder="Full Name *" value="{name}" required>
    <input name="email" type="email" placeholder="Email *" value="{email}" required>
    <input name="phone" placeholder="Phone" value="{phone}">
    <input name="subject" placeholder="Subject *" value="{subject}" required>
    <textarea name="message" rows="5" placeholder="Message *" required>{message}</textarea>
    <button type="submit">Send Message</button>
</form>"#,
        name = escape(&form.name),
        email = escape(&form.email),
        phone = escape(&form.phone),
        subject = escape(&form.subject),
        message = escape(&form.message),
    )
}

pub fn render(page: &ContactPage) -> String {
    format!(
        r#"{hero}
<section>
    <h2>{heading}</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">{description}</p>
    {cards}
</section>
<section id="message">
    <h2>Send us a Message</h2>
    {banner}
    {form}
</section>
<section>
    <h2>Location Map</h2>
    <p class="muted" style="text-align:center;">Located in the heart of Darend, easily accessible from all major areas of Ganderbal</p>
</section>"#,
        hero = page_hero(
            "Contact Us",
            "We're here to help. Reach out to us for any queries or visit our campus"
        ),
        heading = escape(&page.info.heading),
        description = escape(&page.info.description),
        cards = render_contact_cards(&page.info),
        banner = render_banner(page.banner.as_ref()),
        form = render_form(&page.form),
    )
}
