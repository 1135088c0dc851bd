use super::fallback::single_or;
use super::html::{bullet_list, escape, icon, page_hero};
use crate::content::ContentRepo;
use crate::types::{AboutPage, Icon, Table};

#[derive(Debug, Clone)]
pub struct AboutView {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub legacy_heading: String,
    pub legacy_content: String,
}

impl From<AboutPage> for AboutView {
    fn from(p: AboutPage) -> Self {
        Self {
            hero_title: p.hero_title,
            hero_subtitle: p.hero_subtitle,
            legacy_heading: p.legacy_heading,
            legacy_content: p.legacy_content,
        }
    }
}

pub fn default_about() -> AboutView {
    AboutView {
        hero_title: "About Us".into(),
        hero_subtitle: "Empowering minds and building futures since 1995".into(),
        legacy_heading: "Our Legacy".into(),
        legacy_content: "Hilltop Educational Institute was established in 1995 with a vision to provide quality education to the students of Darend, Ganderbal and surrounding areas. Over the past three decades, we have grown from a small school with 100 students to a premier educational institution serving over 2000 students.\n\n\
Our journey has been marked by continuous improvement, innovation in teaching methodologies, and unwavering commitment to academic excellence. We take pride in our state-of-the-art infrastructure, dedicated faculty, and holistic approach to education.\n\n\
Today, Hilltop Educational Institute stands as a beacon of quality education in the region, with our alumni excelling in various fields across the country and beyond."
            .into(),
    }
}

pub async fn load(repo: &ContentRepo) -> AboutView {
    let page = repo.single_active::<AboutPage>().await;
    single_or(Table::AboutPage, page, AboutView::from, default_about)
}

/// Splits stored text on blank lines into `<p>` blocks.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect()
}

const ACHIEVEMENTS: [(&str, &str, &str); 4] = [
    ("Best School Award", "2024", "State Education Board"),
    ("Excellence in Sports", "2023", "Regional Sports Authority"),
    ("Academic Excellence", "2023", "District Education Office"),
    ("Innovation in Teaching", "2022", "National Education Forum"),
];

pub fn render(view: &AboutView) -> String {
    let achievements: String = ACHIEVEMENTS
        .iter()
        .map(|(title, year, org)| {
            format!(
                r#"<div class="card">{}<h3>{title}</h3><p class="muted">{year} - {org}</p></div>"#,
                icon(Icon::Award)
            )
        })
        .collect();

    format!(
        r#"{hero}
<section>
    <h2>{legacy_heading}</h2>
    <div class="prose">{legacy}</div>
</section>
<section>
    <div class="grid">
        <div class="card">{eye}<h3>Our Vision</h3><p class="muted">To be a leading educational institution that nurtures future leaders, innovators, and responsible citizens who contribute positively to society.</p></div>
        <div class="card">{target}<h3>Our Mission</h3><p class="muted">To provide quality education that empowers students with knowledge, skills, and values for holistic development and lifelong learning.</p></div>
        <div class="card">{heart}<h3>Our Values</h3>{values}</div>
    </div>
</section>
<section>
    <h2>Principal's Message</h2>
    <div class="card">
        <p>"Dear Students, Parents, and Well-wishers,</p>
        <p>It gives me immense pleasure to welcome you to Hilltop Educational Institute. Our institution has always been committed to providing a nurturing environment where students can grow academically, socially, and emotionally.</p>
        <p>We believe that education is not just about academic excellence, but about developing well-rounded individuals who are equipped to face the challenges of tomorrow. Our dedicated faculty and modern facilities ensure that every student receives the best possible education.</p>
        <p>I invite you to be part of our journey towards excellence."</p>
        <p><strong>Dr. Mohammad Ashraf</strong><br><span class="muted">Principal, Hilltop Educational Institute</span></p>
    </div>
</section>
<section>
    <h2>Our Achievements</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">Recognition and awards that reflect our commitment to excellence</p>
    <div class="grid">{achievements}</div>
</section>"#,
        hero = page_hero(&view.hero_title, &view.hero_subtitle),
        legacy_heading = escape(&view.legacy_heading),
        legacy = paragraphs(&view.legacy_content),
        eye = icon(Icon::Eye),
        target = icon(Icon::Target),
        heart = icon(Icon::Heart),
        values = bullet_list(&[
            "Excellence in Education",
            "Integrity & Honesty",
            "Respect & Compassion",
            "Innovation & Creativity",
        ]),
    )
}
