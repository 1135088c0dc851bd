use super::contact::{ContactView, default_contact, render_contact_cards};
use super::fallback::{rows_or, single_or};
use super::html::{escape, icon};
use crate::content::ContentRepo;
use crate::rotation::{SLIDE_INTERVAL, Slideshow, current_notices, marquee};
use crate::types::{ContactInfo, Hero, HeroImage, Highlight, Icon, Stat, Table};

#[derive(Debug, Clone)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SlideView {
    pub image_url: String,
    pub alt: String,
}

#[derive(Debug, Clone)]
pub struct StatView {
    pub icon: Icon,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct HighlightView {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub hero: HeroView,
    pub slides: Vec<SlideView>,
    pub notices: Vec<String>,
    pub stats: Vec<StatView>,
    pub highlights: Vec<HighlightView>,
    pub contact: ContactView,
}

pub fn default_hero() -> HeroView {
    HeroView {
        title: "Welcome to Hilltop Educational Institute".into(),
        subtitle: "Empowering Minds, Building Futures Since 1995".into(),
        description: "Located in the heart of Darend, Ganderbal, we provide quality education with modern facilities, experienced faculty, and a nurturing environment for holistic development.".into(),
        image_url: None,
    }
}

pub fn default_stats() -> Vec<StatView> {
    [
        (Icon::Users, "2000+", "Students"),
        (Icon::BookOpen, "50+", "Qualified Teachers"),
        (Icon::Award, "100+", "Awards Won"),
        (Icon::GraduationCap, "95%", "Success Rate"),
    ]
    .into_iter()
    .map(|(icon, value, label)| StatView {
        icon,
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

pub fn default_highlights() -> Vec<HighlightView> {
    [
        (
            Icon::BookOpen,
            "Quality Education",
            "Comprehensive curriculum following latest educational standards with focus on conceptual learning.",
        ),
        (
            Icon::Microscope,
            "Modern Labs",
            "Well-equipped science, computer, and language labs for practical learning experience.",
        ),
        (
            Icon::Palette,
            "Co-curricular Activities",
            "Sports, arts, music, and cultural activities for overall personality development.",
        ),
        (
            Icon::Trophy,
            "Achievements",
            "Consistent excellence in academics and extracurricular competitions at state level.",
        ),
    ]
    .into_iter()
    .map(|(icon, title, description)| HighlightView {
        icon,
        title: title.into(),
        description: description.into(),
    })
    .collect()
}

pub async fn load(repo: &ContentRepo) -> HomeView {
    let (hero, images, notices, stats, highlights, contact) = tokio::join!(
        repo.single_active::<Hero>(),
        repo.active::<HeroImage>(),
        current_notices(repo),
        repo.active::<Stat>(),
        repo.active::<Highlight>(),
        repo.single_active::<ContactInfo>(),
    );

    // No slides is a valid state: the hero falls back to its gradient.
    let slides = match images {
        Ok(images) => images
            .into_iter()
            .map(|img| SlideView {
                alt: img.alt_text.unwrap_or_else(|| "Hilltop campus".into()),
                image_url: img.image_url,
            })
            .collect(),
        Err(e) => {
            tracing::warn!("Failed to load {}: {e}", Table::HeroImages);
            Vec::new()
        }
    };

    HomeView {
        hero: single_or(
            Table::Hero,
            hero,
            |h| HeroView {
                title: h.title,
                subtitle: h.subtitle,
                description: h.description,
                image_url: h.image_url,
            },
            default_hero,
        ),
        slides,
        notices,
        stats: rows_or(
            Table::Stats,
            stats,
            |s| StatView {
                icon: s.icon_name,
                value: s.value,
                label: s.label,
            },
            default_stats,
        ),
        highlights: rows_or(
            Table::Highlights,
            highlights,
            |h| HighlightView {
                icon: h.icon_name,
                title: h.title,
                description: h.description,
            },
            default_highlights,
        ),
        contact: single_or(Table::ContactInfo, contact, ContactView::from, default_contact),
    }
}

/// Every notice appears twice on the track; see [`marquee`].
pub fn render_marquee(notices: &[String]) -> String {
    marquee(notices)
        .iter()
        .map(|notice| format!("<span>• {}</span>", escape(notice)))
        .collect()
}

fn render_hero(hero: &HeroView, slides: &[SlideView]) -> String {
    let show = Slideshow::new(slides.len());
    let mut backdrop: String = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let active = if show.current() == Some(i) { " active" } else { "" };
            format!(
                r#"<div class="slide{active}" role="img" aria-label="{}" style="background-image:url('{}')"></div>"#,
                escape(&slide.alt),
                escape(&slide.image_url)
            )
        })
        .collect();

    if backdrop.is_empty() {
        if let Some(url) = &hero.image_url {
            backdrop = format!(
                r#"<div class="slide active" style="background-image:url('{}')"></div>"#,
                escape(url)
            );
        }
    }

    let script = if slides.len() > 1 {
        format!(
            r#"<script>
(function() {{
    const slides = document.querySelectorAll('.hero .slide');
    let index = 0;
    let timer = setInterval(function() {{
        slides[index].classList.remove('active');
        index = (index + 1) % slides.length;
        slides[index].classList.add('active');
    }}, {interval});
    window.addEventListener('pagehide', function() {{ clearInterval(timer); }});
}})();
</script>"#,
            interval = SLIDE_INTERVAL.as_millis()
        )
    } else {
        String::new()
    };

    format!(
        r#"<section class="hero">
    {backdrop}
    <div class="hero-text">
        <h1>{title}</h1>
        <p><strong>{subtitle}</strong></p>
        <p>{description}</p>
        <p style="margin-top:20px;">
            <a class="button" href="/admissions">Apply for Admission</a>
            <a class="button" href="/about" style="background:transparent;border:1px solid #fff;">Learn More About Us</a>
        </p>
    </div>
    {script}
</section>"#,
        title = escape(&hero.title),
        subtitle = escape(&hero.subtitle),
        description = escape(&hero.description),
    )
}

fn render_notice_board(notices: &[String]) -> String {
    format!(
        r#"<section class="notice-board">
    {bell}
    <div class="marquee"><div class="marquee-track" id="notice-track">{track}</div></div>
    <script>
    (function() {{
        if (!window.EventSource) return;
        const source = new EventSource('/api/notices/stream');
        source.addEventListener('notices', function(e) {{
            document.getElementById('notice-track').innerHTML = e.data;
        }});
        window.addEventListener('pagehide', function() {{ source.close(); }});
    }})();
    </script>
</section>"#,
        bell = icon(Icon::Bell),
        track = render_marquee(notices),
    )
}

fn render_stats(stats: &[StatView]) -> String {
    let items: String = stats
        .iter()
        .map(|s| {
            format!(
                "<div>{}<strong>{}</strong><span>{}</span></div>",
                icon(s.icon),
                escape(&s.value),
                escape(&s.label)
            )
        })
        .collect();
    format!(r#"<section><div class="stats">{items}</div></section>"#)
}

fn render_highlights(highlights: &[HighlightView]) -> String {
    let cards: String = highlights
        .iter()
        .map(|h| {
            format!(
                r#"<div class="card">{}<h3>{}</h3><p class="muted">{}</p></div>"#,
                icon(h.icon),
                escape(&h.title),
                escape(&h.description)
            )
        })
        .collect();
    format!(
        r#"<section>
    <h2>Why Choose Hilltop?</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">We provide a nurturing environment that fosters academic excellence and holistic development</p>
    <div class="grid">{cards}</div>
</section>"#
    )
}

pub fn render(view: &HomeView) -> String {
    [
        render_hero(&view.hero, &view.slides),
        render_notice_board(&view.notices),
        render_stats(&view.stats),
        render_highlights(&view.highlights),
        format!(
            r#"<section>
    <h2>{}</h2>
    <p class="muted" style="text-align:center;margin-bottom:24px;">{}</p>
    {}
    <p style="text-align:center;margin-top:20px;"><a class="button" href="/contact">Contact Us</a></p>
</section>"#,
            escape(&view.contact.heading),
            escape(&view.contact.description),
            render_contact_cards(&view.contact)
        ),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::rotation::DEFAULT_NOTICES;
    use crate::store::OfflineStore;

    #[tokio::test]
    async fn test_offline_home_uses_fallbacks() {
        let repo = ContentRepo::new(Arc::new(OfflineStore));
        let view = load(&repo).await;

        assert_eq!(view.hero.title, "Welcome to Hilltop Educational Institute");
        assert_eq!(view.hero.subtitle, "Empowering Minds, Building Futures Since 1995");
        assert!(view.slides.is_empty());
        assert_eq!(view.notices.len(), 4);
        let labels: Vec<String> = view
            .stats
            .iter()
            .map(|s| format!("{} {}", s.value, s.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                "2000+ Students",
                "50+ Qualified Teachers",
                "100+ Awards Won",
                "95% Success Rate"
            ]
        );
        assert_eq!(view.highlights.len(), 4);
    }

    #[test]
    fn test_marquee_renders_each_notice_twice() {
        let notices: Vec<String> = DEFAULT_NOTICES.iter().map(|s| s.to_string()).collect();
        let html = render_marquee(&notices);
        for notice in DEFAULT_NOTICES {
            assert_eq!(html.matches(notice).count(), 2, "{notice}");
        }
    }

    #[test]
    fn test_first_slide_is_active() {
        let slides = vec![
            SlideView {
                image_url: "/a.jpg".into(),
                alt: "A".into(),
            },
            SlideView {
                image_url: "/b.jpg".into(),
                alt: "B".into(),
            },
        ];
        let html = render_hero(&default_hero(), &slides);
        assert_eq!(html.matches("slide active").count(), 1);
        assert!(html.find("/a.jpg").unwrap() < html.find("/b.jpg").unwrap());
        assert!(html.contains("setInterval"));
        assert!(html.contains("5000"));
    }
}
