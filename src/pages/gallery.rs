use super::fallback::rows_or;
use super::html::{display_date, escape, icon, page_hero};
use crate::content::ContentRepo;
use crate::store::Query;
use crate::types::{GalleryCategory, GalleryPhoto, Icon, Table};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    /// `None` for built-in categories that have no row to filter on.
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct PhotoView {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub event_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GalleryView {
    pub categories: Vec<CategoryView>,
    pub photos: Vec<PhotoView>,
    pub selected: Option<i64>,
}

impl From<GalleryCategory> for CategoryView {
    fn from(c: GalleryCategory) -> Self {
        Self {
            id: Some(c.id),
            name: c.category_name,
        }
    }
}

impl From<GalleryPhoto> for PhotoView {
    fn from(p: GalleryPhoto) -> Self {
        Self {
            title: p.title,
            description: p.description,
            image_url: Some(p.image_url),
            event_date: p.event_date,
        }
    }
}

pub fn default_categories() -> Vec<CategoryView> {
    [
        "Annual Day",
        "Sports Day",
        "Science Exhibition",
        "Cultural Events",
        "Independence Day",
        "Republic Day",
        "Classrooms",
        "Infrastructure",
    ]
    .into_iter()
    .map(|name| CategoryView {
        id: None,
        name: name.into(),
    })
    .collect()
}

pub fn default_photos() -> Vec<PhotoView> {
    (1..=9)
        .map(|n| PhotoView {
            title: format!("Event Title {n}"),
            description: Some(format!("Image {n}")),
            image_url: None,
            event_date: None,
        })
        .collect()
}

pub async fn load(repo: &ContentRepo, category: Option<i64>) -> GalleryView {
    let mut photo_query = Query::active();
    if let Some(id) = category {
        photo_query = photo_query.eq("category_id", id);
    }

    let (categories, photos) = tokio::join!(
        repo.active::<GalleryCategory>(),
        repo.list::<GalleryPhoto>(photo_query),
    );

    GalleryView {
        categories: rows_or(
            Table::GalleryCategories,
            categories,
            CategoryView::from,
            default_categories,
        ),
        photos: rows_or(Table::GalleryPhotos, photos, PhotoView::from, default_photos),
        selected: category,
    }
}

fn render_filters(view: &GalleryView) -> String {
    let mut links = vec![format!(
        r#"<a class="chip{}" href="/gallery">All</a>"#,
        if view.selected.is_none() { " chip-active" } else { "" }
    )];
    for c in &view.categories {
        let (href, active) = match c.id {
            Some(id) => (format!("/gallery?category={id}"), view.selected == Some(id)),
            None => ("/gallery".to_string(), false),
        };
        links.push(format!(
            r#"<a class="chip{}" href="{href}">{}</a>"#,
            if active { " chip-active" } else { "" },
            escape(&c.name)
        ));
    }
    format!(r#"<nav class="chips">{}</nav>"#, links.concat())
}

fn render_photo(p: &PhotoView) -> String {
    let media = match &p.image_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape(url),
            escape(&p.title)
        ),
        None => format!(
            r#"<div class="placeholder">{}<p>{}</p></div>"#,
            icon(Icon::Eye),
            escape(p.description.as_deref().unwrap_or_default())
        ),
    };
    let date = p
        .event_date
        .as_deref()
        .map(|d| format!(r#"<p class="muted">{}</p>"#, escape(&display_date(d))))
        .unwrap_or_default();
    format!(
        r#"<figure class="card photo">{media}<figcaption><h3>{}</h3>{date}</figcaption></figure>"#,
        escape(&p.title)
    )
}

pub fn render(view: &GalleryView) -> String {
    let photos: String = view.photos.iter().map(render_photo).collect();
    format!(
        r#"{hero}
<section>
    {filters}
    <div class="grid">{photos}</div>
</section>
<section>
    <h2>Virtual Campus Tour</h2>
    <div class="card placeholder" style="text-align:center;">{school}<p class="muted">Take a virtual tour of our campus</p></div>
</section>"#,
        hero = page_hero("Gallery", "Moments captured from our vibrant school life"),
        filters = render_filters(view),
        school = icon(Icon::School),
    )
}
