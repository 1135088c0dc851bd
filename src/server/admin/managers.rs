//! Field layouts and list columns for every list manager.

use super::fields::{DISPLAY_ORDER, Field, IS_ACTIVE};
use super::manager::Managed;
use super::optimistic::Snapshot;
use crate::types::{
    AdmissionApplication, AdmissionStatus, AlumniStat, Circular, ContactStatus, ContactSubmission,
    ElibraryResource, FacultyMember, GalleryCategory, GalleryPhoto, HeroImage, Highlight, MenuItem,
    NewsItem, Notice, Stat, StudentAchievement, StudentDownload, Table,
};

pub const NEWS_CATEGORIES: &[&str] = &["General", "Admission", "Event", "Meeting", "Holiday", "Achievement"];

macro_rules! listed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Snapshot for $ty {
                type Status = ();

                fn key(&self) -> i64 {
                    self.id
                }

                fn set_active(&mut self, active: bool) {
                    self.is_active = active;
                }

                fn set_status(&mut self, _status: ()) {}
            }
        )+
    };
}

listed!(
    NewsItem,
    FacultyMember,
    GalleryPhoto,
    GalleryCategory,
    Circular,
    Notice,
    Stat,
    Highlight,
    HeroImage,
    StudentDownload,
    ElibraryResource,
    StudentAchievement,
    AlumniStat,
    MenuItem,
);

impl Snapshot for ContactSubmission {
    type Status = ContactStatus;

    fn key(&self) -> i64 {
        self.id
    }

    fn set_active(&mut self, _active: bool) {}

    fn set_status(&mut self, status: ContactStatus) {
        self.status = status;
    }
}

impl Snapshot for AdmissionApplication {
    type Status = AdmissionStatus;

    fn key(&self) -> i64 {
        self.id
    }

    fn set_active(&mut self, _active: bool) {}

    fn set_status(&mut self, status: AdmissionStatus) {
        self.status = status;
    }
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

impl Managed for NewsItem {
    const SLUG: &'static str = "news";
    const TITLE: &'static str = "News";
    const FIELDS: &'static [Field] = &[
        Field::text("title", "Title").required(),
        Field::long("content", "Content").required(),
        Field::choice("category", "Category", NEWS_CATEGORIES).required(),
        Field::date("news_date", "Date").required(),
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Category", "Date"];

    fn cells(&self) -> Vec<String> {
        vec![self.title.clone(), self.category.clone(), self.news_date.clone()]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for FacultyMember {
    const SLUG: &'static str = "faculty";
    const TITLE: &'static str = "Faculty";
    const FIELDS: &'static [Field] = &[
        Field::text("name", "Name").required(),
        Field::text("position", "Position").required(),
        Field::text("qualification", "Qualification"),
        Field::text("subject", "Subject"),
        Field::text("experience", "Experience"),
        Field::email("email", "Email"),
        Field::text("phone", "Phone"),
        Field::url("photo_url", "Photo URL"),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Position", "Subject", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.position.clone(),
            or_dash(&self.subject),
            self.display_order.to_string(),
        ]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for GalleryPhoto {
    const SLUG: &'static str = "gallery";
    const TITLE: &'static str = "Gallery Photos";
    const FIELDS: &'static [Field] = &[
        Field::text("title", "Title").required(),
        Field::long("description", "Description"),
        Field::url("image_url", "Image URL").required(),
        Field::reference("category_id", "Category", Table::GalleryCategories, "category_name"),
        Field::date("event_date", "Event Date"),
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Image", "Event Date"];

    fn cells(&self) -> Vec<String> {
        vec![self.title.clone(), self.image_url.clone(), or_dash(&self.event_date)]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for GalleryCategory {
    const SLUG: &'static str = "gallery-categories";
    const TITLE: &'static str = "Gallery Categories";
    const FIELDS: &'static [Field] = &[
        Field::text("category_name", "Category Name").required(),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Name", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![self.category_name.clone(), self.display_order.to_string()]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for Circular {
    const SLUG: &'static str = "circulars";
    const TITLE: &'static str = "Circulars";
    const FIELDS: &'static [Field] = &[
        Field::text("title", "Title").required(),
        Field::date("circular_date", "Date").required(),
        Field::text("file_size", "File Size"),
        Field::url("file_url", "File URL"),
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Date", "Size"];

    fn cells(&self) -> Vec<String> {
        vec![self.title.clone(), self.circular_date.clone(), or_dash(&self.file_size)]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for Notice {
    const SLUG: &'static str = "notices";
    const TITLE: &'static str = "Notices";
    const FIELDS: &'static [Field] = &[
        Field::text("message", "Message").required(),
        Field::date("start_date", "Start Date"),
        Field::date("end_date", "End Date"),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Message", "Window", "Order"];

    fn cells(&self) -> Vec<String> {
        let window = match (&self.start_date, &self.end_date) {
            (None, None) => "Always".to_string(),
            (start, end) => format!("{} to {}", or_dash(start), or_dash(end)),
        };
        vec![self.message.clone(), window, self.display_order.to_string()]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for Stat {
    const SLUG: &'static str = "stats";
    const TITLE: &'static str = "Stats";
    const FIELDS: &'static [Field] = &[
        Field::icon("icon_name", "Icon").required(),
        Field::text("value", "Value").required(),
        Field::text("label", "Label").required(),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Icon", "Value", "Label", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.icon_name.glyph(), self.icon_name),
            self.value.clone(),
            self.label.clone(),
            self.display_order.to_string(),
        ]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for Highlight {
    const SLUG: &'static str = "highlights";
    const TITLE: &'static str = "Highlights";
    const FIELDS: &'static [Field] = &[
        Field::icon("icon_name", "Icon").required(),
        Field::text("title", "Title").required(),
        Field::long("description", "Description").required(),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Icon", "Title", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.icon_name.glyph(), self.icon_name),
            self.title.clone(),
            self.display_order.to_string(),
        ]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for HeroImage {
    const SLUG: &'static str = "hero-images";
    const TITLE: &'static str = "Hero Images";
    const FIELDS: &'static [Field] = &[
        Field::url("image_url", "Image URL").required(),
        Field::text("alt_text", "Alt Text"),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Image", "Alt Text", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![self.image_url.clone(), or_dash(&self.alt_text), self.display_order.to_string()]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for StudentDownload {
    const SLUG: &'static str = "downloads";
    const TITLE: &'static str = "Student Downloads";
    const FIELDS: &'static [Field] = &[
        Field::text("title", "Title").required(),
        Field::text("category", "Category").required(),
        Field::text("file_size", "File Size"),
        Field::url("file_url", "File URL"),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Category", "Size", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.category.clone(),
            or_dash(&self.file_size),
            self.display_order.to_string(),
        ]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for ElibraryResource {
    const SLUG: &'static str = "elibrary";
    const TITLE: &'static str = "E-Library Resources";
    const FIELDS: &'static [Field] = &[
        Field::text("title", "Title").required(),
        Field::long("description", "Description").required(),
        Field::icon("icon_name", "Icon").required(),
        Field::url("link_url", "Link URL"),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Title", "Icon", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.icon_name.to_string(),
            self.display_order.to_string(),
        ]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for StudentAchievement {
    const SLUG: &'static str = "achievements";
    const TITLE: &'static str = "Student Achievements";
    const FIELDS: &'static [Field] = &[
        Field::text("student_name", "Student Name").required(),
        Field::text("class", "Class").required(),
        Field::text("achievement", "Achievement").required(),
        Field::text("year", "Year").required(),
        Field::url("photo_url", "Photo URL"),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Student", "Class", "Achievement", "Year"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_name.clone(),
            self.class_name.clone(),
            self.achievement.clone(),
            self.year.clone(),
        ]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for AlumniStat {
    const SLUG: &'static str = "alumni";
    const TITLE: &'static str = "Alumni Stats";
    const FIELDS: &'static [Field] = &[
        Field::text("stat_value", "Value").required(),
        Field::text("stat_label", "Label").required(),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Value", "Label", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.stat_value.clone(),
            self.stat_label.clone(),
            self.display_order.to_string(),
        ]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Managed for MenuItem {
    const SLUG: &'static str = "menu";
    const TITLE: &'static str = "Menu Items";
    const FIELDS: &'static [Field] = &[
        Field::text("label", "Label").required(),
        Field::text("href", "Link").required(),
        DISPLAY_ORDER,
        IS_ACTIVE,
    ];
    const COLUMNS: &'static [&'static str] = &["Label", "Link", "Order"];

    fn cells(&self) -> Vec<String> {
        vec![self.label.clone(), self.href.clone(), self.display_order.to_string()]
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
