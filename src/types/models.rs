use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{AdmissionStatus, ContactStatus, Icon, Table};
use crate::store::Order;

/// A typed row of one content table.
///
/// `ORDER` is the table's natural listing order: `display_order` ascending
/// for curated lists, newest first for dated tables.
pub trait Record: DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: Table;
    const ORDER: Order;

    fn id(&self) -> i64;
}

macro_rules! record {
    ($ty:ty, $table:expr, $order:expr) => {
        impl Record for $ty {
            const TABLE: Table = $table;
            const ORDER: Order = $order;

            fn id(&self) -> i64 {
                self.id
            }
        }
    };
}

const BY_DISPLAY_ORDER: Order = Order::asc("display_order");
const BY_ID: Order = Order::asc("id");
const NEWEST_FIRST: Order = Order::desc("created_at");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroImage {
    pub id: i64,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub id: i64,
    pub icon_name: Icon,
    pub value: String,
    pub label: String,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub id: i64,
    pub icon_name: Icon,
    pub title: String,
    pub description: String,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub news_date: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circular {
    pub id: i64,
    pub title: String,
    pub circular_date: String,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyMember {
    pub id: i64,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryCategory {
    pub id: i64,
    pub category_name: String,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub event_date: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionApplication {
    pub id: i64,
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub class_applying: String,
    #[serde(default)]
    pub previous_school: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    pub status: AdmissionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarInfo {
    pub id: i64,
    pub school_name: String,
    pub tagline: String,
    pub logo_text: String,
    pub phone: String,
    pub email: String,
    pub address_short: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterInfo {
    pub id: i64,
    pub school_name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub label: String,
    pub href: String,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub id: i64,
    pub section_heading: String,
    pub section_description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub office_hours: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutPage {
    pub id: i64,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub legacy_heading: String,
    pub legacy_content: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicsPage {
    pub id: i64,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub curriculum_heading: String,
    pub curriculum_description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentsPage {
    pub id: i64,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub downloads_heading: String,
    pub elibrary_heading: String,
    pub elibrary_description: String,
    pub achievements_heading: String,
    pub alumni_heading: String,
    pub alumni_description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDownload {
    pub id: i64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElibraryResource {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon_name: Icon,
    #[serde(default)]
    pub link_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentAchievement {
    pub id: i64,
    pub student_name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub achievement: String,
    pub year: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlumniStat {
    pub id: i64,
    pub stat_value: String,
    pub stat_label: String,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub id: i64,
    pub token_lookup: String,
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub admin_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

record!(Hero, Table::Hero, BY_ID);
record!(HeroImage, Table::HeroImages, BY_DISPLAY_ORDER);
record!(Notice, Table::Notices, BY_DISPLAY_ORDER);
record!(Stat, Table::Stats, BY_DISPLAY_ORDER);
record!(Highlight, Table::Highlights, BY_DISPLAY_ORDER);
record!(NewsItem, Table::NewsItems, Order::desc("news_date"));
record!(Circular, Table::Circulars, Order::desc("circular_date"));
record!(FacultyMember, Table::FacultyMembers, BY_DISPLAY_ORDER);
record!(GalleryCategory, Table::GalleryCategories, BY_DISPLAY_ORDER);
record!(GalleryPhoto, Table::GalleryPhotos, NEWEST_FIRST);
record!(ContactSubmission, Table::ContactSubmissions, NEWEST_FIRST);
record!(AdmissionApplication, Table::AdmissionApplications, NEWEST_FIRST);
record!(NavbarInfo, Table::NavbarInfo, BY_ID);
record!(FooterInfo, Table::FooterInfo, BY_ID);
record!(MenuItem, Table::MenuItems, BY_DISPLAY_ORDER);
record!(ContactInfo, Table::ContactInfo, BY_ID);
record!(AboutPage, Table::AboutPage, BY_ID);
record!(AcademicsPage, Table::AcademicsPage, BY_ID);
record!(StudentsPage, Table::StudentsPage, BY_ID);
record!(StudentDownload, Table::StudentDownloads, BY_DISPLAY_ORDER);
record!(ElibraryResource, Table::ElibraryResources, BY_DISPLAY_ORDER);
record!(StudentAchievement, Table::StudentAchievements, BY_DISPLAY_ORDER);
record!(AlumniStat, Table::AlumniStats, BY_DISPLAY_ORDER);
record!(AdminUser, Table::AdminUsers, BY_ID);
record!(AdminSession, Table::AdminSessions, BY_ID);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_stat_with_unknown_icon_fails() {
        let row = json!({
            "id": 1,
            "icon_name": "Rocket",
            "value": "10",
            "label": "Rockets",
            "display_order": 1,
            "is_active": true
        });
        assert!(serde_json::from_value::<Stat>(row).is_err());
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let row = json!({
            "id": 3,
            "image_url": "/img/a.jpg",
            "display_order": 2,
            "is_active": false
        });
        let image: HeroImage = serde_json::from_value(row).unwrap();
        assert_eq!(image.alt_text, None);
        assert_eq!(image.id(), 3);
    }

    #[test]
    fn test_achievement_class_column() {
        let row = json!({
            "id": 1,
            "student_name": "Sana Mir",
            "class": "Class 10",
            "achievement": "Gold Medal",
            "year": "2024",
            "display_order": 1,
            "is_active": true
        });
        let a: StudentAchievement = serde_json::from_value(row).unwrap();
        assert_eq!(a.class_name, "Class 10");
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = AdminUser {
            id: 1,
            email: "a@hilltop.edu".into(),
            full_name: "Admin".into(),
            password_hash: "$argon2id$secret".into(),
            is_active: true,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
    }
}
