use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Bool,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

const fn int(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Integer,
    }
}

const fn text(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Text,
    }
}

const fn flag(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Bool,
    }
}

const fn stamp(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Timestamp,
    }
}

const ID: Column = int("id");
const IS_ACTIVE: Column = flag("is_active");
const DISPLAY_ORDER: Column = int("display_order");
const CREATED_AT: Column = stamp("created_at");

const HERO: &[Column] = &[
    ID,
    text("title"),
    text("subtitle"),
    text("description"),
    text("image_url"),
    IS_ACTIVE,
];
const HERO_IMAGES: &[Column] = &[
    ID,
    text("image_url"),
    text("alt_text"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const NOTICES: &[Column] = &[
    ID,
    text("message"),
    text("start_date"),
    text("end_date"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const STATS: &[Column] = &[
    ID,
    text("icon_name"),
    text("value"),
    text("label"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const HIGHLIGHTS: &[Column] = &[
    ID,
    text("icon_name"),
    text("title"),
    text("description"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const NEWS_ITEMS: &[Column] = &[
    ID,
    text("title"),
    text("content"),
    text("category"),
    text("news_date"),
    IS_ACTIVE,
    CREATED_AT,
];
const CIRCULARS: &[Column] = &[
    ID,
    text("title"),
    text("circular_date"),
    text("file_size"),
    text("file_url"),
    IS_ACTIVE,
];
const FACULTY_MEMBERS: &[Column] = &[
    ID,
    text("name"),
    text("position"),
    text("qualification"),
    text("subject"),
    text("experience"),
    text("email"),
    text("phone"),
    text("photo_url"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const GALLERY_CATEGORIES: &[Column] = &[ID, text("category_name"), DISPLAY_ORDER, IS_ACTIVE];
const GALLERY_PHOTOS: &[Column] = &[
    ID,
    text("title"),
    text("description"),
    text("image_url"),
    int("category_id"),
    text("event_date"),
    IS_ACTIVE,
    CREATED_AT,
];
const CONTACT_SUBMISSIONS: &[Column] = &[
    ID,
    text("name"),
    text("email"),
    text("phone"),
    text("subject"),
    text("message"),
    text("status"),
    CREATED_AT,
];
const ADMISSION_APPLICATIONS: &[Column] = &[
    ID,
    text("student_name"),
    text("parent_name"),
    text("email"),
    text("phone"),
    text("class_applying"),
    text("previous_school"),
    text("message"),
    text("status"),
    CREATED_AT,
];
const NAVBAR_INFO: &[Column] = &[
    ID,
    text("school_name"),
    text("tagline"),
    text("logo_text"),
    text("phone"),
    text("email"),
    text("address_short"),
    IS_ACTIVE,
];
const FOOTER_INFO: &[Column] = &[
    ID,
    text("school_name"),
    text("tagline"),
    text("address"),
    text("phone"),
    text("email"),
    text("facebook_url"),
    text("instagram_url"),
    text("youtube_url"),
    IS_ACTIVE,
];
const MENU_ITEMS: &[Column] = &[ID, text("label"), text("href"), DISPLAY_ORDER, IS_ACTIVE];
const CONTACT_INFO: &[Column] = &[
    ID,
    text("section_heading"),
    text("section_description"),
    text("address"),
    text("phone"),
    text("email"),
    text("office_hours"),
    IS_ACTIVE,
];
const ABOUT_PAGE: &[Column] = &[
    ID,
    text("hero_title"),
    text("hero_subtitle"),
    text("legacy_heading"),
    text("legacy_content"),
    IS_ACTIVE,
];
const ACADEMICS_PAGE: &[Column] = &[
    ID,
    text("hero_title"),
    text("hero_subtitle"),
    text("curriculum_heading"),
    text("curriculum_description"),
    IS_ACTIVE,
];
const STUDENTS_PAGE: &[Column] = &[
    ID,
    text("hero_title"),
    text("hero_subtitle"),
    text("downloads_heading"),
    text("elibrary_heading"),
    text("elibrary_description"),
    text("achievements_heading"),
    text("alumni_heading"),
    text("alumni_description"),
    IS_ACTIVE,
];
const STUDENT_DOWNLOADS: &[Column] = &[
    ID,
    text("title"),
    text("category"),
    text("file_size"),
    text("file_url"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const ELIBRARY_RESOURCES: &[Column] = &[
    ID,
    text("title"),
    text("description"),
    text("icon_name"),
    text("link_url"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const STUDENT_ACHIEVEMENTS: &[Column] = &[
    ID,
    text("student_name"),
    text("class"),
    text("achievement"),
    text("year"),
    text("photo_url"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const ALUMNI_STATS: &[Column] = &[
    ID,
    text("stat_value"),
    text("stat_label"),
    DISPLAY_ORDER,
    IS_ACTIVE,
];
const ADMIN_USERS: &[Column] = &[
    ID,
    text("email"),
    text("full_name"),
    text("password_hash"),
    IS_ACTIVE,
    CREATED_AT,
];
const ADMIN_SESSIONS: &[Column] = &[
    ID,
    text("token_lookup"),
    text("token_hash"),
    int("admin_id"),
    CREATED_AT,
    stamp("expires_at"),
];

/// Every table the content store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Hero,
    HeroImages,
    Notices,
    Stats,
    Highlights,
    NewsItems,
    Circulars,
    FacultyMembers,
    GalleryCategories,
    GalleryPhotos,
    ContactSubmissions,
    AdmissionApplications,
    NavbarInfo,
    FooterInfo,
    MenuItems,
    ContactInfo,
    AboutPage,
    AcademicsPage,
    StudentsPage,
    StudentDownloads,
    ElibraryResources,
    StudentAchievements,
    AlumniStats,
    AdminUsers,
    AdminSessions,
}

impl Table {
    pub const ALL: [Table; 25] = [
        Table::Hero,
        Table::HeroImages,
        Table::Notices,
        Table::Stats,
        Table::Highlights,
        Table::NewsItems,
        Table::Circulars,
        Table::FacultyMembers,
        Table::GalleryCategories,
        Table::GalleryPhotos,
        Table::ContactSubmissions,
        Table::AdmissionApplications,
        Table::NavbarInfo,
        Table::FooterInfo,
        Table::MenuItems,
        Table::ContactInfo,
        Table::AboutPage,
        Table::AcademicsPage,
        Table::StudentsPage,
        Table::StudentDownloads,
        Table::ElibraryResources,
        Table::StudentAchievements,
        Table::AlumniStats,
        Table::AdminUsers,
        Table::AdminSessions,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Table::Hero => "hero",
            Table::HeroImages => "hero_images",
            Table::Notices => "notices",
            Table::Stats => "stats",
            Table::Highlights => "highlights",
            Table::NewsItems => "news_items",
            Table::Circulars => "circulars",
            Table::FacultyMembers => "faculty_members",
            Table::GalleryCategories => "gallery_categories",
            Table::GalleryPhotos => "gallery_photos",
            Table::ContactSubmissions => "contact_submissions",
            Table::AdmissionApplications => "admission_applications",
            Table::NavbarInfo => "navbar_info",
            Table::FooterInfo => "footer_info",
            Table::MenuItems => "menu_items",
            Table::ContactInfo => "contact_info",
            Table::AboutPage => "about_page",
            Table::AcademicsPage => "academics_page",
            Table::StudentsPage => "students_page",
            Table::StudentDownloads => "student_downloads",
            Table::ElibraryResources => "elibrary_resources",
            Table::StudentAchievements => "student_achievements",
            Table::AlumniStats => "alumni_stats",
            Table::AdminUsers => "admin_users",
            Table::AdminSessions => "admin_sessions",
        }
    }

    /// Columns in declaration order, `id` first.
    #[must_use]
    pub fn columns(self) -> &'static [Column] {
        match self {
            Table::Hero => HERO,
            Table::HeroImages => HERO_IMAGES,
            Table::Notices => NOTICES,
            Table::Stats => STATS,
            Table::Highlights => HIGHLIGHTS,
            Table::NewsItems => NEWS_ITEMS,
            Table::Circulars => CIRCULARS,
            Table::FacultyMembers => FACULTY_MEMBERS,
            Table::GalleryCategories => GALLERY_CATEGORIES,
            Table::GalleryPhotos => GALLERY_PHOTOS,
            Table::ContactSubmissions => CONTACT_SUBMISSIONS,
            Table::AdmissionApplications => ADMISSION_APPLICATIONS,
            Table::NavbarInfo => NAVBAR_INFO,
            Table::FooterInfo => FOOTER_INFO,
            Table::MenuItems => MENU_ITEMS,
            Table::ContactInfo => CONTACT_INFO,
            Table::AboutPage => ABOUT_PAGE,
            Table::AcademicsPage => ACADEMICS_PAGE,
            Table::StudentsPage => STUDENTS_PAGE,
            Table::StudentDownloads => STUDENT_DOWNLOADS,
            Table::ElibraryResources => ELIBRARY_RESOURCES,
            Table::StudentAchievements => STUDENT_ACHIEVEMENTS,
            Table::AlumniStats => ALUMNI_STATS,
            Table::AdminUsers => ADMIN_USERS,
            Table::AdminSessions => ADMIN_SESSIONS,
        }
    }

    #[must_use]
    pub fn column(self, name: &str) -> Option<&'static Column> {
        self.columns().iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Table> {
        Table::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
