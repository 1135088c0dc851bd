use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Icons that content rows may reference by name in `icon_name` columns.
///
/// Names are the PascalCase names the admin forms offer. A row naming any
/// other icon fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Icon {
    Activity,
    Award,
    Bell,
    Book,
    BookOpen,
    Building,
    Bus,
    Calendar,
    Clock,
    Download,
    Eye,
    FileText,
    FlaskConical,
    Globe,
    GraduationCap,
    Heart,
    Laptop,
    Library,
    Mail,
    MapPin,
    Medal,
    Microscope,
    Music,
    Palette,
    Phone,
    School,
    Sparkles,
    Star,
    Target,
    Trophy,
    Users,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIcon(pub String);

impl fmt::Display for UnknownIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown icon '{}'", self.0)
    }
}

impl std::error::Error for UnknownIcon {}

impl Icon {
    pub const ALL: [Icon; 31] = [
        Icon::Activity,
        Icon::Award,
        Icon::Bell,
        Icon::Book,
        Icon::BookOpen,
        Icon::Building,
        Icon::Bus,
        Icon::Calendar,
        Icon::Clock,
        Icon::Download,
        Icon::Eye,
        Icon::FileText,
        Icon::FlaskConical,
        Icon::Globe,
        Icon::GraduationCap,
        Icon::Heart,
        Icon::Laptop,
        Icon::Library,
        Icon::Mail,
        Icon::MapPin,
        Icon::Medal,
        Icon::Microscope,
        Icon::Music,
        Icon::Palette,
        Icon::Phone,
        Icon::School,
        Icon::Sparkles,
        Icon::Star,
        Icon::Target,
        Icon::Trophy,
        Icon::Users,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::Activity => "Activity",
            Icon::Award => "Award",
            Icon::Bell => "Bell",
            Icon::Book => "Book",
            Icon::BookOpen => "BookOpen",
            Icon::Building => "Building",
            Icon::Bus => "Bus",
            Icon::Calendar => "Calendar",
            Icon::Clock => "Clock",
            Icon::Download => "Download",
            Icon::Eye => "Eye",
            Icon::FileText => "FileText",
            Icon::FlaskConical => "FlaskConical",
            Icon::Globe => "Globe",
            Icon::GraduationCap => "GraduationCap",
            Icon::Heart => "Heart",
            Icon::Laptop => "Laptop",
            Icon::Library => "Library",
            Icon::Mail => "Mail",
            Icon::MapPin => "MapPin",
            Icon::Medal => "Medal",
            Icon::Microscope => "Microscope",
            Icon::Music => "Music",
            Icon::Palette => "Palette",
            Icon::Phone => "Phone",
            Icon::School => "School",
            Icon::Sparkles => "Sparkles",
            Icon::Star => "Star",
            Icon::Target => "Target",
            Icon::Trophy => "Trophy",
            Icon::Users => "Users",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Activity => "🏃",
            Icon::Award => "🏅",
            Icon::Bell => "🔔",
            Icon::Book => "📚",
            Icon::BookOpen => "📖",
            Icon::Building => "🏢",
            Icon::Bus => "🚌",
            Icon::Calendar => "📅",
            Icon::Clock => "🕗",
            Icon::Download => "⬇",
            Icon::Eye => "👁",
            Icon::FileText => "📄",
            Icon::FlaskConical => "⚗",
            Icon::Globe => "🌐",
            Icon::GraduationCap => "🎓",
            Icon::Heart => "❤",
            Icon::Laptop => "💻",
            Icon::Library => "🏛",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Medal => "🥇",
            Icon::Microscope => "🔬",
            Icon::Music => "🎵",
            Icon::Palette => "🎨",
            Icon::Phone => "📞",
            Icon::School => "🏫",
            Icon::Sparkles => "✨",
            Icon::Star => "⭐",
            Icon::Target => "🎯",
            Icon::Trophy => "🏆",
            Icon::Users => "👥",
        }
    }

    /// CSS class in kebab case, e.g. `icon-book-open`.
    #[must_use]
    pub fn css_class(self) -> String {
        let mut class = String::from("icon-");
        for (i, c) in self.name().chars().enumerate() {
            if c.is_ascii_uppercase() {
                if i > 0 {
                    class.push('-');
                }
                class.push(c.to_ascii_lowercase());
            } else {
                class.push(c);
            }
        }
        class
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

impl TryFrom<String> for Icon {
    type Error = UnknownIcon;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.name().to_string()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("BookOpen".parse::<Icon>().unwrap(), Icon::BookOpen);
        assert_eq!("Users".parse::<Icon>().unwrap(), Icon::Users);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert!("Rocket".parse::<Icon>().is_err());
        assert!("bookopen".parse::<Icon>().is_err());
        assert!(serde_json::from_str::<Icon>("\"Rocket\"").is_err());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Icon::GraduationCap.css_class(), "icon-graduation-cap");
        assert_eq!(Icon::Star.css_class(), "icon-star");
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Icon::MapPin).unwrap(), "\"MapPin\"");
    }
}
