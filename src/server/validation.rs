use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("invalid email regex: {e}"))
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Trimmed value, or `None` for blank input. Optional form fields are stored
/// as NULL rather than empty strings.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// True when any of the values is missing or blank.
pub fn any_blank(values: &[Option<&str>]) -> bool {
    values
        .iter()
        .any(|v| v.is_none_or(|s| s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("info@hilltop.edu"));
        assert!(is_valid_email("a.b+c@school.co.in"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two words@hilltop.edu"));
        assert!(!is_valid_email("@hilltop.edu"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" 98765 "), Some("98765".to_string()));
    }

    #[test]
    fn test_any_blank() {
        assert!(any_blank(&[Some("a"), None]));
        assert!(any_blank(&[Some("a"), Some("  ")]));
        assert!(!any_blank(&[Some("a"), Some("b")]));
    }
}
