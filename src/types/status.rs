use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Pending,
    Replied,
    Resolved,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 3] = [
        ContactStatus::Pending,
        ContactStatus::Replied,
        ContactStatus::Resolved,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Replied => "replied",
            ContactStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdmissionStatus {
    #[default]
    Pending,
    Reviewed,
    Approved,
    Rejected,
}

impl AdmissionStatus {
    pub const ALL: [AdmissionStatus; 4] = [
        AdmissionStatus::Pending,
        AdmissionStatus::Reviewed,
        AdmissionStatus::Approved,
        AdmissionStatus::Rejected,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AdmissionStatus::Pending => "pending",
            AdmissionStatus::Reviewed => "reviewed",
            AdmissionStatus::Approved => "approved",
            AdmissionStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown contact status '{s}'"))
    }
}

impl FromStr for AdmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdmissionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown admission status '{s}'"))
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AdmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_status_names() {
        assert_eq!("resolved".parse::<ContactStatus>().unwrap(), ContactStatus::Resolved);
        assert_eq!("replied".parse::<ContactStatus>().unwrap(), ContactStatus::Replied);
        assert!("read".parse::<ContactStatus>().is_err());
        assert_eq!(serde_json::to_value(ContactStatus::Resolved).unwrap(), "resolved");
    }

    #[test]
    fn test_admission_status_round_trips_through_display() {
        for status in AdmissionStatus::ALL {
            assert_eq!(status.to_string().parse::<AdmissionStatus>().unwrap(), status);
        }
    }
}
