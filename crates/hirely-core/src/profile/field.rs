//! Field catalogue for editable profile fields.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Suggested values for `experience_level`. Free text is still accepted.
pub const EXPERIENCE_LEVELS: [&str; 5] = [
    "Entry-level",
    "1-2 years",
    "3-5 years",
    "5+ years",
    "10+ years",
];

/// Suggested values for `availability`. Free text is still accepted.
pub const AVAILABILITY_OPTIONS: [&str; 4] = [
    "Open to opportunities",
    "Actively looking",
    "Not looking",
    "Open to freelance",
];

/// An editable profile field, named as the profile store names its column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    Display,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProfileField {
    FirstName,
    LastName,
    Phone,
    Location,
    Bio,
    JobTitle,
    Company,
    ExperienceLevel,
    SalaryRange,
    Availability,
    LinkedinUrl,
    GithubUrl,
    PortfolioUrl,
    ProfileVisibility,
    ShowSalary,
    ShowContact,
    EmailNotifications,
    JobAlerts,
    ApplicationUpdates,
    MarketingEmails,
    TwoFactorEnabled,
}

/// How a field's input is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Checkbox-style boolean
    Flag,
    /// One of a closed set of names
    Choice,
}

impl ProfileField {
    /// Returns the coercion kind of this field.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::ProfileVisibility => FieldKind::Choice,
            Self::ShowSalary
            | Self::ShowContact
            | Self::EmailNotifications
            | Self::JobAlerts
            | Self::ApplicationUpdates
            | Self::MarketingEmails
            | Self::TwoFactorEnabled => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    /// Returns the column name of this field.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Suggested values for free-text fields that have them.
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Self::ExperienceLevel => &EXPERIENCE_LEVELS,
            Self::Availability => &AVAILABILITY_OPTIONS,
            _ => &[],
        }
    }
}

/// A value entered for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) => None,
        }
    }

    /// Returns the flag, if this is a flag value.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_names_match_columns() {
        assert_eq!(ProfileField::FirstName.name(), "first_name");
        assert_eq!(ProfileField::LinkedinUrl.name(), "linkedin_url");
        assert_eq!(ProfileField::GithubUrl.name(), "github_url");
        assert_eq!(ProfileField::TwoFactorEnabled.name(), "two_factor_enabled");
        assert_eq!(
            "application_updates".parse::<ProfileField>().unwrap(),
            ProfileField::ApplicationUpdates
        );
        assert!("resume_url".parse::<ProfileField>().is_err());
    }

    #[test]
    fn test_field_kinds() {
        let flags = ProfileField::iter()
            .filter(|field| field.kind() == FieldKind::Flag)
            .count();
        let choices = ProfileField::iter()
            .filter(|field| field.kind() == FieldKind::Choice)
            .count();

        assert_eq!(flags, 7);
        assert_eq!(choices, 1);
        assert_eq!(ProfileField::Bio.kind(), FieldKind::Text);
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(ProfileField::ExperienceLevel.suggestions().len(), 5);
        assert!(
            ProfileField::Availability
                .suggestions()
                .contains(&"Actively looking")
        );
        assert!(ProfileField::JobTitle.suggestions().is_empty());
        // Suggestions never change the kind
        assert_eq!(ProfileField::ExperienceLevel.kind(), FieldKind::Text);
    }

    #[test]
    fn test_field_value_conversions() {
        assert_eq!(FieldValue::from("x").as_text(), Some("x"));
        assert_eq!(FieldValue::from(true).as_flag(), Some(true));
        assert_eq!(FieldValue::from(true).as_text(), None);
    }
}
