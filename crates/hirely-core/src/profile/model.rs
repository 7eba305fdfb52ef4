//! ProfileRecord domain model.
//!
//! Represents a job-seeker profile as the profile store persists it. Every
//! column except the id may be absent; defaults are applied when a record is
//! hydrated into a [`super::ProfileDraft`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::field::ProfileField;

/// Who may see a profile.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProfileVisibility {
    /// Visible to everyone
    #[default]
    Public,
    /// Only visible to the owner
    Private,
    /// Visible to recruiters only
    Recruiters,
}

/// Profile record as stored by the profile store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Opaque user key, supplied by the session
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,

    /// Unknown or empty stored values read as `None`
    #[serde(
        default,
        deserialize_with = "lenient_visibility",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_visibility: Option<ProfileVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_salary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_contact: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_alerts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_updates: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_emails: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_enabled: Option<bool>,

    // Read-only columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileRecord {
    /// Creates an empty record for the given user.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the stored value of a text field.
    ///
    /// Returns `None` when the column is absent or when `field` is not a
    /// free-text field.
    pub fn text(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::Bio => &self.bio,
            ProfileField::JobTitle => &self.job_title,
            ProfileField::Company => &self.company,
            ProfileField::ExperienceLevel => &self.experience_level,
            ProfileField::SalaryRange => &self.salary_range,
            ProfileField::Availability => &self.availability,
            ProfileField::LinkedinUrl => &self.linkedin_url,
            ProfileField::GithubUrl => &self.github_url,
            ProfileField::PortfolioUrl => &self.portfolio_url,
            _ => return None,
        };
        value.as_deref()
    }

    /// Percentage of the completeness subset that is filled in this record.
    pub fn completeness(&self) -> u8 {
        super::completeness_score(
            super::COMPLETENESS_FIELDS
                .iter()
                .map(|field| self.text(*field)),
        )
    }

    /// Whether a resume has been attached to this profile.
    pub fn has_resume(&self) -> bool {
        self.resume_url
            .as_deref()
            .is_some_and(|url| !url.is_empty())
    }
}

fn lenient_visibility<'de, D>(deserializer: D) -> Result<Option<ProfileVisibility>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}
