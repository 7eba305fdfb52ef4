//! Editable profile draft and the sparse patch sent to the profile store.

use serde::{Deserialize, Serialize};

use super::field::{FieldKind, FieldValue, ProfileField};
use super::model::{ProfileRecord, ProfileVisibility};
use crate::error::{HirelyError, Result};

/// The locally edited copy of a profile's editable fields.
///
/// A draft is hydrated from the last-loaded [`ProfileRecord`] and diverges
/// from it until a save commits. Mutating a draft never touches the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub job_title: String,
    pub company: String,
    pub experience_level: String,
    pub salary_range: String,
    pub availability: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
    pub profile_visibility: ProfileVisibility,
    pub show_salary: bool,
    pub show_contact: bool,
    pub email_notifications: bool,
    pub job_alerts: bool,
    pub application_updates: bool,
    pub marketing_emails: bool,
    pub two_factor_enabled: bool,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            location: String::new(),
            bio: String::new(),
            job_title: String::new(),
            company: String::new(),
            experience_level: String::new(),
            salary_range: String::new(),
            availability: String::new(),
            linkedin_url: String::new(),
            github_url: String::new(),
            portfolio_url: String::new(),
            profile_visibility: ProfileVisibility::Public,
            show_salary: false,
            show_contact: true,
            email_notifications: true,
            job_alerts: true,
            application_updates: true,
            marketing_emails: false,
            two_factor_enabled: false,
        }
    }
}

impl ProfileDraft {
    /// Hydrates a draft from a stored record.
    ///
    /// Flags defaulting to true are set unless the record holds an explicit
    /// `false`; flags defaulting to false are set only by an explicit `true`.
    pub fn from_record(record: &ProfileRecord) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            first_name: text(&record.first_name),
            last_name: text(&record.last_name),
            phone: text(&record.phone),
            location: text(&record.location),
            bio: text(&record.bio),
            job_title: text(&record.job_title),
            company: text(&record.company),
            experience_level: text(&record.experience_level),
            salary_range: text(&record.salary_range),
            availability: text(&record.availability),
            linkedin_url: text(&record.linkedin_url),
            github_url: text(&record.github_url),
            portfolio_url: text(&record.portfolio_url),
            profile_visibility: record.profile_visibility.unwrap_or_default(),
            show_salary: record.show_salary == Some(true),
            show_contact: record.show_contact != Some(false),
            email_notifications: record.email_notifications != Some(false),
            job_alerts: record.job_alerts != Some(false),
            application_updates: record.application_updates != Some(false),
            marketing_emails: record.marketing_emails == Some(true),
            two_factor_enabled: record.two_factor_enabled == Some(true),
        }
    }

    fn text_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        Some(match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::Bio => &mut self.bio,
            ProfileField::JobTitle => &mut self.job_title,
            ProfileField::Company => &mut self.company,
            ProfileField::ExperienceLevel => &mut self.experience_level,
            ProfileField::SalaryRange => &mut self.salary_range,
            ProfileField::Availability => &mut self.availability,
            ProfileField::LinkedinUrl => &mut self.linkedin_url,
            ProfileField::GithubUrl => &mut self.github_url,
            ProfileField::PortfolioUrl => &mut self.portfolio_url,
            _ => return None,
        })
    }

    fn flag_mut(&mut self, field: ProfileField) -> Option<&mut bool> {
        Some(match field {
            ProfileField::ShowSalary => &mut self.show_salary,
            ProfileField::ShowContact => &mut self.show_contact,
            ProfileField::EmailNotifications => &mut self.email_notifications,
            ProfileField::JobAlerts => &mut self.job_alerts,
            ProfileField::ApplicationUpdates => &mut self.application_updates,
            ProfileField::MarketingEmails => &mut self.marketing_emails,
            ProfileField::TwoFactorEnabled => &mut self.two_factor_enabled,
            _ => return None,
        })
    }

    /// Returns the draft value of a text field, `None` for other kinds.
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
        Some(value.as_str())
    }

    /// Returns the draft value of a flag field, `None` for other kinds.
    pub fn flag(&self, field: ProfileField) -> Option<bool> {
        match field {
            ProfileField::ShowSalary => Some(self.show_salary),
            ProfileField::ShowContact => Some(self.show_contact),
            ProfileField::EmailNotifications => Some(self.email_notifications),
            ProfileField::JobAlerts => Some(self.job_alerts),
            ProfileField::ApplicationUpdates => Some(self.application_updates),
            ProfileField::MarketingEmails => Some(self.marketing_emails),
            ProfileField::TwoFactorEnabled => Some(self.two_factor_enabled),
            _ => None,
        }
    }

    /// Returns the draft value of any field.
    pub fn get(&self, field: ProfileField) -> FieldValue {
        match field.kind() {
            FieldKind::Text => FieldValue::Text(self.text(field).unwrap_or_default().to_string()),
            FieldKind::Choice => FieldValue::Text(self.profile_visibility.to_string()),
            FieldKind::Flag => FieldValue::Flag(self.flag(field).unwrap_or_default()),
        }
    }

    /// Overwrites one field, coercing `value` by the field's kind.
    ///
    /// Flag fields accept a flag or the text `"true"`/`"false"`. Text fields
    /// store flags as `"true"`/`"false"`. The visibility field accepts only
    /// one of its names. No format validation is applied to text.
    pub fn set(&mut self, field: ProfileField, value: FieldValue) -> Result<()> {
        match field.kind() {
            FieldKind::Text => {
                let text = match value {
                    FieldValue::Text(text) => text,
                    FieldValue::Flag(flag) => flag.to_string(),
                };
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
            FieldKind::Flag => {
                let flag = match value {
                    FieldValue::Flag(flag) => flag,
                    FieldValue::Text(text) => text.trim().parse::<bool>().map_err(|_| {
                        HirelyError::validation(format!(
                            "{} expects true or false, got '{}'",
                            field, text
                        ))
                    })?,
                };
                if let Some(slot) = self.flag_mut(field) {
                    *slot = flag;
                }
            }
            FieldKind::Choice => {
                let text = match value {
                    FieldValue::Text(text) => text,
                    FieldValue::Flag(flag) => flag.to_string(),
                };
                self.profile_visibility = text.trim().parse().map_err(|_| {
                    HirelyError::validation(format!(
                        "{} must be one of public, private, recruiters; got '{}'",
                        field, text
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Flips a flag field and returns its new value.
    pub fn toggle(&mut self, field: ProfileField) -> Result<bool> {
        let slot = self
            .flag_mut(field)
            .ok_or_else(|| HirelyError::validation(format!("{} is not a flag field", field)))?;
        *slot = !*slot;
        Ok(*slot)
    }

    /// Builds the partial update carrying every editable field.
    pub fn to_patch(&self) -> ProfilePatch {
        ProfilePatch {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            phone: Some(self.phone.clone()),
            location: Some(self.location.clone()),
            bio: Some(self.bio.clone()),
            job_title: Some(self.job_title.clone()),
            company: Some(self.company.clone()),
            experience_level: Some(self.experience_level.clone()),
            salary_range: Some(self.salary_range.clone()),
            availability: Some(self.availability.clone()),
            linkedin_url: Some(self.linkedin_url.clone()),
            github_url: Some(self.github_url.clone()),
            portfolio_url: Some(self.portfolio_url.clone()),
            profile_visibility: Some(self.profile_visibility),
            show_salary: Some(self.show_salary),
            show_contact: Some(self.show_contact),
            email_notifications: Some(self.email_notifications),
            job_alerts: Some(self.job_alerts),
            application_updates: Some(self.application_updates),
            marketing_emails: Some(self.marketing_emails),
            two_factor_enabled: Some(self.two_factor_enabled),
            resume_url: None,
        }
    }
}

/// Sparse partial update for a profile record.
///
/// Only fields set to `Some` are serialized, so the profile store leaves
/// every other column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl ProfilePatch {
    /// A patch that only attaches a resume URL.
    pub fn resume_url(url: impl Into<String>) -> Self {
        Self {
            resume_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Whether the patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies this patch to a record, as the profile store would.
    pub fn apply_to(&self, record: &mut ProfileRecord) {
        fn merge<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if let Some(value) = value {
                *slot = Some(value.clone());
            }
        }

        merge(&mut record.first_name, &self.first_name);
        merge(&mut record.last_name, &self.last_name);
        merge(&mut record.phone, &self.phone);
        merge(&mut record.location, &self.location);
        merge(&mut record.bio, &self.bio);
        merge(&mut record.job_title, &self.job_title);
        merge(&mut record.company, &self.company);
        merge(&mut record.experience_level, &self.experience_level);
        merge(&mut record.salary_range, &self.salary_range);
        merge(&mut record.availability, &self.availability);
        merge(&mut record.linkedin_url, &self.linkedin_url);
        merge(&mut record.github_url, &self.github_url);
        merge(&mut record.portfolio_url, &self.portfolio_url);
        merge(&mut record.profile_visibility, &self.profile_visibility);
        merge(&mut record.show_salary, &self.show_salary);
        merge(&mut record.show_contact, &self.show_contact);
        merge(&mut record.email_notifications, &self.email_notifications);
        merge(&mut record.job_alerts, &self.job_alerts);
        merge(&mut record.application_updates, &self.application_updates);
        merge(&mut record.marketing_emails, &self.marketing_emails);
        merge(&mut record.two_factor_enabled, &self.two_factor_enabled);
        merge(&mut record.resume_url, &self.resume_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hydrate_missing_flags_uses_defaults() {
        let record = ProfileRecord::new("user-1");
        let draft = ProfileDraft::from_record(&record);

        assert!(draft.show_contact);
        assert!(draft.email_notifications);
        assert!(draft.job_alerts);
        assert!(draft.application_updates);
        assert!(!draft.show_salary);
        assert!(!draft.marketing_emails);
        assert!(!draft.two_factor_enabled);
        assert_eq!(draft.profile_visibility, ProfileVisibility::Public);
        assert_eq!(draft, ProfileDraft::default());
    }

    #[test]
    fn test_hydrate_respects_explicit_values() {
        let mut record = ProfileRecord::new("user-1");
        record.show_contact = Some(false);
        record.job_alerts = Some(false);
        record.show_salary = Some(true);
        record.marketing_emails = Some(true);
        record.first_name = Some("Ana".to_string());
        record.profile_visibility = Some(ProfileVisibility::Private);

        let draft = ProfileDraft::from_record(&record);

        assert!(!draft.show_contact);
        assert!(!draft.job_alerts);
        assert!(draft.email_notifications);
        assert!(draft.show_salary);
        assert!(draft.marketing_emails);
        assert_eq!(draft.first_name, "Ana");
        assert_eq!(draft.profile_visibility, ProfileVisibility::Private);
    }

    #[test]
    fn test_set_coerces_by_kind() {
        let mut draft = ProfileDraft::default();

        draft.set(ProfileField::Phone, "555-0100".into()).unwrap();
        draft.set(ProfileField::ShowSalary, true.into()).unwrap();
        draft.set(ProfileField::JobAlerts, "false".into()).unwrap();
        draft
            .set(ProfileField::ProfileVisibility, "recruiters".into())
            .unwrap();
        draft.set(ProfileField::Bio, false.into()).unwrap();

        assert_eq!(draft.phone, "555-0100");
        assert!(draft.show_salary);
        assert!(!draft.job_alerts);
        assert_eq!(draft.profile_visibility, ProfileVisibility::Recruiters);
        assert_eq!(draft.bio, "false");
    }

    #[test]
    fn test_set_rejects_bad_choice_and_flag_text() {
        let mut draft = ProfileDraft::default();

        let err = draft
            .set(ProfileField::ProfileVisibility, "friends".into())
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(draft.profile_visibility, ProfileVisibility::Public);

        let err = draft.set(ProfileField::ShowContact, "maybe".into()).unwrap_err();
        assert!(err.is_validation());
        assert!(draft.show_contact);
    }

    #[test]
    fn test_urls_are_not_validated() {
        let mut draft = ProfileDraft::default();
        draft
            .set(ProfileField::LinkedinUrl, "not a url".into())
            .unwrap();
        assert_eq!(draft.linkedin_url, "not a url");
    }

    #[test]
    fn test_get_and_toggle() {
        let mut draft = ProfileDraft::default();
        assert_eq!(draft.get(ProfileField::ShowContact), FieldValue::Flag(true));
        assert!(!draft.toggle(ProfileField::ShowContact).unwrap());
        assert_eq!(draft.get(ProfileField::ShowContact), FieldValue::Flag(false));
        assert_eq!(
            draft.get(ProfileField::ProfileVisibility),
            FieldValue::Text("public".to_string())
        );
        assert!(draft.toggle(ProfileField::Bio).unwrap_err().is_validation());
    }

    #[test]
    fn test_full_patch_serializes_every_field() {
        let draft = ProfileDraft::default();
        let value = serde_json::to_value(draft.to_patch()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 21);
        assert_eq!(object["profile_visibility"], json!("public"));
        assert_eq!(object["show_contact"], json!(true));
        assert!(!object.contains_key("resume_url"));
    }

    #[test]
    fn test_resume_patch_is_sparse() {
        let patch = ProfilePatch::resume_url("https://cdn/resume.pdf");
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "resume_url": "https://cdn/resume.pdf" })
        );
        assert!(!patch.is_empty());
        assert!(ProfilePatch::default().is_empty());
    }

    #[test]
    fn test_apply_patch_is_idempotent() {
        let mut draft = ProfileDraft::default();
        draft.first_name = "Ana".to_string();
        let patch = draft.to_patch();

        let mut once = ProfileRecord::new("user-1");
        patch.apply_to(&mut once);
        let mut twice = once.clone();
        patch.apply_to(&mut twice);

        assert_eq!(once, twice);
        assert_eq!(once.first_name.as_deref(), Some("Ana"));
    }
}
