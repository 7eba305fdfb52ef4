//! Derived presentation data for the profile overview.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::draft::ProfileDraft;

const HEADLINE_FALLBACK: &str = "Job Seeker";
const HINT_INCOMPLETE: &str = "Complete your profile to increase visibility to employers";
const HINT_COMPLETE: &str = "Your profile is complete! Great job!";

/// Tabs of the profile view.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    AsRefStr,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Overview,
    Edit,
    Security,
    Preferences,
}

/// What the resume section shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "fileName", rename_all = "camelCase")]
pub enum ResumeIndicator {
    /// An upload is in flight
    Uploading,
    /// A file was uploaded from this view
    Uploaded(String),
    /// The stored record already references a resume
    OnFile,
    /// No resume yet
    Missing,
}

/// Overview card contents derived from a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOverview {
    pub display_name: String,
    pub headline: String,
    /// Location, experience and availability, in that order, when set
    pub facts: Vec<String>,
    pub bio: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub completeness: u8,
    pub completeness_hint: String,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl ProfileOverview {
    /// Builds the overview for a draft.
    pub fn from_draft(draft: &ProfileDraft, completeness: u8) -> Self {
        let display_name = format!("{} {}", draft.first_name, draft.last_name)
            .trim()
            .to_string();

        let headline = match (draft.job_title.is_empty(), draft.company.is_empty()) {
            (false, false) => format!("{} at {}", draft.job_title, draft.company),
            (false, true) => draft.job_title.clone(),
            (true, _) => HEADLINE_FALLBACK.to_string(),
        };

        let facts = [
            non_empty(&draft.location),
            non_empty(&draft.experience_level).map(|level| format!("{} experience", level)),
            non_empty(&draft.availability),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            display_name,
            headline,
            facts,
            bio: non_empty(&draft.bio),
            linkedin_url: non_empty(&draft.linkedin_url),
            github_url: non_empty(&draft.github_url),
            portfolio_url: non_empty(&draft.portfolio_url),
            completeness,
            completeness_hint: if completeness < 100 {
                HINT_INCOMPLETE
            } else {
                HINT_COMPLETE
            }
            .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_rules() {
        let mut draft = ProfileDraft::default();
        assert_eq!(ProfileOverview::from_draft(&draft, 0).headline, "Job Seeker");

        draft.company = "Acme".to_string();
        assert_eq!(ProfileOverview::from_draft(&draft, 0).headline, "Job Seeker");

        draft.job_title = "Engineer".to_string();
        assert_eq!(
            ProfileOverview::from_draft(&draft, 0).headline,
            "Engineer at Acme"
        );

        draft.company.clear();
        assert_eq!(ProfileOverview::from_draft(&draft, 0).headline, "Engineer");
    }

    #[test]
    fn test_facts_only_include_set_fields() {
        let mut draft = ProfileDraft::default();
        draft.experience_level = "3-5 years".to_string();
        draft.availability = "Actively looking".to_string();

        let overview = ProfileOverview::from_draft(&draft, 0);
        assert_eq!(
            overview.facts,
            vec!["3-5 years experience".to_string(), "Actively looking".to_string()]
        );
        assert!(overview.bio.is_none());
        assert!(overview.github_url.is_none());
    }

    #[test]
    fn test_display_name_and_hint() {
        let mut draft = ProfileDraft::default();
        draft.first_name = "Ana".to_string();

        let overview = ProfileOverview::from_draft(&draft, 14);
        assert_eq!(overview.display_name, "Ana");
        assert_eq!(overview.completeness_hint, HINT_INCOMPLETE);

        let overview = ProfileOverview::from_draft(&draft, 100);
        assert_eq!(overview.completeness_hint, HINT_COMPLETE);
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(ProfileTab::default(), ProfileTab::Overview);
        assert_eq!("security".parse::<ProfileTab>().unwrap(), ProfileTab::Security);
    }
}
