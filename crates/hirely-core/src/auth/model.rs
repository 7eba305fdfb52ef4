//! Session identity models.

use serde::{Deserialize, Serialize};

use crate::profile::ProfileRecord;

/// The authenticated user as seen by the profile engine.
///
/// Passed explicitly into the view model instead of being read from an
/// ambient provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Opaque user key; also the profile record id
    pub user_id: String,
    /// Address used for password reset emails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionIdentity {
    /// Creates an identity without an email address.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns the email when it is present and non-blank.
    pub fn reset_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
    }
}

/// Current session identity together with the user's profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub identity: SessionIdentity,
    /// `None` until the profile store has a record for the user
    pub profile: Option<ProfileRecord>,
}

/// A field of the local password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordField {
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

/// Password inputs held by the security tab.
///
/// Never sent anywhere: the reset flow is an emailed link.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn set(&mut self, field: PasswordField, value: impl Into<String>) {
        let slot = match field {
            PasswordField::CurrentPassword => &mut self.current_password,
            PasswordField::NewPassword => &mut self.new_password,
            PasswordField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl std::fmt::Debug for PasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |value: &str| if value.is_empty() { "" } else { "***" };
        f.debug_struct("PasswordForm")
            .field("current_password", &mask(&self.current_password))
            .field("new_password", &mask(&self.new_password))
            .field("confirm_password", &mask(&self.confirm_password))
            .finish()
    }
}
