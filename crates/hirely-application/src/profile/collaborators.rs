//! Collaborators and settings handed to the profile view model.

use std::sync::Arc;
use std::time::Duration;

use hirely_core::auth::PasswordResetService;
use hirely_core::config::{HirelyConfig, ResumePolicy};
use hirely_core::profile::ProfileRepository;
use hirely_core::stats::{ApplicationRepository, SavedJobRepository};
use hirely_core::storage::FileStore;

/// External systems the view model depends on.
#[derive(Clone)]
pub struct ProfileCollaborators {
    pub profiles: Arc<dyn ProfileRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub saved_jobs: Arc<dyn SavedJobRepository>,
    pub files: Arc<dyn FileStore>,
    pub password_reset: Arc<dyn PasswordResetService>,
}

/// Tunables for the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewSettings {
    pub resume: ResumePolicy,
    /// Delay before a save success status clears itself
    pub success_clear_after: Duration,
}

impl Default for ProfileViewSettings {
    fn default() -> Self {
        Self::from(&HirelyConfig::default())
    }
}

impl From<&HirelyConfig> for ProfileViewSettings {
    fn from(config: &HirelyConfig) -> Self {
        Self {
            resume: config.resume.clone(),
            success_clear_after: config.status.success_clear_after(),
        }
    }
}
