use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use hirely_application::{ProfileCollaborators, ProfileViewModel, ProfileViewSettings};
use hirely_core::HirelyError;
use hirely_core::auth::SessionProvider;
use hirely_core::config::HirelyConfig;
use hirely_infrastructure::config_service::apply_overrides;
use hirely_infrastructure::{
    ConfigService, RestActivityRepository, RestAuthService, RestFileStore, RestProfileRepository,
    SupabaseClient,
};

/// Configuration and backend client shared by every command.
pub struct AppContext {
    pub config: HirelyConfig,
    pub client: SupabaseClient,
}

impl AppContext {
    /// Loads the config from `path`, or from the default location, with
    /// environment overrides applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let mut config = ConfigService::load_file(path)
                    .with_context(|| format!("Failed to load {}", path.display()))?;
                apply_overrides(&mut config, |key| std::env::var(key).ok());
                config
            }
            None => ConfigService::new()?.get_config()?,
        };

        let client = SupabaseClient::new(&config.backend).context(
            "Backend not configured: set [backend] url and anon_key in config.toml, \
             or HIRELY_BACKEND_URL and HIRELY_ANON_KEY",
        )?;

        Ok(Self { config, client })
    }

    pub fn collaborators(&self) -> ProfileCollaborators {
        let activity = Arc::new(RestActivityRepository::new(self.client.clone()));
        ProfileCollaborators {
            profiles: Arc::new(RestProfileRepository::new(self.client.clone())),
            applications: activity.clone(),
            saved_jobs: activity,
            files: Arc::new(RestFileStore::new(self.client.clone())),
            password_reset: Arc::new(RestAuthService::new(self.client.clone())),
        }
    }

    /// Resolves the current session and builds the profile view model.
    pub async fn open_view_model(&self) -> Result<ProfileViewModel> {
        let auth = RestAuthService::new(self.client.clone());
        let snapshot = auth
            .current_session()
            .await
            .context("Failed to resolve the current session")?;

        ProfileViewModel::from_snapshot(
            snapshot,
            self.collaborators(),
            ProfileViewSettings::from(&self.config),
        )
        .map_err(|e| match e {
            HirelyError::Unauthorized => anyhow::anyhow!(
                "Not signed in: set backend.access_token or HIRELY_ACCESS_TOKEN to a valid user token"
            ),
            other => other.into(),
        })
    }
}
