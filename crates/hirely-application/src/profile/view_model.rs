use std::sync::{Arc, Mutex};

use hirely_core::auth::{PasswordField, PasswordForm, SessionIdentity, SessionSnapshot};
use hirely_core::error::{HirelyError, Result};
use hirely_core::profile::{
    FieldValue, ProfileDraft, ProfileField, ProfileOverview, ProfilePatch, ProfileRecord,
    ProfileTab, ResumeIndicator,
};
use hirely_core::stats::{StatsUpdate, UsageStats};
use hirely_core::status::StatusMessage;
use hirely_core::storage::{ResumeUpload, UploadOptions, resume_storage_key, validate_resume};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::busy::BusyFlag;
use super::collaborators::{ProfileCollaborators, ProfileViewSettings};
use super::outcome::OperationOutcome;
use super::status_board::StatusBoard;

const SAVE_SUCCESS: &str = "Profile updated successfully!";
const SAVE_FAILED: &str = "Failed to update profile";
const UPLOAD_SUCCESS: &str = "Resume uploaded successfully!";
const UPLOAD_FAILED: &str = "Failed to upload resume";
const RESET_SUCCESS: &str = "Password reset email sent! Check your inbox.";
const RESET_FAILED: &str = "Failed to send password reset email";

/// Mutable view state. Only touched between collaborator calls, never
/// across one.
#[derive(Debug, Default)]
struct ViewState {
    /// Last canonical record received from the profile store
    record: Option<ProfileRecord>,
    draft: ProfileDraft,
    stats: UsageStats,
    password: PasswordForm,
    active_tab: ProfileTab,
    /// Name of the file uploaded from this view, if any
    uploaded_resume: Option<String>,
}

impl ViewState {
    fn hydrate(&mut self, record: ProfileRecord) {
        self.draft = ProfileDraft::from_record(&record);
        self.stats.sync_with_record(&record);
        self.record = Some(record);
    }
}

struct Inner {
    identity: SessionIdentity,
    collaborators: ProfileCollaborators,
    settings: ProfileViewSettings,
    state: RwLock<ViewState>,
    status: StatusBoard,
    saving: BusyFlag,
    uploading: BusyFlag,
    resetting: BusyFlag,
    stats_task: Mutex<Option<JoinHandle<()>>>,
}

/// Point-in-time copy of everything the profile view renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewSnapshot {
    pub user_id: String,
    pub email: Option<String>,
    pub active_tab: ProfileTab,
    pub draft: ProfileDraft,
    pub overview: ProfileOverview,
    pub stats: UsageStats,
    pub status: Option<StatusMessage>,
    pub resume: ResumeIndicator,
    pub is_saving: bool,
    pub is_uploading: bool,
    pub is_resetting_password: bool,
}

/// View model behind the profile page.
///
/// Owns the editable draft, the derived metrics and the status banner, and
/// mediates every call to the profile store, file store and auth provider.
/// Cloning is cheap and every clone drives the same view.
///
/// Save, resume upload and password reset each allow one request in flight;
/// a second call while one is pending returns [`OperationOutcome::Busy`]
/// without touching any collaborator. The three operations are independent
/// of each other.
#[derive(Clone)]
pub struct ProfileViewModel {
    inner: Arc<Inner>,
}

impl ProfileViewModel {
    /// Builds the view model for a signed-in user.
    ///
    /// Hydrates the draft from `profile` when present, then starts loading
    /// usage counts in the background. Must be called from within a Tokio
    /// runtime.
    ///
    /// # Errors
    ///
    /// Returns [`HirelyError::Unauthorized`] when `session` is `None`; the
    /// caller is expected to navigate away.
    pub fn initialize(
        session: Option<SessionIdentity>,
        profile: Option<ProfileRecord>,
        collaborators: ProfileCollaborators,
        settings: ProfileViewSettings,
    ) -> Result<Self> {
        let Some(identity) = session else {
            tracing::info!("[ProfileViewModel] No active session, not authorized");
            return Err(HirelyError::Unauthorized);
        };

        tracing::debug!(
            "[ProfileViewModel] Initializing for user_id={}, has_profile={}",
            identity.user_id,
            profile.is_some()
        );

        let mut state = ViewState::default();
        if let Some(record) = profile {
            state.hydrate(record);
        }

        let view_model = Self {
            inner: Arc::new(Inner {
                identity,
                collaborators,
                settings,
                state: RwLock::new(state),
                status: StatusBoard::new(),
                saving: BusyFlag::new("save"),
                uploading: BusyFlag::new("upload"),
                resetting: BusyFlag::new("password_reset"),
                stats_task: Mutex::new(None),
            }),
        };

        view_model.spawn_stats_refresh();
        Ok(view_model)
    }

    /// Builds the view model from a session provider's snapshot.
    pub fn from_snapshot(
        snapshot: Option<SessionSnapshot>,
        collaborators: ProfileCollaborators,
        settings: ProfileViewSettings,
    ) -> Result<Self> {
        let (identity, profile) = match snapshot {
            Some(snapshot) => (Some(snapshot.identity), snapshot.profile),
            None => (None, None),
        };
        Self::initialize(identity, profile, collaborators, settings)
    }

    // ============================================================================
    // Usage stats
    // ============================================================================

    fn spawn_stats_refresh(&self) {
        let view_model = self.clone();
        let handle = tokio::spawn(async move { view_model.refresh_usage_stats().await });

        let mut slot = self
            .inner
            .stats_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(handle);
    }

    /// Fetches application and saved-job counts.
    ///
    /// Both requests run concurrently and each result is merged as soon as
    /// it arrives. A failed count is logged and keeps its previous value.
    pub async fn refresh_usage_stats(&self) {
        let user_id = self.inner.identity.user_id.as_str();
        let collaborators = &self.inner.collaborators;

        let applications = async {
            match collaborators.applications.count_applications(user_id).await {
                Ok(count) => self.apply_stats(StatsUpdate::ApplicationsSent(count)).await,
                Err(e) => tracing::warn!(
                    "[ProfileViewModel] Failed to load application count: {}",
                    e
                ),
            }
        };

        let saved_jobs = async {
            match collaborators.saved_jobs.count_saved_jobs(user_id).await {
                Ok(count) => self.apply_stats(StatsUpdate::SavedJobs(count)).await,
                Err(e) => tracing::warn!(
                    "[ProfileViewModel] Failed to load saved job count: {}",
                    e
                ),
            }
        };

        tokio::join!(applications, saved_jobs);
    }

    async fn apply_stats(&self, update: StatsUpdate) {
        tracing::debug!("[ProfileViewModel] Stats update: {:?}", update);
        self.inner.state.write().await.stats.apply(update);
    }

    /// Waits for the background stats load started by [`Self::initialize`].
    pub async fn settle_stats(&self) {
        let handle = self
            .inner
            .stats_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!("[ProfileViewModel] Stats task ended abnormally: {}", e);
            }
        }
    }

    // ============================================================================
    // Local edits
    // ============================================================================

    /// Rehydrates the draft from a new upstream record.
    ///
    /// Unsaved edits are replaced.
    pub async fn record_changed(&self, record: ProfileRecord) {
        tracing::debug!("[ProfileViewModel] Rehydrating from record id={}", record.id);
        self.inner.state.write().await.hydrate(record);
    }

    /// Overwrites one draft field and clears the status.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `value` cannot be coerced to the
    /// field's kind; the draft and status are left unchanged.
    pub async fn set_field(&self, field: ProfileField, value: FieldValue) -> Result<()> {
        self.inner.state.write().await.draft.set(field, value)?;
        self.inner.status.clear();
        Ok(())
    }

    /// Like [`Self::set_field`], addressing the field by its column name.
    pub async fn set_field_by_name(&self, name: &str, value: FieldValue) -> Result<()> {
        let field: ProfileField = name
            .parse()
            .map_err(|_| HirelyError::validation(format!("Unknown profile field '{}'", name)))?;
        self.set_field(field, value).await
    }

    /// Flips a flag field. The status is left as is.
    pub async fn toggle_flag(&self, field: ProfileField) -> Result<bool> {
        self.inner.state.write().await.draft.toggle(field)
    }

    /// Edits the local password form and clears the status.
    pub async fn set_password_field(&self, field: PasswordField, value: impl Into<String>) {
        self.inner.state.write().await.password.set(field, value);
        self.inner.status.clear();
    }

    pub async fn select_tab(&self, tab: ProfileTab) {
        self.inner.state.write().await.active_tab = tab;
    }

    // ============================================================================
    // Remote operations
    // ============================================================================

    /// Sends the whole draft to the profile store, then reloads the record.
    ///
    /// On success the status clears itself after the configured delay.
    pub async fn save(&self) -> OperationOutcome {
        let Some(_guard) = self.inner.saving.try_acquire() else {
            return OperationOutcome::Busy;
        };
        self.inner.status.clear();

        let patch = self.inner.state.read().await.draft.to_patch();
        tracing::debug!(
            "[ProfileViewModel] Saving profile for user_id={}",
            self.inner.identity.user_id
        );

        match self.persist(&patch).await {
            Ok(()) => {
                tracing::info!(
                    "[ProfileViewModel] Profile saved for user_id={}",
                    self.inner.identity.user_id
                );
                self.inner.status.set_transient(
                    StatusMessage::success(SAVE_SUCCESS),
                    self.inner.settings.success_clear_after,
                );
                OperationOutcome::Succeeded
            }
            Err(e) => self.fail("save", &e, SAVE_FAILED),
        }
    }

    /// Validates, stores and attaches a resume.
    ///
    /// Oversized files and unsupported kinds are rejected before any
    /// collaborator is called. The object is written with overwrite allowed,
    /// so re-uploading replaces the previous resume.
    pub async fn upload_resume(&self, upload: ResumeUpload) -> OperationOutcome {
        let Some(_guard) = self.inner.uploading.try_acquire() else {
            return OperationOutcome::Busy;
        };

        if let Err(e) = validate_resume(&upload, &self.inner.settings.resume) {
            return self.fail("upload_resume", &e, UPLOAD_FAILED);
        }
        self.inner.status.clear();

        tracing::debug!(
            "[ProfileViewModel] Uploading resume {:?} for user_id={}",
            upload,
            self.inner.identity.user_id
        );

        match self.store_resume(&upload).await {
            Ok(url) => {
                tracing::info!("[ProfileViewModel] Resume stored at {}", url);
                self.inner.state.write().await.uploaded_resume = Some(upload.file_name);
                self.inner.status.set(StatusMessage::success(UPLOAD_SUCCESS));
                OperationOutcome::Succeeded
            }
            Err(e) => self.fail("upload_resume", &e, UPLOAD_FAILED),
        }
    }

    /// Asks the auth provider to email a password reset link.
    ///
    /// Does nothing when the session has no email address.
    pub async fn request_password_reset(&self) -> OperationOutcome {
        let Some(email) = self.inner.identity.reset_email() else {
            tracing::debug!("[ProfileViewModel] No session email, skipping password reset");
            return OperationOutcome::Skipped;
        };
        let Some(_guard) = self.inner.resetting.try_acquire() else {
            return OperationOutcome::Busy;
        };
        self.inner.status.clear();

        match self
            .inner
            .collaborators
            .password_reset
            .send_password_reset(email)
            .await
        {
            Ok(()) => {
                tracing::info!("[ProfileViewModel] Password reset email requested");
                self.inner.state.write().await.password = PasswordForm::default();
                self.inner.status.set(StatusMessage::success(RESET_SUCCESS));
                OperationOutcome::Succeeded
            }
            Err(e) => self.fail("password_reset", &e, RESET_FAILED),
        }
    }

    /// Reloads the canonical record and rehydrates the draft.
    pub async fn refresh_profile(&self) -> Result<()> {
        let user_id = &self.inner.identity.user_id;
        match self
            .inner
            .collaborators
            .profiles
            .fetch_profile(user_id)
            .await?
        {
            Some(record) => self.record_changed(record).await,
            None => tracing::warn!("[ProfileViewModel] No profile record for user_id={}", user_id),
        }
        Ok(())
    }

    async fn persist(&self, patch: &ProfilePatch) -> Result<()> {
        self.inner
            .collaborators
            .profiles
            .update_profile(&self.inner.identity.user_id, patch)
            .await?;
        self.refresh_profile().await
    }

    async fn store_resume(&self, upload: &ResumeUpload) -> Result<String> {
        let policy = &self.inner.settings.resume;
        let files = &self.inner.collaborators.files;
        let key = resume_storage_key(&self.inner.identity.user_id, &upload.file_name)?;

        files
            .upload(
                &policy.bucket,
                &key,
                upload,
                UploadOptions::overwrite(policy.cache_control_secs),
            )
            .await?;
        let url = files.public_url(&policy.bucket, &key);

        self.persist(&ProfilePatch::resume_url(url.clone())).await?;
        Ok(url)
    }

    fn fail(&self, operation: &str, error: &HirelyError, fallback: &str) -> OperationOutcome {
        tracing::error!("[ProfileViewModel] {} failed: {}", operation, error);
        let text = error.user_message().unwrap_or(fallback);
        self.inner.status.set(StatusMessage::error(text));
        OperationOutcome::Failed
    }

    // ============================================================================
    // Read access
    // ============================================================================

    pub fn identity(&self) -> &SessionIdentity {
        &self.inner.identity
    }

    pub async fn draft(&self) -> ProfileDraft {
        self.inner.state.read().await.draft.clone()
    }

    /// Last canonical record, if one has been loaded.
    pub async fn record(&self) -> Option<ProfileRecord> {
        self.inner.state.read().await.record.clone()
    }

    pub async fn stats(&self) -> UsageStats {
        self.inner.state.read().await.stats
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.inner.status.current()
    }

    pub async fn password_form(&self) -> PasswordForm {
        self.inner.state.read().await.password.clone()
    }

    pub async fn active_tab(&self) -> ProfileTab {
        self.inner.state.read().await.active_tab
    }

    pub async fn overview(&self) -> ProfileOverview {
        let state = self.inner.state.read().await;
        ProfileOverview::from_draft(&state.draft, state.stats.profile_completeness)
    }

    pub async fn resume_indicator(&self) -> ResumeIndicator {
        let state = self.inner.state.read().await;
        self.resume_indicator_for(&state)
    }

    fn resume_indicator_for(&self, state: &ViewState) -> ResumeIndicator {
        if self.inner.uploading.is_busy() {
            ResumeIndicator::Uploading
        } else if let Some(name) = &state.uploaded_resume {
            ResumeIndicator::Uploaded(name.clone())
        } else if state.record.as_ref().is_some_and(ProfileRecord::has_resume) {
            ResumeIndicator::OnFile
        } else {
            ResumeIndicator::Missing
        }
    }

    pub fn is_saving(&self) -> bool {
        self.inner.saving.is_busy()
    }

    pub fn is_uploading(&self) -> bool {
        self.inner.uploading.is_busy()
    }

    pub fn is_resetting_password(&self) -> bool {
        self.inner.resetting.is_busy()
    }

    /// Copies the whole view state.
    pub async fn snapshot(&self) -> ProfileViewSnapshot {
        let state = self.inner.state.read().await;
        ProfileViewSnapshot {
            user_id: self.inner.identity.user_id.clone(),
            email: self.inner.identity.email.clone(),
            active_tab: state.active_tab,
            draft: state.draft.clone(),
            overview: ProfileOverview::from_draft(&state.draft, state.stats.profile_completeness),
            stats: state.stats,
            status: self.inner.status.current(),
            resume: self.resume_indicator_for(&state),
            is_saving: self.is_saving(),
            is_uploading: self.is_uploading(),
            is_resetting_password: self.is_resetting_password(),
        }
    }
}

#[cfg(test)]
#[path = "view_model_test.rs"]
mod tests;
