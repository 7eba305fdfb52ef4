//! Profile repository trait.

use async_trait::async_trait;

use super::draft::ProfilePatch;
use super::model::ProfileRecord;
use crate::error::Result;

/// Profile store holding the canonical [`ProfileRecord`] per user.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Applies a partial update to the user's record and returns the result.
    async fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<ProfileRecord>;

    /// Re-fetches the canonical record, `None` if the user has none yet.
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>>;
}
