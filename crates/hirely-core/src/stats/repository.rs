//! Count sources for usage statistics.

use async_trait::async_trait;

use crate::error::Result;

/// Source of submitted job applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Number of applications the user has submitted.
    async fn count_applications(&self, user_id: &str) -> Result<u64>;
}

/// Source of saved jobs.
#[async_trait]
pub trait SavedJobRepository: Send + Sync {
    /// Number of jobs the user has saved.
    async fn count_saved_jobs(&self, user_id: &str) -> Result<u64>;
}
