//! REST-backed counts of a user's job applications and saved jobs.

use async_trait::async_trait;
use hirely_core::error::Result;
use hirely_core::stats::{ApplicationRepository, SavedJobRepository};
use reqwest::Method;
use serde::de::IgnoredAny;

use crate::supabase_client::SupabaseClient;

const APPLICATIONS_PATH: &str = "/rest/v1/job_applications";
const SAVED_JOBS_PATH: &str = "/rest/v1/saved_jobs";

/// Counts rows of the activity tables owned by a user.
#[derive(Debug, Clone)]
pub struct RestActivityRepository {
    client: SupabaseClient,
}

impl RestActivityRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn count_rows(&self, operation: &str, table_path: &str, user_id: &str) -> Result<u64> {
        let request = self.client.request(Method::GET, table_path).query(&[
            ("user_id", format!("eq.{}", user_id)),
            ("select", "id".to_string()),
        ]);

        let rows: Vec<IgnoredAny> = self.client.send_json(operation, request).await?;
        tracing::debug!(
            "[RestActivityRepository] {} for user_id={}: {}",
            operation,
            user_id,
            rows.len()
        );
        Ok(rows.len() as u64)
    }
}

#[async_trait]
impl ApplicationRepository for RestActivityRepository {
    async fn count_applications(&self, user_id: &str) -> Result<u64> {
        self.count_rows("count_applications", APPLICATIONS_PATH, user_id)
            .await
    }
}

#[async_trait]
impl SavedJobRepository for RestActivityRepository {
    async fn count_saved_jobs(&self, user_id: &str) -> Result<u64> {
        self.count_rows("count_saved_jobs", SAVED_JOBS_PATH, user_id)
            .await
    }
}
