//! REST-backed profile store.

use async_trait::async_trait;
use hirely_core::error::{HirelyError, Result};
use hirely_core::profile::{ProfilePatch, ProfileRecord, ProfileRepository};
use reqwest::Method;

use crate::supabase_client::SupabaseClient;

const PROFILES_PATH: &str = "/rest/v1/profiles";

/// Profile store over the `profiles` table.
#[derive(Debug, Clone)]
pub struct RestProfileRepository {
    client: SupabaseClient,
}

impl RestProfileRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

fn id_filter(user_id: &str) -> String {
    format!("eq.{}", user_id)
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> Result<ProfileRecord> {
        tracing::debug!(
            "[RestProfileRepository] PATCH profile id={}, empty={}",
            user_id,
            patch.is_empty()
        );

        let request = self
            .client
            .request(Method::PATCH, PROFILES_PATH)
            .query(&[("id", id_filter(user_id))])
            .header("Prefer", "return=representation")
            .json(patch);

        let records: Vec<ProfileRecord> = self.client.send_json("update_profile", request).await?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| HirelyError::not_found("profile", user_id))
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<ProfileRecord>> {
        let request = self
            .client
            .request(Method::GET, PROFILES_PATH)
            .query(&[("id", id_filter(user_id)), ("select", "*".to_string())]);

        let records: Vec<ProfileRecord> = self.client.send_json("fetch_profile", request).await?;
        Ok(records.into_iter().next())
    }
}
