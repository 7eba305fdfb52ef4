//! REST-backed object storage.

use async_trait::async_trait;
use hirely_core::error::Result;
use hirely_core::storage::{BucketSpec, FileStore, ResumeUpload, UploadOptions};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::supabase_client::SupabaseClient;

const BUCKETS_PATH: &str = "/storage/v1/bucket";

#[derive(Debug, Deserialize)]
struct BucketRow {
    name: String,
}

#[derive(Debug, Serialize)]
struct CreateBucket<'a> {
    id: &'a str,
    name: &'a str,
    public: bool,
    allowed_mime_types: &'a [String],
    file_size_limit: u64,
}

/// File store over the storage API.
#[derive(Debug, Clone)]
pub struct RestFileStore {
    client: SupabaseClient,
}

impl RestFileStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

fn content_type(upload: &ResumeUpload) -> String {
    match &upload.content_type {
        Some(content_type) => content_type.clone(),
        None => mime_guess::from_path(&upload.file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string(),
    }
}

#[async_trait]
impl FileStore for RestFileStore {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        upload: &ResumeUpload,
        options: UploadOptions,
    ) -> Result<()> {
        tracing::debug!(
            "[RestFileStore] Uploading {} bytes to {}/{} (upsert={})",
            upload.size(),
            bucket,
            key,
            options.upsert
        );

        let request = self
            .client
            .request(Method::POST, &format!("/storage/v1/object/{}/{}", bucket, key))
            .header("x-upsert", options.upsert.to_string())
            .header(
                "cache-control",
                format!("max-age={}", options.cache_control_secs),
            )
            .header("content-type", content_type(upload))
            .body(upload.bytes.clone());

        self.client.send("upload", request).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        self.client
            .url(&format!("/storage/v1/object/public/{}/{}", bucket, key))
    }

    async fn ensure_bucket(&self, spec: &BucketSpec) -> Result<bool> {
        let buckets: Vec<BucketRow> = self
            .client
            .send_json("list_buckets", self.client.request(Method::GET, BUCKETS_PATH))
            .await?;

        if buckets.iter().any(|bucket| bucket.name == spec.name) {
            tracing::debug!("[RestFileStore] Bucket '{}' already exists", spec.name);
            return Ok(false);
        }

        let body = CreateBucket {
            id: &spec.name,
            name: &spec.name,
            public: spec.public,
            allowed_mime_types: &spec.allowed_mime_types,
            file_size_limit: spec.file_size_limit,
        };
        self.client
            .send(
                "create_bucket",
                self.client.request(Method::POST, BUCKETS_PATH).json(&body),
            )
            .await?;

        tracing::info!("[RestFileStore] Created bucket '{}'", spec.name);
        Ok(true)
    }
}
