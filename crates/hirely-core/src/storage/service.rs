//! File store trait.

use async_trait::async_trait;

use super::model::{BucketSpec, ResumeUpload, UploadOptions};
use crate::error::Result;

/// Object storage holding uploaded files.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Stores `upload` under `key` in `bucket`.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        upload: &ResumeUpload,
        options: UploadOptions,
    ) -> Result<()>;

    /// Public retrieval URL for `key`.
    ///
    /// A deterministic construction; it does not check that the object exists.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Creates the bucket when it does not exist yet.
    ///
    /// Returns `true` when a bucket was created.
    async fn ensure_bucket(&self, spec: &BucketSpec) -> Result<bool>;
}
