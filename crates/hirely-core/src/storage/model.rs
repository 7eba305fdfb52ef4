//! Storage models.

use serde::{Deserialize, Serialize};

use crate::config::ResumePolicy;

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    /// Original file name, used for the extension only
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Declared MIME type, if the picker supplied one
    pub content_type: Option<String>,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl std::fmt::Debug for ResumeUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeUpload")
            .field("file_name", &self.file_name)
            .field("size", &self.size())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// How a file store write behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOptions {
    /// Replace an existing object at the same key instead of failing
    pub upsert: bool,
    pub cache_control_secs: u64,
}

impl UploadOptions {
    /// Overwriting upload, as used for resumes.
    pub fn overwrite(cache_control_secs: u64) -> Self {
        Self {
            upsert: true,
            cache_control_secs,
        }
    }
}

/// Desired shape of a storage bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSpec {
    pub name: String,
    pub public: bool,
    pub allowed_mime_types: Vec<String>,
    pub file_size_limit: u64,
}

impl BucketSpec {
    /// The private resumes bucket described by `policy`.
    pub fn for_resumes(policy: &ResumePolicy) -> Self {
        Self {
            name: policy.bucket.clone(),
            public: false,
            allowed_mime_types: policy.allowed_mime_types(),
            file_size_limit: policy.max_bytes,
        }
    }
}
