//! Object storage domain module.
//!
//! # Module Structure
//!
//! - `model`: Upload payloads, upload options and bucket specs
//! - `resume`: Resume validation and storage key derivation
//! - `service`: File store trait

mod model;
mod resume;
mod service;

// Re-export public API
pub use model::{BucketSpec, ResumeUpload, UploadOptions};
pub use resume::{file_extension, resume_storage_key, validate_resume};
pub use service::FileStore;
