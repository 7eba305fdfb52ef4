//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: The persisted `ProfileRecord` and its visibility enum
//! - `field`: Field catalogue (names, kinds, values)
//! - `draft`: The locally edited `ProfileDraft` and the sparse `ProfilePatch`
//! - `completeness`: Completeness score over a fixed field subset
//! - `overview`: Derived presentation data for the overview tab
//! - `repository`: Profile store trait
//!
//! # Usage
//!
//! ```ignore
//! use hirely_core::profile::{ProfileDraft, ProfileField, ProfileRecord};
//! ```

mod completeness;
mod draft;
mod field;
mod model;
mod overview;
mod repository;

// Re-export public API
pub use completeness::{COMPLETENESS_FIELDS, completeness_score};
pub use draft::{ProfileDraft, ProfilePatch};
pub use field::{AVAILABILITY_OPTIONS, EXPERIENCE_LEVELS, FieldKind, FieldValue, ProfileField};
pub use model::{ProfileRecord, ProfileVisibility};
pub use overview::{ProfileOverview, ProfileTab, ResumeIndicator};
pub use repository::ProfileRepository;
