//! Usage statistics shown on the profile overview.
//!
//! # Module Structure
//!
//! - `model`: `UsageStats` and its partial updates
//! - `repository`: Count sources for applications and saved jobs

mod model;
mod repository;

// Re-export public API
pub use model::{StatsUpdate, UsageStats};
pub use repository::{ApplicationRepository, SavedJobRepository};
