//! Domain layer for the Hirely profile engine.
//!
//! Holds the profile record and draft models, derived metrics, the
//! collaborator traits the application layer talks to, and the shared
//! error and configuration types.

pub mod auth;
pub mod config;
pub mod error;
pub mod profile;
pub mod stats;
pub mod status;
pub mod storage;

// Re-export common error type
pub use error::HirelyError;
