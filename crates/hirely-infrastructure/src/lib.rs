//! Infrastructure layer for Hirely.
//!
//! REST implementations of the domain collaborator traits against a
//! Supabase-compatible backend, plus configuration loading and path
//! resolution.

pub mod config_service;
pub mod paths;
pub mod rest_activity_repository;
pub mod rest_auth_service;
pub mod rest_file_store;
pub mod rest_profile_repository;
pub mod supabase_client;

pub use crate::config_service::ConfigService;
pub use crate::paths::HirelyPaths;
pub use crate::rest_activity_repository::RestActivityRepository;
pub use crate::rest_auth_service::RestAuthService;
pub use crate::rest_file_store::RestFileStore;
pub use crate::rest_profile_repository::RestProfileRepository;
pub use crate::supabase_client::SupabaseClient;
