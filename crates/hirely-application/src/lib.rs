//! Application layer for Hirely.
//!
//! This crate provides the profile view model, which coordinates the domain
//! models with the profile store, file store and auth collaborators.

pub mod profile;

pub use profile::{
    OperationOutcome, ProfileCollaborators, ProfileViewModel, ProfileViewSettings,
    ProfileViewSnapshot,
};
