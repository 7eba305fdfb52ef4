//! Authentication domain module.
//!
//! The session itself is owned by an external auth provider. This module
//! only describes what the profile engine reads from it and the password
//! reset capability it triggers.
//!
//! # Module Structure
//!
//! - `model`: Session identity and snapshot models
//! - `service`: Session provider and password reset traits
//!
//! # Usage
//!
//! ```ignore
//! use hirely_core::auth::{SessionIdentity, SessionProvider, PasswordResetService};
//! ```

mod model;
mod service;

// Re-export public API
pub use model::{PasswordField, PasswordForm, SessionIdentity, SessionSnapshot};
pub use service::{PasswordResetService, SessionProvider};
