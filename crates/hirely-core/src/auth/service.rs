//! Authentication collaborator traits.

use super::model::SessionSnapshot;
use crate::error::Result;

/// Source of the current session.
///
/// Implementations wrap the hosted auth provider; the profile engine never
/// manages sessions itself.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the current session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))`: An authenticated user and their profile record
    /// - `Ok(None)`: No one is signed in
    /// - `Err(_)`: The provider could not be reached
    async fn current_session(&self) -> Result<Option<SessionSnapshot>>;
}

/// Sends password reset emails.
#[async_trait::async_trait]
pub trait PasswordResetService: Send + Sync {
    /// Sends a reset link to `email`.
    ///
    /// No password travels through this call; the user picks a new one from
    /// the emailed link.
    async fn send_password_reset(&self, email: &str) -> Result<()>;
}
