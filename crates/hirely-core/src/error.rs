//! Error types for the Hirely profile engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Hirely workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum HirelyError {
    /// No authenticated session is available
    #[error("Not authorized: no active session")]
    Unauthorized,

    /// Input rejected locally, before reaching any collaborator
    #[error("Validation error: {0}")]
    Validation(String),

    /// An external collaborator (profile store, file store, auth) failed
    #[error("{operation} failed: {}", .message.as_deref().unwrap_or("no message"))]
    Collaborator {
        operation: String,
        /// Human-readable message reported by the collaborator, if any
        message: Option<String>,
    },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HirelyError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Collaborator error carrying the collaborator's message
    pub fn collaborator(operation: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Collaborator {
            operation: operation.into(),
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    /// Creates a Collaborator error without a usable message
    pub fn collaborator_silent(operation: impl Into<String>) -> Self {
        Self::Collaborator {
            operation: operation.into(),
            message: None,
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Collaborator error
    pub fn is_collaborator(&self) -> bool {
        matches!(self, Self::Collaborator { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the message to show a user, if this error carries one.
    ///
    /// Collaborator errors expose the collaborator's own message; validation
    /// errors expose their text. Everything else returns `None` so callers
    /// fall back to an operation-specific message.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Collaborator { message, .. } => message.as_deref(),
            Self::Validation(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HirelyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HirelyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HirelyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for HirelyError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HirelyError>`.
pub type Result<T> = std::result::Result<T, HirelyError>;
