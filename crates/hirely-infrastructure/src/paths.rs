//! Path management for hirely configuration files.
//!
//! Paths are resolved with the `dirs` crate, so the layout follows each
//! platform's conventions (XDG on Linux, `Application Support` on macOS,
//! `AppData` on Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for hirely_core::HirelyError {
    fn from(err: PathError) -> Self {
        hirely_core::HirelyError::config(err.to_string())
    }
}

/// Path management for hirely.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/hirely/            # Config directory
/// └── config.toml              # Backend, resume and status settings
/// ```
pub struct HirelyPaths;

impl HirelyPaths {
    const APP_DIR: &'static str = "hirely";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the hirely configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/hirely/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}
