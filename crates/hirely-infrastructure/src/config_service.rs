//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads [`HirelyConfig`] from the
//! configuration file (~/.config/hirely/config.toml) and layers environment
//! overrides on top.

use crate::paths::HirelyPaths;
use hirely_core::config::HirelyConfig;
use hirely_core::error::{HirelyError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Overrides `backend.url`
pub const ENV_BACKEND_URL: &str = "HIRELY_BACKEND_URL";
/// Overrides `backend.anon_key`
pub const ENV_ANON_KEY: &str = "HIRELY_ANON_KEY";
/// Overrides `backend.access_token`
pub const ENV_ACCESS_TOKEN: &str = "HIRELY_ACCESS_TOKEN";

/// Configuration service that loads and caches the configuration.
///
/// A missing file is not an error: every section falls back to its
/// defaults.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<HirelyConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService for the default config file location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(HirelyPaths::config_file()?))
    }

    /// Creates a ConfigService for an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Environment overrides are applied on every load.
    pub fn get_config(&self) -> Result<HirelyConfig> {
        {
            let cached = self
                .config
                .read()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let mut loaded = Self::load_file(&self.path)?;
        apply_overrides(&mut loaded, |key| std::env::var(key).ok());

        let mut cached = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *cached = Some(loaded.clone());
        Ok(loaded)
    }

    /// Reads a config file without environment overrides.
    pub fn load_file(path: &Path) -> Result<HirelyConfig> {
        if !path.exists() {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                path.display()
            );
            return Ok(HirelyConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            HirelyError::io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: HirelyConfig = toml::from_str(&content)?;
        tracing::debug!("[ConfigService] Loaded {}", path.display());
        Ok(config)
    }
}

/// Applies `HIRELY_*` overrides looked up through `lookup`.
///
/// Blank values are ignored.
pub fn apply_overrides<F>(config: &mut HirelyConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = non_blank(ENV_BACKEND_URL) {
        config.backend.url = url;
    }
    if let Some(anon_key) = non_blank(ENV_ANON_KEY) {
        config.backend.anon_key = anon_key;
    }
    if let Some(access_token) = non_blank(ENV_ACCESS_TOKEN) {
        config.backend.access_token = Some(access_token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigService::load_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, HirelyConfig::default());
    }

    #[test]
    fn test_load_file_reads_sections() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
            [backend]
            url = "https://demo.supabase.co"
            anon_key = "anon"
            request_timeout_secs = 5

            [status]
            success_clear_after_ms = 1500
            "#,
        );

        let config = ConfigService::load_file(&path).unwrap();
        assert!(config.backend.is_configured());
        assert_eq!(config.backend.request_timeout(), Duration::from_secs(5));
        assert_eq!(
            config.status.success_clear_after(),
            Duration::from_millis(1500)
        );
        assert_eq!(config.resume.bucket, "resumes");
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[backend\nurl = ");

        let err = ConfigService::load_file(&path).unwrap_err();
        assert!(matches!(err, HirelyError::Serialization { .. }));
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let mut config = HirelyConfig::default();
        config.backend.url = "https://file.supabase.co".to_string();
        config.backend.anon_key = "file-key".to_string();

        let env: HashMap<&str, &str> = [
            (ENV_BACKEND_URL, "https://env.supabase.co"),
            (ENV_ANON_KEY, "  "),
            (ENV_ACCESS_TOKEN, "user-jwt"),
        ]
        .into_iter()
        .collect();
        apply_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.url, "https://env.supabase.co");
        assert_eq!(config.backend.anon_key, "file-key");
        assert_eq!(config.backend.access_token.as_deref(), Some("user-jwt"));
    }

    #[test]
    fn test_get_config_is_cached() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[resume]\nbucket = \"cvs\"\n");
        let service = ConfigService::with_path(&path);

        assert_eq!(service.get_config().unwrap().resume.bucket, "cvs");

        std::fs::write(&path, "[resume]\nbucket = \"documents\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().resume.bucket, "cvs");

        let fresh = ConfigService::with_path(&path);
        assert_eq!(fresh.get_config().unwrap().resume.bucket, "documents");
    }
}
