//! Configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section has
//! defaults, so an empty or missing file yields a usable configuration once
//! the backend URL and key are supplied.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HirelyConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub resume: ResumePolicy,
    #[serde(default)]
    pub status: StatusPolicy,
}

/// Connection settings for the hosted backend.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    #[serde(default)]
    pub url: String,
    /// Public (anon) API key
    #[serde(default)]
    pub anon_key: String,
    /// User access token; requests fall back to the anon key without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            access_token: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether both the URL and the key are set.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

/// Resume upload rules.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResumePolicy {
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Largest accepted file, in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Accepted file extensions, compared case-insensitively
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_cache_control_secs")]
    pub cache_control_secs: u64,
}

fn default_bucket() -> String {
    "resumes".to_string()
}

fn default_max_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()]
}

fn default_cache_control_secs() -> u64 {
    3600
}

impl Default for ResumePolicy {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            max_bytes: default_max_bytes(),
            allowed_extensions: default_allowed_extensions(),
            cache_control_secs: default_cache_control_secs(),
        }
    }
}

impl ResumePolicy {
    /// Whether `extension` is one of the accepted kinds.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    /// MIME types matching the accepted extensions, for bucket setup.
    pub fn allowed_mime_types(&self) -> Vec<String> {
        self.allowed_extensions
            .iter()
            .filter_map(|extension| match extension.to_ascii_lowercase().as_str() {
                "pdf" => Some("application/pdf"),
                "doc" => Some("application/msword"),
                "docx" => {
                    Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
                }
                _ => None,
            })
            .map(str::to_string)
            .collect()
    }

    /// Human-readable size limit, e.g. `5MB`.
    pub fn max_size_label(&self) -> String {
        const MIB: u64 = 1024 * 1024;
        if self.max_bytes % MIB == 0 {
            format!("{}MB", self.max_bytes / MIB)
        } else {
            format!("{} bytes", self.max_bytes)
        }
    }
}

/// Status banner timing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusPolicy {
    /// Delay before a save success status clears itself
    #[serde(default = "default_success_clear_after_ms")]
    pub success_clear_after_ms: u64,
}

fn default_success_clear_after_ms() -> u64 {
    3000
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            success_clear_after_ms: default_success_clear_after_ms(),
        }
    }
}

impl StatusPolicy {
    pub fn success_clear_after(&self) -> Duration {
        Duration::from_millis(self.success_clear_after_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: HirelyConfig = toml::from_str("").unwrap();
        assert_eq!(config, HirelyConfig::default());
        assert_eq!(config.resume.max_bytes, 5 * 1024 * 1024);
        assert_eq!(config.status.success_clear_after(), Duration::from_secs(3));
        assert!(!config.backend.is_configured());
    }

    #[test]
    fn test_partial_sections() {
        let config: HirelyConfig = toml::from_str(
            r#"
            [backend]
            url = "https://demo.supabase.co"
            anon_key = "anon"

            [resume]
            max_bytes = 1048576
            "#,
        )
        .unwrap();

        assert!(config.backend.is_configured());
        assert_eq!(config.backend.request_timeout_secs, 30);
        assert_eq!(config.resume.bucket, "resumes");
        assert_eq!(config.resume.max_size_label(), "1MB");
    }

    #[test]
    fn test_extension_rules() {
        let policy = ResumePolicy::default();
        assert!(policy.allows_extension("PDF"));
        assert!(policy.allows_extension("docx"));
        assert!(!policy.allows_extension("txt"));
        assert!(!policy.allows_extension(""));
        assert_eq!(policy.allowed_mime_types().len(), 3);
        assert_eq!(policy.max_size_label(), "5MB");
    }
}
