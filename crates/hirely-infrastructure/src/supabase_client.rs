//! Shared HTTP plumbing for the Supabase-compatible REST backend.
//!
//! Every collaborator in this crate talks to the backend through a
//! [`SupabaseClient`], which owns the connection pool and stamps each request
//! with the project's API key and bearer token.

use hirely_core::config::BackendConfig;
use hirely_core::error::{HirelyError, Result};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error body shapes returned by the REST, storage and auth endpoints.
///
/// Each service uses a different field for the human-readable text.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        [self.message, self.msg, self.error_description, self.error]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
    }
}

/// Extracts the user-facing message from an error response body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::into_message)
}

/// Authenticated HTTP client for one backend project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl SupabaseClient {
    /// Creates a client from the backend section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the URL or key is missing, or when
    /// the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        if !config.is_configured() {
            return Err(HirelyError::config(
                "backend.url and backend.anon_key must be set",
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| HirelyError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.url.trim().trim_end_matches('/').to_string(),
            anon_key: config.anon_key.trim().to_string(),
            access_token: config
                .access_token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Absolute URL for a backend path such as `/rest/v1/profiles`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request with the API key and bearer token attached.
    ///
    /// The bearer is the user's access token when configured, otherwise the
    /// anon key.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    /// Sends a request, turning transport failures into collaborator errors.
    ///
    /// The response status is not inspected.
    pub async fn execute(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            tracing::error!("[SupabaseClient] {} request failed: {}", operation, e);
            HirelyError::collaborator(operation, e.to_string())
        })
    }

    /// Passes 2xx responses through and turns anything else into a
    /// collaborator error carrying the body's message.
    pub async fn check(&self, operation: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            tracing::debug!("[SupabaseClient] {} -> {}", operation, status);
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            "[SupabaseClient] {} rejected with {}: {}",
            operation,
            status,
            body
        );

        match error_message(&body) {
            Some(message) => Err(HirelyError::collaborator(operation, message)),
            None => Err(HirelyError::collaborator_silent(operation)),
        }
    }

    /// [`Self::execute`] followed by [`Self::check`].
    pub async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        let response = self.execute(operation, request).await?;
        self.check(operation, response).await
    }

    /// Like [`Self::send`], then decodes the JSON body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(operation, request).await?;
        response.json::<T>().await.map_err(|e| HirelyError::Serialization {
            format: "JSON".to_string(),
            message: format!("{} response: {}", operation, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(url: &str) -> BackendConfig {
        BackendConfig {
            url: url.to_string(),
            anon_key: "anon-key".to_string(),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn test_error_message_field_precedence() {
        assert_eq!(
            error_message(r#"{"message":"JWT expired","error":"unauthorized"}"#).as_deref(),
            Some("JWT expired")
        );
        assert_eq!(
            error_message(r#"{"msg":"For security purposes, wait 60 seconds"}"#).as_deref(),
            Some("For security purposes, wait 60 seconds")
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Bad token"}"#)
                .as_deref(),
            Some("Bad token")
        );
        assert_eq!(error_message(r#"{"message":"  "}"#), None);
        assert_eq!(error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(error_message(""), None);
    }

    #[test]
    fn test_requires_url_and_key() {
        let err = SupabaseClient::new(&BackendConfig::default()).unwrap_err();
        assert!(matches!(err, HirelyError::Config(_)));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = SupabaseClient::new(&backend(" https://demo.supabase.co/ ")).unwrap();
        assert_eq!(client.base_url(), "https://demo.supabase.co");
        assert_eq!(
            client.url("/rest/v1/profiles"),
            "https://demo.supabase.co/rest/v1/profiles"
        );
        assert!(!client.has_access_token());
    }

    #[test]
    fn test_blank_access_token_is_ignored() {
        let mut config = backend("https://demo.supabase.co");
        config.access_token = Some("   ".to_string());
        assert!(!SupabaseClient::new(&config).unwrap().has_access_token());

        config.access_token = Some("user-jwt".to_string());
        assert!(SupabaseClient::new(&config).unwrap().has_access_token());
    }
}
