//! REST-backed auth collaborators: current session and password reset.

use async_trait::async_trait;
use hirely_core::auth::{PasswordResetService, SessionIdentity, SessionProvider, SessionSnapshot};
use hirely_core::error::{HirelyError, Result};
use hirely_core::profile::ProfileRepository;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::rest_profile_repository::RestProfileRepository;
use crate::supabase_client::SupabaseClient;

const USER_PATH: &str = "/auth/v1/user";
const RECOVER_PATH: &str = "/auth/v1/recover";

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

/// Auth provider client.
///
/// The session is the user behind the configured access token; the profile
/// record is loaded alongside it.
#[derive(Debug, Clone)]
pub struct RestAuthService {
    client: SupabaseClient,
    profiles: RestProfileRepository,
}

impl RestAuthService {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            profiles: RestProfileRepository::new(client.clone()),
            client,
        }
    }

    async fn current_user(&self) -> Result<Option<AuthUser>> {
        if !self.client.has_access_token() {
            tracing::debug!("[RestAuthService] No access token configured");
            return Ok(None);
        }

        let response = self
            .client
            .execute("current_user", self.client.request(Method::GET, USER_PATH))
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            tracing::info!("[RestAuthService] Access token rejected, no session");
            return Ok(None);
        }

        let response = self.client.check("current_user", response).await?;
        let user = response
            .json::<AuthUser>()
            .await
            .map_err(|e| HirelyError::Serialization {
                format: "JSON".to_string(),
                message: format!("current_user response: {}", e),
            })?;
        Ok(Some(user))
    }
}

#[async_trait]
impl SessionProvider for RestAuthService {
    async fn current_session(&self) -> Result<Option<SessionSnapshot>> {
        let Some(user) = self.current_user().await? else {
            return Ok(None);
        };

        let mut identity = SessionIdentity::new(&user.id);
        if let Some(email) = user.email {
            identity = identity.with_email(email);
        }

        let profile = self.profiles.fetch_profile(&user.id).await?;
        tracing::debug!(
            "[RestAuthService] Session for user_id={}, has_profile={}",
            user.id,
            profile.is_some()
        );

        Ok(Some(SessionSnapshot { identity, profile }))
    }
}

#[async_trait]
impl PasswordResetService for RestAuthService {
    async fn send_password_reset(&self, email: &str) -> Result<()> {
        let request = self
            .client
            .request(Method::POST, RECOVER_PATH)
            .json(&RecoverRequest { email });

        self.client.send("password_reset", request).await?;
        tracing::info!("[RestAuthService] Password reset requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hirely_core::config::BackendConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer, access_token: Option<&str>) -> RestAuthService {
        let config = BackendConfig {
            url: server.uri(),
            anon_key: "anon-key".to_string(),
            access_token: access_token.map(str::to_string),
            ..BackendConfig::default()
        };
        RestAuthService::new(SupabaseClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_session_loads_user_and_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("authorization", "Bearer user-jwt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "user-1",
                "email": "ada@example.com",
                "role": "authenticated"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profiles"))
            .and(query_param("id", "eq.user-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "id": "user-1", "first_name": "Ada" }])),
            )
            .mount(&server)
            .await;

        let snapshot = service(&server, Some("user-jwt"))
            .current_session()
            .await
            .unwrap()
            .unwrap();

        assert_eq!(snapshot.identity.user_id, "user-1");
        assert_eq!(snapshot.identity.reset_email(), Some("ada@example.com"));
        assert_eq!(
            snapshot.profile.unwrap().first_name.as_deref(),
            Some("Ada")
        );
    }

    #[tokio::test]
    async fn test_no_token_means_no_session() {
        let server = MockServer::start().await;
        let session = service(&server, None).current_session().await.unwrap();

        assert!(session.is_none());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_token_means_no_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "msg": "invalid JWT"
            })))
            .mount(&server)
            .await;

        let session = service(&server, Some("stale"))
            .current_session()
            .await
            .unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_password_reset_posts_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/recover"))
            .and(header("apikey", "anon-key"))
            .and(body_json(json!({ "email": "ada@example.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        service(&server, None)
            .send_password_reset("ada@example.com")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_password_reset_rate_limit_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/recover"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "code": 429,
                "msg": "For security purposes, you can only request this once every 60 seconds"
            })))
            .mount(&server)
            .await;

        let err = service(&server, None)
            .send_password_reset("ada@example.com")
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message(),
            Some("For security purposes, you can only request this once every 60 seconds")
        );
    }
}
