use super::models::{
    ApiEnvelope, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Session,
    UserRoleResponse,
};
use crate::api::constants;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

/// Client for the auth controller. Unauthenticated except for the role
/// lookup, which carries the session token.
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Exchange credentials for a session. Any non-success status is
    /// reported as bad credentials; the backend does not distinguish.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = constants::login_endpoint(&self.base_url);
        debug!("logging in as {} against {}", email, url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .context("login request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!("login rejected with {}: {}", status, body);
            anyhow::bail!("invalid email or password");
        }

        let login: LoginResponse = response
            .json()
            .await
            .context("failed to parse login response")?;

        debug!("session issued, expires {}", login.expiration);
        Ok(Session {
            token: login.token,
            expires_at: login.expiration,
            user_id: login.user.id,
            email: login.user.email,
        })
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        let url = constants::register_endpoint(&self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("register request failed")?;

        let envelope: ApiEnvelope<RegisterResponse> = response
            .json()
            .await
            .context("failed to parse register response")?;

        match envelope.result {
            Some(result) => Ok(result),
            None => {
                let message = envelope
                    .error_message
                    .map(|e| e.message)
                    .unwrap_or_else(|| envelope.status.clone());
                anyhow::bail!("registration failed: {}", message)
            }
        }
    }

    /// Look up the role of the session's user.
    pub async fn fetch_role(&self, session: &Session) -> Result<UserRoleResponse> {
        let url = constants::user_role_endpoint(&self.base_url, &session.user_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&session.token)
            .send()
            .await
            .context("role request failed")?;

        let envelope: ApiEnvelope<UserRoleResponse> = response
            .json()
            .await
            .context("failed to parse role response")?;

        envelope
            .result
            .ok_or_else(|| anyhow::anyhow!("role lookup returned no result"))
    }
}
