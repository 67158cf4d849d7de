//! AuthService - login, OAuth callback and logout against the storefront API.
//!
//! The service owns no state of its own; it writes the token into the
//! [`SessionContext`] shared with the [`ApiClient`].

use crate::client::{ApiClient, RequestOptions};
use serde::{Deserialize, Serialize};
use shopfront_core::wire::id_from_string_or_number;
use shopfront_core::{BusinessError, SessionContext};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Authentication flows built on top of the shared client.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn session(&self) -> &SessionContext {
        self.client.session()
    }

    /// Logs in with email and password and stores the returned token.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, BusinessError> {
        let auth: AuthSession = self
            .client
            .post("/auth/login", Some(request), RequestOptions::new())
            .await?;

        if !self.session().set_token(auth.token.as_str()) {
            return Err(BusinessError::malformed("Login response carried no usable token"));
        }

        tracing::info!("[AuthService] Logged in");
        Ok(auth)
    }

    /// Stores a token delivered by an OAuth provider redirect.
    pub fn complete_oauth(&self, token: &str) -> Result<(), BusinessError> {
        if self.session().set_token(token) {
            tracing::info!("[AuthService] OAuth login completed");
            Ok(())
        } else {
            Err(BusinessError::new(
                shopfront_core::ErrorCode::TokenMissing,
                "OAuth callback did not provide a token",
            ))
        }
    }

    /// Fetches the profile of the logged-in user.
    pub async fn current_user(&self) -> Result<UserProfile, BusinessError> {
        self.client.get("/auth/me", RequestOptions::new()).await
    }

    /// Notifies the server and clears the local session.
    ///
    /// The local session is cleared even when the server call fails; that
    /// failure is logged, not returned.
    pub async fn logout(&self) {
        if self.session().is_authenticated() {
            let result: Result<(), BusinessError> = self
                .client
                .post("/auth/logout", None::<&()>, RequestOptions::new())
                .await;
            if let Err(e) = result {
                tracing::warn!("[AuthService] Server-side logout failed: {}", e);
            }
        }
        self.session().clear();
    }
}
