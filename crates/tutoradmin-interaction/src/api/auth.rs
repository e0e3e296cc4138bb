//! Authentication endpoints and the flows that keep the session in step.

use crate::client::{ApiClient, RequestOptions};
use serde::{Deserialize, Serialize};
use tutoradmin_core::error::Result;
use tutoradmin_core::models::{AuthResponse, LoginCredentials};

/// Outcome of asking the server whether the current token is still good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    /// The server answered and did not accept the token.
    Invalid,
    /// No answer; the token may or may not be valid.
    Unreachable,
}

impl TokenStatus {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    valid: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordBody<'a> {
    token: &'a str,
    new_password: &'a str,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// POST `/auth/login`. Does not touch the session; see [`sign_in`](Self::sign_in).
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        self.client
            .post("/auth/login", RequestOptions::new().json(credentials)?)
            .await
    }

    pub async fn logout(&self) -> Result<()> {
        self.client
            .post_empty("/auth/logout", RequestOptions::new())
            .await
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResponse> {
        let body = RefreshBody { refresh_token };
        self.client
            .post("/auth/refresh", RequestOptions::new().json(&body)?)
            .await
    }

    /// GET `/auth/verify`, classifying every outcome.
    pub async fn check_token(&self) -> TokenStatus {
        match self
            .client
            .get::<VerifyResponse>("/auth/verify", RequestOptions::new())
            .await
        {
            Ok(VerifyResponse { valid: true }) => TokenStatus::Valid,
            Ok(VerifyResponse { valid: false }) => TokenStatus::Invalid,
            Err(e) if e.is_network() => {
                tracing::debug!("[Auth] Token check unreachable: {}", e);
                TokenStatus::Unreachable
            }
            Err(e) => {
                tracing::debug!("[Auth] Token check failed: {}", e);
                TokenStatus::Invalid
            }
        }
    }

    /// True only when the server confirmed the token. Never fails.
    pub async fn verify_token(&self) -> bool {
        self.check_token().await.is_valid()
    }

    pub async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        let body = ChangePasswordBody {
            current_password,
            new_password,
        };
        self.client
            .post_empty("/auth/change-password", RequestOptions::new().json(&body)?)
            .await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<()> {
        self.client
            .post_empty(
                "/auth/forgot-password",
                RequestOptions::new().json(&ForgotPasswordBody { email })?,
            )
            .await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let body = ResetPasswordBody {
            token,
            new_password,
        };
        self.client
            .post_empty("/auth/reset-password", RequestOptions::new().json(&body)?)
            .await
    }

    // ============================================================================
    // Session flows
    // ============================================================================

    /// Logs in and stores the returned admin and token in the session.
    pub async fn sign_in(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let response = self.login(credentials).await?;
        self.client
            .session()
            .set_auth(response.user.clone(), response.token.clone())?;
        Ok(response)
    }

    /// Tells the server to log out, then clears the local session either way.
    ///
    /// A server error is returned after the local session is cleared.
    pub async fn sign_out(&self) -> Result<()> {
        let remote = self.logout().await;
        if let Err(e) = &remote {
            tracing::warn!("[Auth] Server logout failed, clearing local session: {}", e);
        }
        let local = self.client.session().logout();
        remote?;
        local
    }

    /// Exchanges a refresh token and stores the new admin and token.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthResponse> {
        let response = self.refresh_token(refresh_token).await?;
        self.client
            .session()
            .set_auth(response.user.clone(), response.token.clone())?;
        Ok(response)
    }
}
