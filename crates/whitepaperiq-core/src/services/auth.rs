//! Authentication endpoints

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::links::encode_component;
use crate::models::{
    AcceptInvitationPayload, AuthResponse, InvitationDetails, LoginCredentials, RefreshTokenResponse,
    RegisterCredentials,
};
use crate::storage::{self, SessionStorage};
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    /// Log in and persist the session
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse> {
        let request = self.request(Method::Post, "/auth/login").json(credentials)?;
        let auth: AuthResponse = self.fetch_data(request, "Login failed").await?;
        storage::store_auth(self.storage(), &auth.access_token, &auth.user);
        tracing::info!(user = %auth.user.email, "logged in");
        Ok(auth)
    }

    /// Create an organization with its owner and persist the session
    pub async fn register(&self, credentials: &RegisterCredentials) -> ApiResult<AuthResponse> {
        let request = self.request(Method::Post, "/auth/register").json(credentials)?;
        let auth: AuthResponse = self.fetch_data(request, "Registration failed").await?;
        storage::store_auth(self.storage(), &auth.access_token, &auth.user);
        Ok(auth)
    }

    pub async fn invitation_details(&self, token: &str) -> ApiResult<InvitationDetails> {
        let path = format!("/auth/invitations/{}", encode_component(token));
        self.fetch_data(self.request(Method::Get, path), "Invalid invitation").await
    }

    pub async fn accept_invitation(&self, payload: &AcceptInvitationPayload) -> ApiResult<AuthResponse> {
        let request = self.request(Method::Post, "/auth/invitations/accept").json(payload)?;
        let auth: AuthResponse = self.fetch_data(request, "Failed to accept invitation").await?;
        storage::store_auth(self.storage(), &auth.access_token, &auth.user);
        Ok(auth)
    }

    /// Exchange the refresh cookie for a new access token.
    ///
    /// Any failure yields `None`; the caller decides what that means.
    pub async fn refresh_token(&self) -> Option<String> {
        let request = match self
            .request(Method::Post, "/auth/refresh")
            .with_credentials()
            .json(&serde_json::json!({}))
        {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build refresh request");
                return None;
            }
        };

        match self.fetch_data::<RefreshTokenResponse>(request, "Token refresh failed").await {
            Ok(refreshed) => {
                storage::store_token(self.storage(), &refreshed.access_token);
                tracing::debug!("access token refreshed");
                Some(refreshed.access_token)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to refresh token");
                None
            }
        }
    }

    /// End the session on the server; local state is cleared regardless
    pub async fn logout(&self) {
        let request = self
            .request(Method::Post, "/auth/logout")
            .with_credentials()
            .json(&serde_json::json!({}));
        if let Ok(request) = request {
            if let Err(e) = self.execute(request).await {
                tracing::debug!(error = %e, "logout request failed");
            }
        }
        storage::clear(self.storage());
    }
}
