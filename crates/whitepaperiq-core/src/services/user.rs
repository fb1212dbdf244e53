//! Current user endpoints

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{UpdateProfilePayload, User};
use crate::storage::{self, SessionStorage};
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    pub async fn current_user(&self) -> ApiResult<User> {
        self.fetch_data(self.request(Method::Get, "/users/me"), "Failed to fetch user profile")
            .await
    }

    /// Update the profile and the stored copy of the user
    pub async fn update_profile(&self, payload: &UpdateProfilePayload) -> ApiResult<User> {
        let request = self.request(Method::Patch, "/users/me").json(payload)?;
        let user: User = self.fetch_data(request, "Failed to update profile").await?;
        storage::store_user(self.storage(), &user);
        Ok(user)
    }
}
