//! Organization and membership endpoints

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::links::encode_component;
use crate::models::{
    InviteMemberPayload, Organization, OrganizationMember, OrganizationMembersResponse, UpdateMemberPayload,
    UpdateOrganizationPayload,
};
use crate::storage::SessionStorage;
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport, S: SessionStorage> ApiClient<T, S> {
    pub async fn organization(&self) -> ApiResult<Organization> {
        self.fetch_data(self.request(Method::Get, "/organization"), "Failed to fetch organization")
            .await
    }

    pub async fn update_organization(&self, payload: &UpdateOrganizationPayload) -> ApiResult<Organization> {
        let request = self.request(Method::Patch, "/organization").json(payload)?;
        self.fetch_data(request, "Failed to update organization").await
    }

    pub async fn members(&self) -> ApiResult<OrganizationMembersResponse> {
        self.fetch_data(self.request(Method::Get, "/organization/members"), "Failed to fetch members")
            .await
    }

    /// Sends an invitation e-mail; the backend returns no data
    pub async fn invite_member(&self, payload: &InviteMemberPayload) -> ApiResult<()> {
        let request = self.request(Method::Post, "/organization/members").json(payload)?;
        self.fetch::<serde_json::Value>(request)
            .await?
            .into_ack("Failed to create invitation")
    }

    pub async fn update_member(&self, member_id: &str, payload: &UpdateMemberPayload) -> ApiResult<OrganizationMember> {
        let path = format!("/organization/members/{}", encode_component(member_id));
        let request = self.request(Method::Patch, path).json(payload)?;
        self.fetch_data(request, "Failed to update member").await
    }

    pub async fn remove_member(&self, member_id: &str) -> ApiResult<OrganizationMember> {
        let path = format!("/organization/members/{}", encode_component(member_id));
        self.fetch_data(self.request(Method::Delete, path), "Failed to remove member")
            .await
    }
}
