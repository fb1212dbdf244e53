//! Organization Models

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Admin,
    Analyst,
    Viewer,
}

impl MemberRole {
    /// Roles that can be given to a member (ownership is not transferable here)
    pub const ASSIGNABLE: [MemberRole; 3] = [MemberRole::Admin, MemberRole::Analyst, MemberRole::Viewer];

    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Owner => "Owner",
            MemberRole::Admin => "Admin",
            MemberRole::Analyst => "Analyst",
            MemberRole::Viewer => "Viewer",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "owner",
            MemberRole::Admin => "admin",
            MemberRole::Analyst => "analyst",
            MemberRole::Viewer => "viewer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "owner" => Some(MemberRole::Owner),
            "admin" => Some(MemberRole::Admin),
            "analyst" => Some(MemberRole::Analyst),
            "viewer" => Some(MemberRole::Viewer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Pending,
}

impl MemberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
            MemberStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub status: MemberStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_verified: bool,
    pub joined_at: String,
    pub avatar: Option<String>,
}

impl OrganizationMember {
    /// Owners cannot be edited or removed
    pub fn is_locked(&self) -> bool {
        self.role == MemberRole::Owner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Starter,
    Professional,
    Enterprise,
    #[serde(other)]
    Other,
}

impl SubscriptionPlan {
    pub fn label(&self) -> &'static str {
        match self {
            SubscriptionPlan::Starter => "Starter",
            SubscriptionPlan::Professional => "Professional",
            SubscriptionPlan::Enterprise => "Enterprise",
            SubscriptionPlan::Other => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub used: u32,
    pub total: u32,
}

impl UsageStats {
    /// Share of credits used, clamped to 0..=100
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.used) / f64::from(self.total) * 100.0).clamp(0.0, 100.0)
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub subscription_plan: SubscriptionPlan,
    pub billing_start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage_stats: UsageStats,
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<OrganizationMember>,
}

/// Invitation that has been sent but not accepted yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingInvitation {
    pub id: String,
    pub email: String,
    pub role: MemberRole,
    pub expires_at: String,
    pub created_at: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMembersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<OrganizationMember>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_invitations: Vec<PendingInvitation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrganizationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteMemberPayload {
    pub email: String,
    pub role: MemberRole,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemberPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MemberRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}
