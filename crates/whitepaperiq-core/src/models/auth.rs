//! Auth Models

use serde::{Deserialize, Serialize};

/// System roles as reported on a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Cross-organization admin; never assignable through the API
    SystemAdmin,
    Owner,
    Admin,
    Analyst,
    Viewer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SystemAdmin => "System Admin",
            UserRole::Owner => "Owner",
            UserRole::Admin => "Admin",
            UserRole::Analyst => "Analyst",
            UserRole::Viewer => "Viewer",
        }
    }

    /// Whether this role may manage members and organization settings
    pub fn can_manage_organization(&self) -> bool {
        matches!(self, UserRole::SystemAdmin | UserRole::Owner | UserRole::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub organization_id: String,
    pub created_at: String,
}

fn default_true() -> bool {
    true
}

impl User {
    /// Full name if set, otherwise the email address
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCredentials {
    pub organization_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationPayload {
    pub token: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl AcceptInvitationPayload {
    /// Blank names are sent as "not provided"
    pub fn new(token: &str, password: &str, full_name: &str) -> Self {
        let name = full_name.trim();
        Self {
            token: token.to_string(),
            password: password.to_string(),
            full_name: (!name.is_empty()).then(|| name.to_string()),
        }
    }
}

/// Returned by login, register and invitation acceptance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitationOrganization {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDetails {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub expires_at: String,
    pub organization: InvitationOrganization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}
