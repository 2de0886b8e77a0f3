use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod db;
pub mod response;

/// Access role of a user.
///
/// The older `admin`/`manager`/`viewer` spelling still deserializes:
/// `admin` maps to [`Role::Superadmin`], the other two to
/// [`Role::PropertyManager`] (a legacy viewer with no assignments sees
/// nothing until assigned, the most restrictive reading).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, utoipa::ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees and manages everything, including other users.
    #[serde(alias = "admin")]
    Superadmin,
    /// Sees only the properties in their assignment list.
    #[serde(alias = "manager", alias = "viewer")]
    PropertyManager,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Superadmin => write!(f, "superadmin"),
            Role::PropertyManager => write!(f, "property_manager"),
        }
    }
}

/// A user of the system, as exposed over the API. The password hash lives
/// only on the stored document, never here.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Property ids a property_manager is scoped to. Ignored for superadmins.
    #[serde(default)]
    pub assigned_properties: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Used to store information about the signed-in caller on the request.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct UserContext {
    /// The user id
    pub user_id: String,
    /// The email the user signed in with
    pub email: String,
    /// The role claim carried by the access token
    pub role: Role,
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Merge-patch a user's role and/or property assignments. Superadmin only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_properties: Option<Vec<String>>,
}

/// The request body to register a new account.
/// NOTE: Never derive Debug here as we don't want to accidentally log the password
#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignUpRequest {
    /// Display name of the new user.
    pub name: String,
    /// The email address the user will sign in with.
    pub email: String,
    /// The password for the user.
    pub password: String,
}

/// The request body to sign in.
/// NOTE: Never derive Debug here as we don't want to accidentally log the password
#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// The request body to start a password reset.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResetPasswordRequest {
    pub email: String,
}

/// A fresh session: the access token plus the signed-in user's record.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_role_spellings_round_trip() {
        assert_eq!(
            serde_json::to_string(&Role::PropertyManager).unwrap(),
            "\"property_manager\""
        );
        let role: Role = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, Role::Superadmin);
    }

    #[test]
    fn legacy_role_spellings_still_deserialize() {
        let admin: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(admin, Role::Superadmin);

        let manager: Role = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(manager, Role::PropertyManager);

        let viewer: Role = serde_json::from_str("\"viewer\"").unwrap();
        assert_eq!(viewer, Role::PropertyManager);
    }
}
