//! Response envelopes.
//!
//! Every body carries `success` and `message`; successful operations add
//! their payload next to them. Account payloads never include password
//! material.

use serde::Serialize;
use utoipa::ToSchema;

use crate::db::{Admin, AdminRole, User};

/// Envelope with no payload. Used for errors and for admin signup.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Successful outcome without a payload.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Failed outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Kind of principal in a login payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    User,
    Admin,
}

/// Response to a successful user signup.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSignupResponse {
    pub success: bool,
    pub message: String,
    /// ID of the new account.
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl UserSignupResponse {
    pub fn new(user_id: i64) -> Self {
        Self {
            success: true,
            message: "Account created successfully".to_string(),
            user_id,
        }
    }
}

/// Public view of a user account.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub course: String,
    pub year: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            course: user.course,
            year: user.year,
            kind: AccountType::User,
        }
    }
}

/// Response to a successful user login.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserLoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserInfo,
}

impl UserLoginResponse {
    pub fn new(user: User) -> Self {
        Self {
            success: true,
            message: "Login successful".to_string(),
            user: user.into(),
        }
    }
}

/// Public view of an admin account.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminInfo {
    pub id: i64,
    /// The admin username.
    pub username: String,
    pub role: AdminRole,
    pub club: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
}

impl From<Admin> for AdminInfo {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.admin_username,
            role: admin.role,
            club: admin.club,
            kind: AccountType::Admin,
        }
    }
}

/// Response to a successful admin login.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
    pub admin: AdminInfo,
}

impl AdminLoginResponse {
    pub fn new(admin: Admin) -> Self {
        Self {
            success: true,
            message: "Admin login successful".to_string(),
            admin: admin.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
    /// RFC 3339 UTC time the response was produced.
    pub timestamp: String,
}
