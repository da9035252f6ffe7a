//! Account models: club members (users) and club admins.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Role held by a club admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    /// Club lead.
    Lead,
    /// Club president.
    President,
}

/// A role string outside the admin role enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown admin role: {0}")]
pub struct UnknownRole(pub String);

impl AdminRole {
    /// All roles, in storage order.
    pub const ALL: [AdminRole; 2] = [AdminRole::Lead, AdminRole::President];

    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Lead => "lead",
            AdminRole::President => "president",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(AdminRole::Lead),
            "president" => Ok(AdminRole::President),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for AdminRole {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A registered club member.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login username (unique).
    pub username: String,
    /// Program name, free text.
    pub course: String,
    /// Cohort label, free text.
    pub year: String,
    /// Argon2 PHC digest of the password.
    pub password_hash: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// A registered club admin.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Admin {
    /// Unique admin ID.
    pub id: i64,
    /// Login name (unique among admins).
    pub admin_username: String,
    /// Argon2 PHC digest of the password.
    pub password_hash: String,
    /// Admin role.
    #[sqlx(try_from = "String")]
    pub role: AdminRole,
    /// Club name, free text.
    pub club: String,
    /// Account creation timestamp.
    pub created_at: String,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub course: String,
    pub year: String,
    /// Pre-hashed password digest.
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        course: impl Into<String>,
        year: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            course: course.into(),
            year: year.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// Data for creating a new admin.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub admin_username: String,
    /// Pre-hashed password digest.
    pub password_hash: String,
    pub role: AdminRole,
    pub club: String,
}

impl NewAdmin {
    pub fn new(
        admin_username: impl Into<String>,
        password_hash: impl Into<String>,
        role: AdminRole,
        club: impl Into<String>,
    ) -> Self {
        Self {
            admin_username: admin_username.into(),
            password_hash: password_hash.into(),
            role,
            club: club.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(AdminRole::Lead.as_str(), "lead");
        assert_eq!(AdminRole::President.as_str(), "president");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("lead".parse::<AdminRole>().unwrap(), AdminRole::Lead);
        assert_eq!(
            "president".parse::<AdminRole>().unwrap(),
            AdminRole::President
        );
        assert_eq!(
            "treasurer".parse::<AdminRole>(),
            Err(UnknownRole("treasurer".to_string()))
        );
    }

    #[test]
    fn test_role_from_str_is_exact() {
        assert!("Lead".parse::<AdminRole>().is_err());
        assert!(" lead".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_role_roundtrip_all() {
        for role in AdminRole::ALL {
            assert_eq!(AdminRole::try_from(role.to_string()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AdminRole::President).unwrap(),
            "\"president\""
        );
    }

    #[test]
    fn test_new_user() {
        let user = NewUser::new("alice", "CS", "2", "$argon2id$digest");
        assert_eq!(user.username, "alice");
        assert_eq!(user.course, "CS");
        assert_eq!(user.year, "2");
        assert_eq!(user.password_hash, "$argon2id$digest");
    }

    #[test]
    fn test_new_admin() {
        let admin = NewAdmin::new("boss", "$argon2id$digest", AdminRole::Lead, "Chess");
        assert_eq!(admin.admin_username, "boss");
        assert_eq!(admin.role, AdminRole::Lead);
        assert_eq!(admin.club, "Chess");
    }
}
