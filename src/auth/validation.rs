//! Credential validation for signup and login payloads.
//!
//! Rules run in a fixed order and stop at the first failure:
//! every required field must be present and non-empty, then the
//! signup-only password checks apply.

use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::AdminRole;
use crate::ClubAuthError;

/// Minimum password length for new accounts, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validation errors. The display text is the message returned to clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("All fields are required")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password is too short.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    PasswordTooShort,

    /// Role is not one of the admin roles.
    #[error("Role must be one of: lead, president")]
    InvalidRole,
}

impl From<ValidationError> for ClubAuthError {
    fn from(e: ValidationError) -> Self {
        ClubAuthError::Validation(e.to_string())
    }
}

// ============================================================================
// Raw payloads
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accept strings, and numbers rendered as their decimal text.
///
/// Clients commonly send `"year": 2` for a cohort label.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Integer(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }),
    )
}

/// User signup payload.
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct UserSignupRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub confirm_password: Option<String>,
}

/// User login payload.
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct UserLoginRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: Option<String>,
}

/// Admin signup payload.
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct AdminSignupRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub admin_username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub admin_password: Option<String>,
    /// One of `lead`, `president`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub club: Option<String>,
}

/// Admin login payload.
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub admin_username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub admin_password: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub club: Option<String>,
}

// ============================================================================
// Validated credentials
// ============================================================================

/// Validated user signup.
#[derive(Clone, PartialEq, Eq)]
pub struct UserSignup {
    pub username: String,
    pub course: String,
    pub year: String,
    pub password: String,
}

/// Validated user login.
#[derive(Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub course: String,
    pub year: String,
    pub password: String,
}

/// Validated admin signup.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSignup {
    pub admin_username: String,
    pub password: String,
    pub role: AdminRole,
    pub club: String,
}

/// Validated admin login. The role stays an opaque lookup key.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminLogin {
    pub admin_username: String,
    pub password: String,
    pub role: String,
    pub club: String,
}

const REDACTED: &str = "<redacted>";

impl fmt::Debug for UserSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSignup")
            .field("username", &self.username)
            .field("course", &self.course)
            .field("year", &self.year)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("course", &self.course)
            .field("year", &self.year)
            .field("password", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for AdminSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSignup")
            .field("admin_username", &self.admin_username)
            .field("password", &REDACTED)
            .field("role", &self.role)
            .field("club", &self.club)
            .finish()
    }
}

impl fmt::Debug for AdminLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminLogin")
            .field("admin_username", &self.admin_username)
            .field("password", &REDACTED)
            .field("role", &self.role)
            .field("club", &self.club)
            .finish()
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Take a required field. Absent and empty are treated alike; whitespace is
/// not trimmed.
fn required(field: Option<String>) -> Result<String, ValidationError> {
    field
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingFields)
}

/// Check that a new password is long enough.
///
/// # Examples
///
/// ```
/// use clubauth::auth::validation::validate_password_length;
///
/// assert!(validate_password_length("12345").is_err());
/// assert!(validate_password_length("123456").is_ok());
/// ```
pub fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Check that the confirmation repeats the password exactly.
pub fn validate_password_confirmation(
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

impl UserSignupRequest {
    /// Validate: presence, then confirmation, then length.
    pub fn validate(self) -> Result<UserSignup, ValidationError> {
        let username = required(self.username)?;
        let course = required(self.course)?;
        let year = required(self.year)?;
        let password = required(self.password)?;
        let confirm_password = required(self.confirm_password)?;

        validate_password_confirmation(&password, &confirm_password)?;
        validate_password_length(&password)?;

        Ok(UserSignup {
            username,
            course,
            year,
            password,
        })
    }
}

impl UserLoginRequest {
    /// Validate: presence only.
    pub fn validate(self) -> Result<UserLogin, ValidationError> {
        Ok(UserLogin {
            username: required(self.username)?,
            course: required(self.course)?,
            year: required(self.year)?,
            password: required(self.password)?,
        })
    }
}

impl AdminSignupRequest {
    /// Validate: presence, then length, then role membership.
    pub fn validate(self) -> Result<AdminSignup, ValidationError> {
        let admin_username = required(self.admin_username)?;
        let password = required(self.admin_password)?;
        let role = required(self.role)?;
        let club = required(self.club)?;

        validate_password_length(&password)?;
        let role = role
            .parse::<AdminRole>()
            .map_err(|_| ValidationError::InvalidRole)?;

        Ok(AdminSignup {
            admin_username,
            password,
            role,
            club,
        })
    }
}

impl AdminLoginRequest {
    /// Validate: presence only.
    pub fn validate(self) -> Result<AdminLogin, ValidationError> {
        Ok(AdminLogin {
            admin_username: required(self.admin_username)?,
            password: required(self.admin_password)?,
            role: required(self.role)?,
            club: required(self.club)?,
        })
    }
}
