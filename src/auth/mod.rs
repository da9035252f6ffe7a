//! Authentication module for clubauth.
//!
//! Credential validation, password hashing and the signup/login operations
//! for users and club admins.

mod password;
mod service;
pub mod validation;

pub use password::{
    hash_password, hash_password_blocking, verify_password, verify_password_blocking,
    PasswordError,
};
pub use service::{
    login_admin, login_user, signup_admin, signup_user, INVALID_ADMIN_CREDENTIALS,
    INVALID_CREDENTIALS,
};
pub use validation::{
    AdminLogin, AdminLoginRequest, AdminSignup, AdminSignupRequest, UserLogin, UserLoginRequest,
    UserSignup, UserSignupRequest, ValidationError, MIN_PASSWORD_LENGTH,
};
