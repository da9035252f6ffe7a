//! clubauth - account backend for club members and club admins.
//!
//! Provides signup and login over HTTP for two independent account kinds,
//! stored in SQLite with Argon2 password digests.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    hash_password, login_admin, login_user, signup_admin, signup_user, verify_password,
    AdminLoginRequest, AdminSignupRequest, PasswordError, UserLoginRequest, UserSignupRequest,
    ValidationError,
};
pub use config::Config;
pub use db::{
    AccountRepository, Admin, AdminRole, Database, NewAdmin, NewUser, SqliteAccountRepository,
    User,
};
pub use error::{ClubAuthError, Result};
pub use web::{create_router, ApiError, AppState, WebServer};
