//! Club admin account handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;
use crate::auth::{login_admin, signup_admin, AdminLoginRequest, AdminSignupRequest};
use crate::web::dto::{AdminLoginResponse, MessageResponse, Payload};
use crate::web::error::ApiError;

/// Log an admin in by admin username, role, club and password.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Admin login successful", body = AdminLoginResponse),
        (status = 400, description = "Missing field", body = MessageResponse),
        (status = 401, description = "Invalid admin credentials", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    let admin = login_admin(state.accounts.as_ref(), req).await?;
    Ok(Json(AdminLoginResponse::new(admin)))
}

/// Create an admin account.
#[utoipa::path(
    post,
    path = "/api/admin/signup",
    tag = "Admin",
    request_body = AdminSignupRequest,
    responses(
        (status = 201, description = "Admin account created", body = MessageResponse),
        (status = 400, description = "Missing field, short password or unknown role", body = MessageResponse),
        (status = 409, description = "Admin username already exists", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn admin_signup(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<AdminSignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    signup_admin(state.accounts.as_ref(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Admin account created successfully")),
    ))
}
