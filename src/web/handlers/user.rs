//! User account handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::AppState;
use crate::auth::{login_user, signup_user, UserLoginRequest, UserSignupRequest};
use crate::web::dto::{MessageResponse, Payload, UserLoginResponse, UserSignupResponse};
use crate::web::error::ApiError;

/// Create a user account.
#[utoipa::path(
    post,
    path = "/api/user/signup",
    tag = "User",
    request_body = UserSignupRequest,
    responses(
        (status = 201, description = "Account created", body = UserSignupResponse),
        (status = 400, description = "Missing field, password mismatch or short password", body = MessageResponse),
        (status = 409, description = "Username already exists", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn user_signup(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<UserSignupRequest>,
) -> Result<(StatusCode, Json<UserSignupResponse>), ApiError> {
    let user_id = signup_user(state.accounts.as_ref(), req).await?;
    Ok((StatusCode::CREATED, Json(UserSignupResponse::new(user_id))))
}

/// Log a user in by username, course, year and password.
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = "User",
    request_body = UserLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserLoginResponse),
        (status = 400, description = "Missing field", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn user_login(
    State(state): State<Arc<AppState>>,
    Payload(req): Payload<UserLoginRequest>,
) -> Result<Json<UserLoginResponse>, ApiError> {
    let user = login_user(state.accounts.as_ref(), req).await?;
    Ok(Json(UserLoginResponse::new(user)))
}
